//! Text-crafting generators: rephrasing, comments, quotes, certificates.

use model_core::{Model, ModelRequest};

use crate::error::GeneratorError;
use crate::output::{
    CertificateContent, GeneratedQuote, Rephrased, ReportCardComment, AWARD_TYPE_TOKEN,
    STUDENT_NAME_TOKEN,
};
use crate::parse::generate_parsed;
use crate::{prompts, schema};

/// Rewrite teacher-authored text, optionally in a given tone.
pub async fn rephrase_text(
    model: &dyn Model,
    text: &str,
    tone: Option<&str>,
) -> Result<Rephrased, GeneratorError> {
    let request = ModelRequest::text(prompts::rephrase(text, tone)).with_schema(schema::rephrase());
    generate_parsed(model, request, "rephrase_text").await
}

/// Synthesize a three-part report-card comment from observations.
pub async fn generate_report_comment(
    model: &dyn Model,
    student_name: &str,
    observations: &str,
) -> Result<ReportCardComment, GeneratorError> {
    let request = ModelRequest::text(prompts::report_comment(student_name, observations))
        .with_schema(schema::report_comment());
    generate_parsed(model, request, "generate_report_comment").await
}

/// Generate an attributed quote for a theme.
///
/// An empty quote or author is an invalid result, not a usable one.
pub async fn generate_quote(
    model: &dyn Model,
    theme: &str,
) -> Result<GeneratedQuote, GeneratorError> {
    let request = ModelRequest::text(prompts::quote(theme)).with_schema(schema::quote());
    let quote: GeneratedQuote = generate_parsed(model, request, "generate_quote").await?;

    if quote.quote.trim().is_empty() || quote.author.trim().is_empty() {
        return Err(GeneratorError::EmptyResult(
            "quote generator returned empty quote or author".to_string(),
        ));
    }

    Ok(quote)
}

/// Generate certificate body text carrying the placeholder tokens.
///
/// The tokens are what downstream rendering substitutes per student, so
/// text without them is unusable.
pub async fn generate_certificate_text(
    model: &dyn Model,
    award_type: &str,
    occasion: &str,
) -> Result<CertificateContent, GeneratorError> {
    let request = ModelRequest::text(prompts::certificate(award_type, occasion))
        .with_schema(schema::certificate());
    let content: CertificateContent =
        generate_parsed(model, request, "generate_certificate_text").await?;

    if !content.certificate_text.contains(STUDENT_NAME_TOKEN)
        || !content.certificate_text.contains(AWARD_TYPE_TOKEN)
    {
        return Err(GeneratorError::Malformed(
            "certificate text is missing a placeholder token".to_string(),
        ));
    }

    Ok(content)
}
