//! Performance-trend analysis and grade-sheet extraction.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use model_core::{Model, ModelRequest};

use crate::error::GeneratorError;
use crate::output::{ExtractedGrade, PerformanceInsight, StudentRecord};
use crate::parse::generate_parsed;
use crate::{prompts, schema};

/// Summarize each student's score trend and recommend a next step.
pub async fn analyze_performance(
    model: &dyn Model,
    records: &[StudentRecord],
) -> Result<Vec<PerformanceInsight>, GeneratorError> {
    let request = ModelRequest::text(prompts::performance_analysis(records))
        .with_schema(schema::performance_analysis());

    generate_parsed(model, request, "analyze_performance").await
}

/// Read student names and scores off a grade-sheet photo.
pub async fn extract_grades(
    model: &dyn Model,
    image_bytes: &[u8],
    mime_type: &str,
) -> Result<Vec<ExtractedGrade>, GeneratorError> {
    let request = ModelRequest::text(prompts::grade_extraction())
        .with_inline_image(mime_type, BASE64.encode(image_bytes))
        .with_schema(schema::grade_extraction());

    generate_parsed(model, request, "extract_grades").await
}

#[cfg(test)]
mod tests {
    use super::*;
    use mock_model::{FailingModel, StaticModel};
    use model_core::RequestPart;

    fn records() -> Vec<StudentRecord> {
        vec![StudentRecord {
            name: "Ana Gomez".to_string(),
            scores: vec![70.0, 78.0, 85.0],
        }]
    }

    #[tokio::test]
    async fn test_analyze_performance_parses_insights() {
        let model = StaticModel::new(
            r#"[{"studentName": "Ana Gomez", "trendSummary": "Steadily improving.",
                 "recommendation": "Offer enrichment work."}]"#,
        );
        let insights = analyze_performance(&model, &records()).await.unwrap();
        assert_eq!(insights.len(), 1);
        assert_eq!(insights[0].student_name, "Ana Gomez");
    }

    #[tokio::test]
    async fn test_analyze_performance_prompt_lists_scores() {
        let model = StaticModel::new("[]");
        analyze_performance(&model, &records()).await.unwrap();

        let requests = model.requests().await;
        let RequestPart::Text(prompt) = &requests[0].parts[0] else {
            panic!("Expected a text part");
        };
        assert!(prompt.contains("Ana Gomez: 70, 78, 85"));
        assert!(requests[0].response_schema.is_some());
    }

    #[tokio::test]
    async fn test_extract_grades_sends_inline_image() {
        let model = StaticModel::new(
            r#"```json
            [{"studentName": "Juan Dela Cruz", "score": 38, "maxScore": 50}]
            ```"#,
        );
        let grades = extract_grades(&model, b"fake-image-bytes", "image/jpeg")
            .await
            .unwrap();
        assert_eq!(grades[0].score, 38.0);
        assert_eq!(grades[0].max_score, 50.0);

        let requests = model.requests().await;
        let RequestPart::InlineImage { mime_type, data } = &requests[0].parts[1] else {
            panic!("Expected an inline image part");
        };
        assert_eq!(mime_type, "image/jpeg");
        assert_eq!(data, &BASE64.encode(b"fake-image-bytes"));
    }

    #[tokio::test]
    async fn test_model_failure_propagates() {
        let model = FailingModel::new("Quota exceeded");
        let err = analyze_performance(&model, &records()).await.unwrap_err();
        assert!(matches!(err, GeneratorError::Model(_)));
    }
}
