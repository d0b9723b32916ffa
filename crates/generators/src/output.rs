//! Typed result shapes for the generators.
//!
//! Field names mirror the provider-facing JSON contract (camelCase)
//! exactly; downstream consumers read these documents verbatim.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Placeholder token substituted with the student's name at render time.
pub const STUDENT_NAME_TOKEN: &str = "^^[STUDENT_NAME]^^";

/// Placeholder token substituted with the award type at render time.
pub const AWARD_TYPE_TOKEN: &str = "##[AWARD_TYPE]##";

/// One student's scores, input to performance analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentRecord {
    /// Student display name.
    pub name: String,
    /// Chronological assessment scores.
    pub scores: Vec<f64>,
}

/// Performance-trend analysis result for one student.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceInsight {
    pub student_name: String,
    pub trend_summary: String,
    pub recommendation: String,
}

/// One grade read from a grade-sheet image.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedGrade {
    pub student_name: String,
    pub score: f64,
    pub max_score: f64,
}

/// Rephrased text result.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rephrased {
    pub revised_text: String,
}

/// Report-card comment, in three sections.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportCardComment {
    pub strengths: String,
    pub areas_for_improvement: String,
    pub closing_statement: String,
}

/// A generated quote with attribution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedQuote {
    pub quote: String,
    pub author: String,
}

/// Certificate body text carrying the placeholder tokens.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificateContent {
    pub certificate_text: String,
}

/// One procedure step of a lesson plan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Procedure {
    pub title: String,
    pub content: String,
    /// PPST domain reference for the step.
    pub ppst: String,
}

/// One evaluation question with four options.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationQuestion {
    pub question: String,
    pub options: Vec<String>,
    pub answer: String,
}

/// A full daily lesson plan.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LessonPlanContent {
    pub content_standard: String,
    pub performance_standard: String,
    pub topic: String,
    pub learning_references: String,
    pub learning_materials: String,
    pub procedures: Vec<Procedure>,
    pub evaluation_questions: Vec<EvaluationQuestion>,
    pub remarks_content: String,
}

/// One row of a table of specifications.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TosRow {
    pub objective: String,
    pub items: u32,
    pub percentage: String,
}

/// One quiz question. `options` is absent for non-multiple-choice types.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub question: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
    pub answer: String,
}

/// A generated quiz.
///
/// `questionsByType` preserves the provider's key order, hence the
/// [`IndexMap`]. `tableOfSpecifications` is present only when the total
/// requested question count exceeds ten.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizContent {
    pub quiz_title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table_of_specifications: Option<Vec<TosRow>>,
    pub questions_by_type: IndexMap<String, Vec<QuizQuestion>>,
    pub activities: Vec<String>,
}

/// One rubric criterion and its points.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RubricRow {
    pub criteria: String,
    pub points: u32,
}

/// One day of a weekly lesson log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyEntry {
    pub day: String,
    pub objectives: String,
    pub activities: Vec<String>,
    pub remarks: String,
}

/// A weekly lesson log (DLL).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeeklyLogContent {
    pub days: Vec<DailyEntry>,
}

/// The validated output of the attendance command resolver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedAttendance {
    /// Attendance status as the provider reported it.
    pub status: String,
    /// De-duplicated roster identifiers, in resolution order.
    pub student_ids: Vec<String>,
}
