//! Pedagogical document generators: lesson plans, quizzes, rubrics,
//! weekly logs.

use model_core::{Model, ModelRequest};

use crate::error::GeneratorError;
use crate::output::{LessonPlanContent, QuizContent, RubricRow, WeeklyLogContent};
use crate::parse::generate_parsed;
use crate::{prompts, schema};

/// A table of specifications is requested once the quiz grows past this
/// many questions.
const TOS_THRESHOLD: u32 = 10;

/// What to ask for in a quiz: the topic and per-type question counts.
#[derive(Debug, Clone)]
pub struct QuizPlan {
    /// Quiz topic.
    pub topic: String,
    /// (question type, count) pairs, in presentation order.
    pub counts: Vec<(String, u32)>,
}

impl QuizPlan {
    /// Total questions requested across all types.
    pub fn total_questions(&self) -> u32 {
        self.counts.iter().map(|(_, count)| count).sum()
    }

    /// Whether the quiz is large enough to need a table of specifications.
    pub fn needs_tos(&self) -> bool {
        self.total_questions() > TOS_THRESHOLD
    }
}

/// Generate a complete daily lesson plan.
pub async fn generate_lesson_plan(
    model: &dyn Model,
    subject: &str,
    grade_level: &str,
    topic: &str,
) -> Result<LessonPlanContent, GeneratorError> {
    let request = ModelRequest::text(prompts::lesson_plan(subject, grade_level, topic))
        .with_schema(schema::lesson_plan());
    generate_parsed(model, request, "generate_lesson_plan").await
}

/// Generate a quiz per the plan's question breakdown.
pub async fn generate_quiz(
    model: &dyn Model,
    plan: &QuizPlan,
) -> Result<QuizContent, GeneratorError> {
    let include_tos = plan.needs_tos();
    let request = ModelRequest::text(prompts::quiz(&plan.topic, &plan.counts, include_tos))
        .with_schema(schema::quiz(include_tos));
    generate_parsed(model, request, "generate_quiz").await
}

/// Generate a scoring rubric.
///
/// The point total is a prompt instruction only; the rows come back as
/// the provider wrote them.
pub async fn generate_rubric(
    model: &dyn Model,
    activity: &str,
    total_points: u32,
) -> Result<Vec<RubricRow>, GeneratorError> {
    let request =
        ModelRequest::text(prompts::rubric(activity, total_points)).with_schema(schema::rubric());
    generate_parsed(model, request, "generate_rubric").await
}

/// Generate a weekly lesson log, one entry per school day.
pub async fn generate_weekly_log(
    model: &dyn Model,
    subject: &str,
    grade_level: &str,
    week_topic: &str,
) -> Result<WeeklyLogContent, GeneratorError> {
    let request = ModelRequest::text(prompts::weekly_log(subject, grade_level, week_topic))
        .with_schema(schema::weekly_log());
    generate_parsed(model, request, "generate_weekly_log").await
}
