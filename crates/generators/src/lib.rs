//! Content generators and the attendance command resolver.
//!
//! Every generator follows the same shape: build one prompt plus one
//! structured-output schema, dispatch through the [`Model`] seam, trim
//! and JSON-parse the text payload into a typed result. The attendance
//! resolver is the exception: it asks the model for a callable-tool
//! invocation and then resolves the returned free-text names against a
//! concrete roster deterministically.
//!
//! [`Model`]: model_core::Model

mod analysis;
mod attendance;
mod error;
pub mod output;
mod parse;
mod planning;
pub mod prompts;
pub mod roster;
pub mod schema;
mod writing;

pub use analysis::{analyze_performance, extract_grades};
pub use attendance::{resolve_attendance_command, ATTENDANCE_TOOL};
pub use error::GeneratorError;
pub use output::ResolvedAttendance;
pub use planning::{
    generate_lesson_plan, generate_quiz, generate_rubric, generate_weekly_log, QuizPlan,
};
pub use roster::RosterEntry;
pub use writing::{
    generate_certificate_text, generate_quote, generate_report_comment, rephrase_text,
};
