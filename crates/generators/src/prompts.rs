//! Prompt-string builders, one per generator.
//!
//! Prompt text is data. The builders only interpolate caller input; they
//! never inspect model output.

use crate::output::{StudentRecord, AWARD_TYPE_TOKEN, STUDENT_NAME_TOKEN};
use crate::roster::{render_roster, RosterEntry};

/// Prompt for performance-trend analysis over a set of student records.
pub fn performance_analysis(records: &[StudentRecord]) -> String {
    let mut lines = String::new();
    for record in records {
        let scores = record
            .scores
            .iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        lines.push_str(&format!("- {}: {}\n", record.name, scores));
    }

    format!(
        "You are an experienced teacher reviewing class performance. For each \
         student below, summarize the trend across their chronological scores \
         and give one concrete, encouraging recommendation.\n\nScores:\n{}",
        lines
    )
}

/// Prompt for reading grades off a grade-sheet photo.
pub fn grade_extraction() -> String {
    "Read the attached grade sheet image. Extract every student name with the \
     score and the maximum possible score. Use the names exactly as written. \
     Skip rows you cannot read confidently."
        .to_string()
}

/// Prompt for rephrasing teacher-written text.
pub fn rephrase(text: &str, tone: Option<&str>) -> String {
    let tone = tone.unwrap_or("clear and professional");
    format!(
        "Rewrite the following text so it is {}. Keep the meaning intact and \
         do not add new claims.\n\nText:\n{}",
        tone, text
    )
}

/// Prompt for a three-part report-card comment.
pub fn report_comment(student_name: &str, observations: &str) -> String {
    format!(
        "Write a report-card comment for {} based on these teacher \
         observations. Produce three parts: strengths, areas for improvement, \
         and a warm closing statement addressed to the parents.\n\n\
         Observations:\n{}",
        student_name, observations
    )
}

/// Prompt for an inspirational quote on a theme.
pub fn quote(theme: &str) -> String {
    format!(
        "Provide one short inspirational quote about {} suitable for a \
         classroom bulletin board, with its author. Use \"Anonymous\" only \
         when no credible attribution exists.",
        theme
    )
}

/// Prompt for certificate body text with placeholder tokens.
pub fn certificate(award_type: &str, occasion: &str) -> String {
    format!(
        "Write the body text of a student certificate for the award \"{}\" \
         given at {}. Where the student's name belongs, write exactly \
         {}. Where the award type belongs, write exactly {}. Two to three \
         sentences, formal but warm.",
        award_type, occasion, STUDENT_NAME_TOKEN, AWARD_TYPE_TOKEN
    )
}

/// Prompt for a full daily lesson plan.
pub fn lesson_plan(subject: &str, grade_level: &str, topic: &str) -> String {
    format!(
        "Create a complete daily lesson plan for {} ({}) on the topic \
         \"{}\". Include the content standard, performance standard, learning \
         references and materials, a sequence of procedure steps each tagged \
         with the PPST domain it addresses, exactly four options per \
         evaluation question, and closing remarks.",
        subject, grade_level, topic
    )
}

/// Prompt for a quiz with per-type question counts.
pub fn quiz(topic: &str, counts: &[(String, u32)], include_tos: bool) -> String {
    let breakdown = counts
        .iter()
        .map(|(question_type, count)| format!("{} {}", count, question_type))
        .collect::<Vec<_>>()
        .join(", ");

    let tos_clause = if include_tos {
        " Include a table of specifications mapping objectives to item counts \
         and percentages."
    } else {
        ""
    };

    format!(
        "Create a quiz on \"{}\" with the following question breakdown: {}. \
         Group questions by type. Add one or two short follow-up activities.{}",
        topic, breakdown, tos_clause
    )
}

/// Prompt for a scoring rubric summing to a fixed total.
pub fn rubric(activity: &str, total_points: u32) -> String {
    format!(
        "Create a scoring rubric for the activity \"{}\". List the criteria \
         with the points for each. The points must sum to exactly {}.",
        activity, total_points
    )
}

/// Prompt for a weekly lesson log.
pub fn weekly_log(subject: &str, grade_level: &str, week_topic: &str) -> String {
    format!(
        "Create a weekly lesson log for {} ({}) covering \"{}\". Produce one \
         entry per school day (Monday to Friday) with objectives, the main \
         activities, and remarks.",
        subject, grade_level, week_topic
    )
}

/// User prompt for the attendance command: the roster plus the teacher's
/// free-text instruction.
pub fn attendance_command(command: &str, roster: &[RosterEntry]) -> String {
    format!(
        "Class roster: {}.\n\nTeacher's instruction: {}",
        render_roster(roster),
        command
    )
}

/// System instruction for attendance intent extraction, with few-shot
/// examples mapping phrasings to tool arguments.
pub fn attendance_system_instruction() -> String {
    "You convert a teacher's natural-language attendance instruction into a \
     single update_attendance(status, student_names) call. status is one of \
     present, absent, late. student_names are the names mentioned, copied as \
     written; use [\"ALL\"] when the instruction covers the whole class. If \
     the instruction is not about attendance, do not call the tool.\n\n\
     Examples:\n\
     - \"Mark Juan and Maria absent today\" -> \
       update_attendance(status=\"absent\", student_names=[\"Juan\", \"Maria\"])\n\
     - \"si Ana late daw\" -> \
       update_attendance(status=\"late\", student_names=[\"Ana\"])\n\
     - \"everyone is present\" -> \
       update_attendance(status=\"present\", student_names=[\"ALL\"])"
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_certificate_prompt_carries_tokens() {
        let prompt = certificate("Best in Math", "the closing ceremony");
        assert!(prompt.contains(STUDENT_NAME_TOKEN));
        assert!(prompt.contains(AWARD_TYPE_TOKEN));
    }

    #[test]
    fn test_attendance_command_renders_roster() {
        let roster = vec![
            RosterEntry::new("s1", "Juan", "Dela Cruz"),
            RosterEntry::new("s2", "Maria", "Santos"),
        ];
        let prompt = attendance_command("mark Juan absent", &roster);
        assert!(prompt.contains("Juan Dela Cruz, Maria Santos"));
        assert!(prompt.contains("mark Juan absent"));
    }

    #[test]
    fn test_quiz_prompt_breakdown() {
        let counts = vec![("multiple choice".to_string(), 5), ("essay".to_string(), 2)];
        let prompt = quiz("Photosynthesis", &counts, false);
        assert!(prompt.contains("5 multiple choice, 2 essay"));
        assert!(!prompt.contains("table of specifications"));

        let with_tos = quiz("Photosynthesis", &counts, true);
        assert!(with_tos.contains("table of specifications"));
    }
}
