//! The attendance command resolver.
//!
//! Intent extraction is delegated to the model's callable-tool mechanism;
//! name resolution against the roster is deterministic and local (see
//! [`roster`](crate::roster)). "The model found nothing actionable" is a
//! clean `None`, not an error; only transport and provider failures fail
//! the call.

use model_core::{hash_prompt, FunctionDecl, Model, ModelRequest};
use tracing::{debug, warn};

use crate::error::GeneratorError;
use crate::output::ResolvedAttendance;
use crate::roster::{resolve_names, RosterEntry};
use crate::{prompts, schema};

/// Name of the single callable tool the model may invoke.
pub const ATTENDANCE_TOOL: &str = "update_attendance";

/// Statuses the tool declaration enumerates. The provider's value is
/// forwarded verbatim either way; anything outside this set only logs.
const KNOWN_STATUSES: [&str; 3] = ["present", "absent", "late"];

/// Parse a natural-language attendance instruction against a roster.
///
/// Returns `Ok(None)` when the model produced no usable intent: no tool
/// invocation, or an invocation missing `status` or `student_names`.
/// Unmatched names are dropped silently, so the identifier list may be
/// empty even on `Ok(Some(_))`.
pub async fn resolve_attendance_command(
    model: &dyn Model,
    command: &str,
    roster: &[RosterEntry],
) -> Result<Option<ResolvedAttendance>, GeneratorError> {
    let instruction = prompts::attendance_system_instruction();
    debug!(instruction_sha = %hash_prompt(&instruction), "dispatching attendance command");

    let request = ModelRequest::text(prompts::attendance_command(command, roster))
        .with_system_instruction(instruction)
        .with_tool(FunctionDecl {
            name: ATTENDANCE_TOOL.to_string(),
            description: "Record an attendance status for the named students.".to_string(),
            parameters: schema::attendance_tool_params(),
        });

    let response = model.generate(request).await.map_err(|e| {
        warn!(error = %e, operation = "resolve_attendance_command", "model call failed");
        GeneratorError::from(e)
    })?;

    let Some(call) = response.first_tool_call() else {
        warn!(command, "No tool invocation returned; treating as no actionable intent");
        return Ok(None);
    };

    // The invocation arguments are untrusted; missing fields degrade to
    // the sentinel rather than failing.
    let Some(status) = call.get_str("status") else {
        return Ok(None);
    };
    let Some(names) = call.get_str_array("student_names") else {
        return Ok(None);
    };

    if !KNOWN_STATUSES.contains(&status) {
        warn!(status, "Provider returned an unrecognized attendance status");
    }

    Ok(Some(ResolvedAttendance {
        status: status.to_string(),
        student_ids: resolve_names(roster, &names),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use mock_model::{FailingModel, ToolCallModel};
    use serde_json::json;

    fn sample_roster() -> Vec<RosterEntry> {
        vec![
            RosterEntry::new("s1", "Juan", "Dela Cruz"),
            RosterEntry::new("s2", "Maria", "Santos"),
            RosterEntry::new("s3", "Ana", "Gomez"),
        ]
    }

    #[tokio::test]
    async fn test_full_names_resolved() {
        let model = ToolCallModel::new(
            ATTENDANCE_TOOL,
            json!({"status": "absent", "student_names": ["Juan Dela Cruz", "Maria Santos"]}),
        );
        let resolved = resolve_attendance_command(&model, "Juan and Maria are absent", &sample_roster())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(resolved.status, "absent");
        assert_eq!(resolved.student_ids, vec!["s1".to_string(), "s2".to_string()]);
    }

    #[tokio::test]
    async fn test_first_name_substring() {
        let model = ToolCallModel::new(
            ATTENDANCE_TOOL,
            json!({"status": "late", "student_names": ["Ana"]}),
        );
        let resolved = resolve_attendance_command(&model, "Ana is late", &sample_roster())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(resolved.status, "late");
        assert_eq!(resolved.student_ids, vec!["s3".to_string()]);
    }

    #[tokio::test]
    async fn test_all_sentinel() {
        let model = ToolCallModel::new(
            ATTENDANCE_TOOL,
            json!({"status": "present", "student_names": ["ALL"]}),
        );
        let resolved = resolve_attendance_command(&model, "everyone is here", &sample_roster())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(
            resolved.student_ids,
            vec!["s1".to_string(), "s2".to_string(), "s3".to_string()]
        );
    }

    #[tokio::test]
    async fn test_unmatched_names_yield_empty_ids() {
        let model = ToolCallModel::new(
            ATTENDANCE_TOOL,
            json!({"status": "absent", "student_names": ["Carlos Reyes"]}),
        );
        let resolved = resolve_attendance_command(&model, "Carlos is absent", &sample_roster())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(resolved.status, "absent");
        assert!(resolved.student_ids.is_empty());
    }

    #[tokio::test]
    async fn test_no_tool_call_is_sentinel() {
        let model = ToolCallModel::silent();
        let resolved = resolve_attendance_command(&model, "what a nice day", &sample_roster())
            .await
            .unwrap();
        assert!(resolved.is_none());
    }

    #[tokio::test]
    async fn test_missing_status_is_sentinel() {
        let model = ToolCallModel::new(
            ATTENDANCE_TOOL,
            json!({"student_names": ["Ana"]}),
        );
        let resolved = resolve_attendance_command(&model, "Ana", &sample_roster())
            .await
            .unwrap();
        assert!(resolved.is_none());
    }

    #[tokio::test]
    async fn test_missing_student_names_is_sentinel() {
        let model = ToolCallModel::new(ATTENDANCE_TOOL, json!({"status": "absent"}));
        let resolved = resolve_attendance_command(&model, "someone is absent", &sample_roster())
            .await
            .unwrap();
        assert!(resolved.is_none());
    }

    #[tokio::test]
    async fn test_unrecognized_status_passes_through() {
        let model = ToolCallModel::new(
            ATTENDANCE_TOOL,
            json!({"status": "excused", "student_names": ["Ana"]}),
        );
        let resolved = resolve_attendance_command(&model, "Ana is excused", &sample_roster())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(resolved.status, "excused");
    }

    #[tokio::test]
    async fn test_provider_failure_propagates() {
        let model = FailingModel::new("Failed to call the AI service.");
        let err = resolve_attendance_command(&model, "Ana is late", &sample_roster())
            .await
            .unwrap_err();
        assert_eq!(
            err.user_message(),
            model_core::classify::UPSTREAM_MESSAGE
        );
    }
}
