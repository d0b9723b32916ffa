//! Structured-output schema literals.
//!
//! These are provider-facing data contracts, not logic. They use the
//! provider's uppercase type names (OBJECT, ARRAY, STRING, NUMBER,
//! INTEGER) and are attached to requests verbatim.

use serde_json::{json, Value};

/// Schema for performance-trend analysis results.
pub fn performance_analysis() -> Value {
    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "studentName": {"type": "STRING"},
                "trendSummary": {"type": "STRING"},
                "recommendation": {"type": "STRING"}
            },
            "required": ["studentName", "trendSummary", "recommendation"]
        }
    })
}

/// Schema for grades extracted from a grade-sheet image.
pub fn grade_extraction() -> Value {
    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "studentName": {"type": "STRING"},
                "score": {"type": "NUMBER"},
                "maxScore": {"type": "NUMBER"}
            },
            "required": ["studentName", "score", "maxScore"]
        }
    })
}

/// Schema for rephrased text.
pub fn rephrase() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "revisedText": {"type": "STRING"}
        },
        "required": ["revisedText"]
    })
}

/// Schema for a report-card comment.
pub fn report_comment() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "strengths": {"type": "STRING"},
            "areasForImprovement": {"type": "STRING"},
            "closingStatement": {"type": "STRING"}
        },
        "required": ["strengths", "areasForImprovement", "closingStatement"]
    })
}

/// Schema for a generated quote.
pub fn quote() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "quote": {"type": "STRING"},
            "author": {"type": "STRING"}
        },
        "required": ["quote", "author"]
    })
}

/// Schema for certificate body text.
pub fn certificate() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "certificateText": {"type": "STRING"}
        },
        "required": ["certificateText"]
    })
}

/// Schema for a full daily lesson plan.
pub fn lesson_plan() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "contentStandard": {"type": "STRING"},
            "performanceStandard": {"type": "STRING"},
            "topic": {"type": "STRING"},
            "learningReferences": {"type": "STRING"},
            "learningMaterials": {"type": "STRING"},
            "procedures": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "title": {"type": "STRING"},
                        "content": {"type": "STRING"},
                        "ppst": {"type": "STRING"}
                    },
                    "required": ["title", "content", "ppst"]
                }
            },
            "evaluationQuestions": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "question": {"type": "STRING"},
                        "options": {
                            "type": "ARRAY",
                            "items": {"type": "STRING"},
                            "minItems": 4,
                            "maxItems": 4
                        },
                        "answer": {"type": "STRING"}
                    },
                    "required": ["question", "options", "answer"]
                }
            },
            "remarksContent": {"type": "STRING"}
        },
        "required": [
            "contentStandard", "performanceStandard", "topic",
            "learningReferences", "learningMaterials", "procedures",
            "evaluationQuestions", "remarksContent"
        ]
    })
}

/// Schema for a generated quiz.
///
/// The table of specifications is only part of the contract when the
/// total requested question count exceeds ten.
pub fn quiz(include_tos: bool) -> Value {
    let mut properties = json!({
        "quizTitle": {"type": "STRING"},
        "questionsByType": {
            "type": "OBJECT",
            "description": "Keys are question types; values are arrays of questions."
        },
        "activities": {
            "type": "ARRAY",
            "items": {"type": "STRING"}
        }
    });
    let mut required = vec!["quizTitle", "questionsByType", "activities"];

    if include_tos {
        properties["tableOfSpecifications"] = json!({
            "type": "ARRAY",
            "items": {
                "type": "OBJECT",
                "properties": {
                    "objective": {"type": "STRING"},
                    "items": {"type": "INTEGER"},
                    "percentage": {"type": "STRING"}
                },
                "required": ["objective", "items", "percentage"]
            }
        });
        required.push("tableOfSpecifications");
    }

    json!({
        "type": "OBJECT",
        "properties": properties,
        "required": required
    })
}

/// Schema for rubric rows.
pub fn rubric() -> Value {
    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "criteria": {"type": "STRING"},
                "points": {"type": "INTEGER"}
            },
            "required": ["criteria", "points"]
        }
    })
}

/// Schema for a weekly lesson log.
pub fn weekly_log() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "days": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "day": {"type": "STRING"},
                        "objectives": {"type": "STRING"},
                        "activities": {
                            "type": "ARRAY",
                            "items": {"type": "STRING"}
                        },
                        "remarks": {"type": "STRING"}
                    },
                    "required": ["day", "objectives", "activities", "remarks"]
                }
            }
        },
        "required": ["days"]
    })
}

/// Parameter schema for the `update_attendance` tool.
pub fn attendance_tool_params() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "status": {
                "type": "STRING",
                "enum": ["present", "absent", "late"],
                "description": "Attendance status to apply."
            },
            "student_names": {
                "type": "ARRAY",
                "items": {"type": "STRING"},
                "description": "Student names mentioned, or [\"ALL\"] for the whole class."
            }
        },
        "required": ["status", "student_names"]
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiz_schema_tos_flag() {
        let without = quiz(false);
        assert!(without["properties"].get("tableOfSpecifications").is_none());

        let with = quiz(true);
        assert!(with["properties"]["tableOfSpecifications"].is_object());
        assert!(with["required"]
            .as_array()
            .unwrap()
            .contains(&serde_json::json!("tableOfSpecifications")));
    }

    #[test]
    fn test_attendance_tool_params_required_fields() {
        let params = attendance_tool_params();
        let required = params["required"].as_array().unwrap();
        assert_eq!(required.len(), 2);
        assert!(required.contains(&serde_json::json!("status")));
        assert!(required.contains(&serde_json::json!("student_names")));
    }
}
