//! Export file schema. Structural checks on a parsed document.
//!
//! Expected shape:
//! ```json
//! { "description": "optional string", "messages": [ { ... }, ... ] }
//! ```
//! Message records stay opaque; only their container and object-ness are checked.

use crate::domain::ImportPayload;
use serde_json::Value;
use std::fmt;

pub const MESSAGES_FIELD: &str = "messages";
pub const DESCRIPTION_FIELD: &str = "description";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Problem {
    /// Document root is not a JSON object.
    NotAnObject { found: &'static str },
    Missing,
    WrongType {
        expected: &'static str,
        found: &'static str,
    },
}

/// One structural problem, located by a field path (`$` is the root).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    pub field: String,
    pub problem: Problem,
}

impl ValidationIssue {
    fn new(field: impl Into<String>, problem: Problem) -> Self {
        Self {
            field: field.into(),
            problem,
        }
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.problem {
            Problem::NotAnObject { found } => {
                write!(f, "{}: expected object, found {}", self.field, found)
            }
            Problem::Missing => write!(f, "{}: missing", self.field),
            Problem::WrongType { expected, found } => {
                write!(f, "{}: expected {}, found {}", self.field, expected, found)
            }
        }
    }
}

/// Joins issues into one line for logs and outcome reasons.
pub fn describe_issues(issues: &[ValidationIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Full schema check. Returns every issue found; empty means the document is valid.
pub fn validate_export(doc: &Value) -> Vec<ValidationIssue> {
    let Some(obj) = doc.as_object() else {
        return vec![ValidationIssue::new(
            "$",
            Problem::NotAnObject {
                found: json_type_name(doc),
            },
        )];
    };

    let mut issues = Vec::new();

    match obj.get(MESSAGES_FIELD) {
        None | Some(Value::Null) => {
            issues.push(ValidationIssue::new(MESSAGES_FIELD, Problem::Missing));
        }
        Some(Value::Array(items)) => {
            for (i, item) in items.iter().enumerate() {
                if !item.is_object() {
                    issues.push(ValidationIssue::new(
                        format!("{MESSAGES_FIELD}[{i}]"),
                        Problem::WrongType {
                            expected: "object",
                            found: json_type_name(item),
                        },
                    ));
                }
            }
        }
        Some(other) => issues.push(ValidationIssue::new(
            MESSAGES_FIELD,
            Problem::WrongType {
                expected: "array",
                found: json_type_name(other),
            },
        )),
    }

    match obj.get(DESCRIPTION_FIELD) {
        None | Some(Value::Null) | Some(Value::String(_)) => {}
        Some(other) => issues.push(ValidationIssue::new(
            DESCRIPTION_FIELD,
            Problem::WrongType {
                expected: "string",
                found: json_type_name(other),
            },
        )),
    }

    issues
}

/// Lenient check: only whether `messages` is list-like.
pub fn check_messages(payload: &ImportPayload) -> Option<ValidationIssue> {
    if payload.messages.is_array() {
        return None;
    }
    let problem = match payload.messages {
        Value::Null => Problem::Missing,
        ref other => Problem::WrongType {
            expected: "array",
            found: json_type_name(other),
        },
    };
    Some(ValidationIssue::new(MESSAGES_FIELD, problem))
}

/// Field access on a `null` document. Reported on the parse path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NullDocument;

impl fmt::Display for NullDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cannot read field '{}' of null", MESSAGES_FIELD)
    }
}

/// Takes `description` and `messages` straight from the document, without type checks.
///
/// Non-object roots yield `Null` for both fields; a `null` root cannot be read at all.
pub fn extract_payload(doc: Value) -> Result<ImportPayload, NullDocument> {
    match doc {
        Value::Null => Err(NullDocument),
        Value::Object(mut obj) => {
            let description = obj.remove(DESCRIPTION_FIELD).unwrap_or(Value::Null);
            let messages = obj.remove(MESSAGES_FIELD).unwrap_or(Value::Null);
            Ok(ImportPayload::new(description, messages))
        }
        _ => Ok(ImportPayload::new(Value::Null, Value::Null)),
    }
}
