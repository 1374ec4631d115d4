//! Domain entities. Pure data structures for the import flow.
//!
//! No filesystem/terminal types here; adapters map into these.

use chrono::{DateTime, Utc};
use serde_json::Value;
use std::fmt;
use std::path::{Path, PathBuf};

/// A single chat message. Opaque record owned by the host chat system;
/// the import flow never looks inside it.
pub type Message = Value;

/// File handle handed over by the file-selection surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub path: PathBuf,
    /// Display name (file name without directories).
    pub name: String,
}

impl SelectedFile {
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self { path, name }
    }
}

/// `(description, messages)` pair extracted from an export file.
///
/// Both fields are carried exactly as parsed (`Null` when absent). Whether they
/// have the expected types depends on the shape policy that let the payload through;
/// use the accessors for the typed view.
#[derive(Debug, Clone, PartialEq)]
pub struct ImportPayload {
    pub description: Value,
    pub messages: Value,
}

impl ImportPayload {
    pub fn new(description: Value, messages: Value) -> Self {
        Self {
            description,
            messages,
        }
    }

    /// Description as text, if it is a string.
    pub fn description_text(&self) -> Option<&str> {
        self.description.as_str()
    }

    /// Messages as an ordered list, if `messages` is an array.
    pub fn message_list(&self) -> Option<&[Message]> {
        self.messages.as_array().map(Vec::as_slice)
    }
}

/// Result of one import attempt. Every variant except `Success` has already
/// been reported to the user when it is returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportOutcome {
    /// Payload accepted and handed to the import handler.
    Success,
    /// Text was not valid JSON, or the import handler failed.
    ParseFailure(String),
    /// The file could not be read.
    ReadFailure(String),
    /// The parsed document does not have the required shape.
    InvalidShape(String),
    /// No file selected, or no import handler configured.
    NotAttempted(String),
    /// Fault outside the read/parse path (e.g. the read could not be started).
    Failed(String),
}

impl ImportOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, ImportOutcome::Success)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Success,
    Error,
}

/// One transient user notice ("toast").
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
    pub at: DateTime<Utc>,
}

impl Notification {
    pub fn new(level: NotificationLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            at: Utc::now(),
        }
    }
}

/// How strictly the parsed document is checked before it reaches the import handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShapePolicy {
    /// Full schema check; any issue stops the import before the handler runs.
    Strict,
    /// Only `messages` is checked; a mismatch is reported but the handler
    /// is still called with the raw values.
    #[default]
    Lenient,
}

impl fmt::Display for ShapePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapePolicy::Strict => f.write_str("strict"),
            ShapePolicy::Lenient => f.write_str("lenient"),
        }
    }
}

impl std::str::FromStr for ShapePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" => Ok(ShapePolicy::Strict),
            "lenient" | "warn" => Ok(ShapePolicy::Lenient),
            other => Err(format!("unknown shape policy: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn selected_file_uses_file_name_for_display() {
        let file = SelectedFile::new("/tmp/exports/trip.json");
        assert_eq!(file.name, "trip.json");
        assert_eq!(file.path, PathBuf::from("/tmp/exports/trip.json"));
    }

    #[test]
    fn payload_accessors_only_expose_expected_types() {
        let ok = ImportPayload::new(json!("trip"), json!([{"role": "user"}]));
        assert_eq!(ok.description_text(), Some("trip"));
        assert_eq!(ok.message_list().map(<[Message]>::len), Some(1));

        let bad = ImportPayload::new(json!(7), json!("oops"));
        assert_eq!(bad.description_text(), None);
        assert!(bad.message_list().is_none());
    }

    #[test]
    fn shape_policy_parses_case_insensitively() {
        assert_eq!("Strict".parse::<ShapePolicy>(), Ok(ShapePolicy::Strict));
        assert_eq!("LENIENT".parse::<ShapePolicy>(), Ok(ShapePolicy::Lenient));
        assert_eq!("warn".parse::<ShapePolicy>(), Ok(ShapePolicy::Lenient));
        assert!("loose".parse::<ShapePolicy>().is_err());
        assert_eq!(ShapePolicy::default(), ShapePolicy::Lenient);
    }
}
