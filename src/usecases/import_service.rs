//! Chat import: read -> parse -> shape check -> hand off -> notify.
//!
//! - Every failure is turned into an `ImportOutcome` plus one user notice; nothing propagates
//! - `ShapePolicy::Strict` stops before the handler on any schema issue
//! - `ShapePolicy::Lenient` only warns when `messages` is not a list and imports anyway
//! - Handler failures are reported on the parse path ("Failed to parse chat file: ...")

use crate::domain::schema::{self, describe_issues};
use crate::domain::{DomainError, ImportOutcome, ImportPayload, SelectedFile, ShapePolicy};
use crate::ports::{FileTextReader, ImportHandler, ImportPort, NotificationSink};
use std::sync::Arc;
use tracing::{debug, info, warn};

pub const MSG_SOMETHING_WRONG: &str = "Something went wrong";
pub const MSG_INVALID_FORMAT: &str = "Invalid chat file format";
pub const MSG_PARSE_FAILED: &str = "Failed to parse chat file";
pub const MSG_READ_FAILED: &str = "Failed to read chat file";
pub const MSG_IMPORT_FAILED: &str = "Failed to import chat";
pub const MSG_IMPORTED: &str = "Chat imported successfully";

/// "Failed to parse chat file: <detail>", or the bare message when there is no detail.
pub fn parse_failure_message(detail: &str) -> String {
    let detail = detail.trim();
    if detail.is_empty() {
        MSG_PARSE_FAILED.to_string()
    } else {
        format!("{MSG_PARSE_FAILED}: {detail}")
    }
}

/// Chat import validator/loader.
pub struct ChatImportService {
    reader: Arc<dyn FileTextReader>,
    handler: Option<Arc<dyn ImportHandler>>,
    notifier: Arc<dyn NotificationSink>,
    policy: ShapePolicy,
}

impl ChatImportService {
    /// `handler` may be absent; every attempt then ends with a generic notice.
    pub fn new(
        reader: Arc<dyn FileTextReader>,
        handler: Option<Arc<dyn ImportHandler>>,
        notifier: Arc<dyn NotificationSink>,
        policy: ShapePolicy,
    ) -> Self {
        Self {
            reader,
            handler,
            notifier,
            policy,
        }
    }

    /// Parse, check and hand off text that has already been read.
    pub async fn import_text(&self, text: &str) -> ImportOutcome {
        let Some(handler) = self.handler.as_deref() else {
            self.notifier.error(MSG_SOMETHING_WRONG);
            return ImportOutcome::NotAttempted("no import handler".into());
        };
        self.parse_and_import(handler, text).await
    }

    async fn parse_and_import(&self, handler: &dyn ImportHandler, text: &str) -> ImportOutcome {
        let doc: serde_json::Value = match serde_json::from_str(text) {
            Ok(doc) => doc,
            Err(e) => return self.parse_failed(&e.to_string()),
        };

        if self.policy == ShapePolicy::Strict {
            let issues = schema::validate_export(&doc);
            if !issues.is_empty() {
                let reason = describe_issues(&issues);
                warn!(policy = %self.policy, issues = %reason, "chat file rejected");
                self.notifier.error(MSG_INVALID_FORMAT);
                return ImportOutcome::InvalidShape(reason);
            }
        }

        let payload = match schema::extract_payload(doc) {
            Ok(p) => p,
            Err(e) => return self.parse_failed(&e.to_string()),
        };

        if self.policy == ShapePolicy::Lenient {
            if let Some(issue) = schema::check_messages(&payload) {
                // Reported, but the import still goes ahead.
                warn!(policy = %self.policy, issue = %issue, "importing chat file with invalid shape");
                self.notifier.error(MSG_INVALID_FORMAT);
            }
        }

        self.hand_off(handler, payload).await
    }

    async fn hand_off(&self, handler: &dyn ImportHandler, payload: ImportPayload) -> ImportOutcome {
        let count = payload.message_list().map(<[_]>::len);
        match handler.import_chat(payload).await {
            Ok(()) => {
                info!(messages = ?count, "chat imported");
                self.notifier.success(MSG_IMPORTED);
                ImportOutcome::Success
            }
            Err(e) => {
                warn!(error = %e, "import handler failed");
                self.parse_failed(&e.to_string())
            }
        }
    }

    fn parse_failed(&self, detail: &str) -> ImportOutcome {
        debug!(detail, "chat file parse path failed");
        self.notifier.error(&parse_failure_message(detail));
        ImportOutcome::ParseFailure(detail.to_string())
    }

    fn read_failed(&self, file: &SelectedFile, err: DomainError) -> ImportOutcome {
        match err {
            DomainError::Read(reason) => {
                warn!(file = %file.name, reason = %reason, "chat file read failed");
                self.notifier.error(MSG_READ_FAILED);
                ImportOutcome::ReadFailure(reason)
            }
            other => {
                let text = other.to_string();
                warn!(file = %file.name, error = %text, "chat import could not start");
                if text.trim().is_empty() {
                    self.notifier.error(MSG_IMPORT_FAILED);
                    ImportOutcome::Failed(MSG_IMPORT_FAILED.to_string())
                } else {
                    self.notifier.error(&text);
                    ImportOutcome::Failed(text)
                }
            }
        }
    }
}

#[async_trait::async_trait]
impl ImportPort for ChatImportService {
    async fn import_file(&self, file: Option<SelectedFile>) -> ImportOutcome {
        let (Some(file), Some(handler)) = (file, self.handler.as_deref()) else {
            self.notifier.error(MSG_SOMETHING_WRONG);
            return ImportOutcome::NotAttempted(
                if self.handler.is_none() {
                    "no import handler"
                } else {
                    "no file selected"
                }
                .into(),
            );
        };

        let text = match self.reader.read_text(&file).await {
            Ok(t) => t,
            Err(e) => return self.read_failed(&file, e),
        };
        debug!(file = %file.name, len = text.len(), "parsing chat file");
        self.parse_and_import(handler, &text).await
    }
}
