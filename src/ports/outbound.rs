//! Outbound ports. Application calls into infrastructure and the host.
//!
//! Implemented by adapters.

use crate::domain::{DomainError, ImportPayload, SelectedFile};

/// Reads a selected file as text. Single-shot, no streaming.
#[async_trait::async_trait]
pub trait FileTextReader: Send + Sync {
    /// Full contents of the file, decoded as text.
    ///
    /// `DomainError::Read` when the read itself fails; `DomainError::Setup` when
    /// the handle cannot be read from at all.
    async fn read_text(&self, file: &SelectedFile) -> Result<String, DomainError>;
}

/// Host-supplied handler that merges an imported chat into application state.
/// Ownership of the payload moves to the handler.
#[async_trait::async_trait]
pub trait ImportHandler: Send + Sync {
    async fn import_chat(&self, payload: ImportPayload) -> Result<(), DomainError>;
}

/// Transient user notices. Fire-and-forget: callers never inspect a result.
pub trait NotificationSink: Send + Sync {
    fn success(&self, message: &str);

    fn error(&self, message: &str);
}
