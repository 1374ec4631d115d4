//! Inbound port. The file-selection surface calls into the application.

use crate::domain::{ImportOutcome, SelectedFile};

/// Input port: run one import attempt for whatever the user selected.
#[async_trait::async_trait]
pub trait ImportPort: Send + Sync {
    /// `None` means nothing was selected. The outcome has already been
    /// reported through the notification sink when this returns.
    async fn import_file(&self, file: Option<SelectedFile>) -> ImportOutcome;
}
