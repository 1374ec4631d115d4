//! Domain errors. Used by ports and use cases.
//!
//! Adapters map infrastructure errors into these.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Underlying read failed (missing file, permission, truncated read).
    #[error("Read error: {0}")]
    Read(String),

    /// The read could not be started for this handle at all.
    #[error("{0}")]
    Setup(String),

    /// The host import handler rejected or failed the import.
    #[error("{0}")]
    Handler(String),

    #[error("UI error: {0}")]
    Ui(String),

    #[error("Config error: {0}")]
    Config(String),
}
