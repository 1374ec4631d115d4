//! Core domain layer. No external I/O dependencies.
//!
//! Entities, the export schema, and errors live here. Dependencies flow inward.

pub mod entities;
pub mod errors;
pub mod schema;

pub use entities::{
    ImportOutcome, ImportPayload, Message, Notification, NotificationLevel, SelectedFile,
    ShapePolicy,
};
pub use errors::DomainError;
pub use schema::{Problem, ValidationIssue};
