//! Infrastructure adapters. Implement outbound ports and the file-selection surface.
//!
//! Filesystem, terminal, in-memory chat state. Map errors to DomainError.

pub mod fs;
pub mod notify;
pub mod store;
pub mod ui;
