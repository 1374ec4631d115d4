//! Application use cases. Orchestrate domain logic via ports.

pub mod boundary;
pub mod import_service;

pub use boundary::{BoundaryResult, ContainmentBoundary, FALLBACK_NOTICE};
pub use import_service::ChatImportService;
