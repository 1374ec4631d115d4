//! chat-import: load exported chat transcripts back into in-memory chat state.
//! Hexagonal layout: domain, ports, adapters, use cases.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod shared;
pub mod usecases;
