//! Import handler adapters (application chat state).

pub mod memory_store;

pub use memory_store::{ImportedChat, InMemoryChatStore};
