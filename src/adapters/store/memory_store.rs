//! Implements ImportHandler. Merges imported chats into in-memory application state.
//!
//! Nothing is persisted; the store lives as long as the process.

use crate::domain::{DomainError, ImportPayload, Message};
use crate::ports::ImportHandler;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use tracing::info;

/// Description used when the export carries none.
pub const UNTITLED_CHAT: &str = "Imported chat";

/// A chat that has been merged into application state.
#[derive(Debug, Clone, PartialEq)]
pub struct ImportedChat {
    pub id: u64,
    pub description: String,
    pub messages: Vec<Message>,
    pub imported_at: DateTime<Utc>,
}

#[derive(Debug, Default)]
struct StoreData {
    next_id: u64,
    chats: Vec<ImportedChat>,
}

/// In-memory chat list.
#[derive(Debug, Default)]
pub struct InMemoryChatStore {
    data: RwLock<StoreData>,
}

impl InMemoryChatStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// All imported chats, oldest first.
    pub async fn chats(&self) -> Vec<ImportedChat> {
        self.data.read().await.chats.clone()
    }

    pub async fn len(&self) -> usize {
        self.data.read().await.chats.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait::async_trait]
impl ImportHandler for InMemoryChatStore {
    async fn import_chat(&self, payload: ImportPayload) -> Result<(), DomainError> {
        let description = payload
            .description_text()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or(UNTITLED_CHAT)
            .to_string();
        let serde_json::Value::Array(messages) = payload.messages else {
            return Err(DomainError::Handler("messages must be an array".into()));
        };

        let mut data = self.data.write().await;
        data.next_id += 1;
        let id = data.next_id;
        info!(
            id,
            description = %description,
            count = messages.len(),
            "merged imported chat"
        );
        data.chats.push(ImportedChat {
            id,
            description,
            messages,
            imported_at: Utc::now(),
        });
        Ok(())
    }
}
