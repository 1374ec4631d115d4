//! Recording notification sink. Keeps every notice in order.
//!
//! Used by tests and for diagnostics after a batch of imports.

use crate::domain::{Notification, NotificationLevel};
use crate::ports::NotificationSink;
use std::sync::Mutex;
use tracing::debug;

#[derive(Debug, Default)]
pub struct RecordingNotifier {
    notes: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything recorded so far, oldest first.
    pub fn notifications(&self) -> Vec<Notification> {
        self.notes
            .lock()
            .map(|n| n.clone())
            .unwrap_or_else(|poisoned| poisoned.into_inner().clone())
    }

    /// `(level, message)` pairs, oldest first. Handy for assertions.
    pub fn messages(&self) -> Vec<(NotificationLevel, String)> {
        self.notifications()
            .into_iter()
            .map(|n| (n.level, n.message))
            .collect()
    }

    pub fn clear(&self) {
        match self.notes.lock() {
            Ok(mut notes) => notes.clear(),
            Err(poisoned) => poisoned.into_inner().clear(),
        }
    }

    fn push(&self, level: NotificationLevel, message: &str) {
        debug!(?level, text = message, "notification recorded");
        let note = Notification::new(level, message);
        match self.notes.lock() {
            Ok(mut notes) => notes.push(note),
            Err(poisoned) => poisoned.into_inner().push(note),
        }
    }
}

impl NotificationSink for RecordingNotifier {
    fn success(&self, message: &str) {
        self.push(NotificationLevel::Success, message);
    }

    fn error(&self, message: &str) {
        self.push(NotificationLevel::Error, message);
    }
}
