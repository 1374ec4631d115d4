//! File-selection control. Holds at most one selected file between the user's
//! pick and the import attempt; taking the selection clears it, so picking the
//! identical file again starts a fresh attempt.

use crate::domain::SelectedFile;
use std::path::Path;

/// Default file-type filter.
pub const DEFAULT_ACCEPT: &str = ".json";

#[derive(Debug, Clone, Default)]
pub struct ImportControl {
    /// Lowercased extensions with a leading dot. Empty accepts everything.
    accept: Vec<String>,
    selected: Option<SelectedFile>,
}

impl ImportControl {
    /// `accept` is a comma-separated list like a file input's `accept` attribute (".json,.txt").
    pub fn new(accept: &str) -> Self {
        let accept = accept
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| {
                let s = s.to_ascii_lowercase();
                if s.starts_with('.') { s } else { format!(".{s}") }
            })
            .collect();
        Self {
            accept,
            selected: None,
        }
    }

    /// Whether the file-type filter admits this path.
    pub fn accepts(&self, path: &Path) -> bool {
        if self.accept.is_empty() {
            return true;
        }
        let Some(ext) = path.extension() else {
            return false;
        };
        let ext = format!(".{}", ext.to_string_lossy().to_ascii_lowercase());
        self.accept.iter().any(|a| *a == ext)
    }

    pub fn accept_list(&self) -> &[String] {
        &self.accept
    }

    /// Replaces any previous selection.
    pub fn select(&mut self, file: SelectedFile) {
        self.selected = Some(file);
    }

    pub fn selection(&self) -> Option<&SelectedFile> {
        self.selected.as_ref()
    }

    /// Hands the selection to an import attempt and resets the control.
    pub fn take_selection(&mut self) -> Option<SelectedFile> {
        self.selected.take()
    }
}
