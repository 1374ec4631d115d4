//! Implements FileTextReader. Whole-file async reads via tokio::fs.
//! Reads run to EOF, so whatever the file holds at read time is the content.
//! Decoding is UTF-8 with replacement of invalid sequences, so decoding itself never fails;
//! a leading byte-order mark is dropped.

use crate::domain::{DomainError, SelectedFile};
use crate::ports::FileTextReader;
use tokio::fs;
use tracing::debug;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Reads selected files from the local filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct TokioFileReader;

impl TokioFileReader {
    pub fn new() -> Self {
        Self
    }
}

fn decode_text(bytes: &[u8]) -> String {
    let body = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    String::from_utf8_lossy(body).into_owned()
}

#[async_trait::async_trait]
impl FileTextReader for TokioFileReader {
    async fn read_text(&self, file: &SelectedFile) -> Result<String, DomainError> {
        if file.path.as_os_str().is_empty() {
            return Err(DomainError::Setup("selected file has no path".into()));
        }
        let meta = fs::metadata(&file.path)
            .await
            .map_err(|e| DomainError::Read(format!("{}: {}", file.name, e)))?;
        if meta.is_dir() {
            return Err(DomainError::Setup(format!("{} is a directory", file.name)));
        }

        let bytes = fs::read(&file.path)
            .await
            .map_err(|e| DomainError::Read(format!("{}: {}", file.name, e)))?;
        debug!(file = %file.name, bytes = bytes.len(), "read chat file");
        Ok(decode_text(&bytes))
    }
}
