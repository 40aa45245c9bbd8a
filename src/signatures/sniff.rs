//! Content-based type hints from the `infer` crate.

use serde::{Deserialize, Serialize};
use tracing::debug;

/// MIME type and extension guessed from the buffer contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentHint {
    pub mime: String,
    pub extension: String,
}

/// Guesses the content type of `data`; informational only.
pub fn sniff_content(data: &[u8]) -> Option<ContentHint> {
    match infer::get(data) {
        Some(kind) => {
            debug!(
                mime = kind.mime_type(),
                extension = kind.extension(),
                "Content sniffed"
            );
            Some(ContentHint {
                mime: kind.mime_type().to_string(),
                extension: kind.extension().to_string(),
            })
        }
        None => {
            debug!("No content type detected from {} bytes", data.len());
            None
        }
    }
}
