//! Editor error types.
//!
//! Only the edges fail: reading config, parsing replay scripts, and rendering
//! the export document. Block-list and drag operations absorb bad input.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EditorError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid config {}: {source}", .path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("script line {line}: {source}")]
    Script {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, EditorError>;
