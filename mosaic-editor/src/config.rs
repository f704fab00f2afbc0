//! Editor configuration.
//!
//! Read from `<config dir>/mosaic/config.json` when present. Missing fields
//! take their defaults and unknown fields are ignored.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{EditorError, Result};

const CONFIG_DIR: &str = "mosaic";
const CONFIG_FILE: &str = "config.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Header title.
    pub title: String,

    /// Shown on the canvas while it holds no blocks.
    pub empty_state_message: String,

    /// Pretty-print saved layouts.
    pub pretty_export: bool,

    /// Default log filter when `RUST_LOG` is unset.
    pub log_level: String,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            title: String::from("Block Editor"),
            empty_state_message: String::from("Drag elements from the left panel to add blocks"),
            pretty_export: true,
            log_level: String::from("info"),
        }
    }
}

impl EditorConfig {
    /// Where the config file lives on this platform, if there is a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE))
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        serde_json::from_str(&text).map_err(|source| EditorError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load from the default location, or fall back to defaults if no file exists.
    pub fn discover() -> Result<Self> {
        match Self::default_path() {
            Some(path) if path.is_file() => {
                debug!(path = %path.display(), "Loading config");
                Self::load(&path)
            }
            _ => Ok(Self::default()),
        }
    }
}
