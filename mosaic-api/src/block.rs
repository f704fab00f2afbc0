//! Block identity and kind - the pieces every layer agrees on.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Number of fixed image slots carried by every image block.
pub const IMAGE_SLOTS: usize = 4;

/// Unique identifier for a block on the canvas.
///
/// Assigned once at creation and never reused, even after the block is removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlockId(pub u64);

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for BlockId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(BlockId)
    }
}

/// The kind of content a block holds. Fixed at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockKind {
    Text,
    Image,
}

impl BlockKind {
    /// All kinds, in palette order.
    pub const ALL: [BlockKind; 2] = [BlockKind::Text, BlockKind::Image];

    /// The string key carried through the drag channel and the export document.
    pub fn as_str(self) -> &'static str {
        match self {
            BlockKind::Text => "text",
            BlockKind::Image => "image",
        }
    }
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A string that does not name any block kind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown block type: {0:?}")]
pub struct UnknownBlockKind(pub String);

impl FromStr for BlockKind {
    type Err = UnknownBlockKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(BlockKind::Text),
            "image" => Ok(BlockKind::Image),
            other => Err(UnknownBlockKind(other.to_string())),
        }
    }
}
