//! Drag payload channel - the string-keyed slot the host carries between
//! drag origin and drop target.
//!
//! The drop target recovers what is being dragged from here alone, never from
//! the editor's internal drag session.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::{BlockId, BlockKind};

/// Key under which the dragged block kind is stored.
pub const BLOCK_TYPE_KEY: &str = "blockType";

/// Key under which the dragged block id is stored (existing-block drags only).
pub const BLOCK_ID_KEY: &str = "blockId";

/// A host-owned drag data slot, one per drag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DragChannel {
    entries: IndexMap<String, String>,
}

impl DragChannel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_data(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn get_data(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn clear_data(&mut self) {
        self.entries.clear();
    }

    /// Keys in the order they were set.
    pub fn types(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The dragged block kind, if present and recognized.
    pub fn block_kind(&self) -> Option<BlockKind> {
        self.get_data(BLOCK_TYPE_KEY)?.parse().ok()
    }

    /// The dragged block id, if present and well-formed.
    pub fn block_id(&self) -> Option<BlockId> {
        self.get_data(BLOCK_ID_KEY)?.parse().ok()
    }
}
