//! Export document - the serialized layout produced on save.
//!
//! Field presence follows the block kind: a text record carries no image
//! fields and an image record carries no `content`. Absent means absent in
//! the JSON, not an empty default.

use serde::{Deserialize, Serialize};

use crate::BlockKind;

/// The whole composed layout, blocks in canvas order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutDocument {
    pub blocks: Vec<ExportedBlock>,
}

impl LayoutDocument {
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

/// One exported block record, keyed by its declared type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ExportedBlock {
    Text {
        content: String,
    },
    Image {
        /// Populated slots only, in slot order.
        images: Vec<String>,
        #[serde(rename = "selectedImageIndex")]
        selected_image_index: usize,
    },
}

impl ExportedBlock {
    pub fn kind(&self) -> BlockKind {
        match self {
            ExportedBlock::Text { .. } => BlockKind::Text,
            ExportedBlock::Image { .. } => BlockKind::Image,
        }
    }

    pub fn content(&self) -> Option<&str> {
        match self {
            ExportedBlock::Text { content } => Some(content),
            ExportedBlock::Image { .. } => None,
        }
    }

    pub fn images(&self) -> Option<&[String]> {
        match self {
            ExportedBlock::Image { images, .. } => Some(images),
            ExportedBlock::Text { .. } => None,
        }
    }

    pub fn selected_image_index(&self) -> Option<usize> {
        match self {
            ExportedBlock::Image { selected_image_index, .. } => Some(*selected_image_index),
            ExportedBlock::Text { .. } => None,
        }
    }
}
