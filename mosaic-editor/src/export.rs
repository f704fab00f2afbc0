//! Layout export — a pure snapshot of the block list in its external shape.
//!
//! Image blocks keep four positional slots while editing; the export keeps
//! only the populated ones, in slot order.

use mosaic_api::{ExportedBlock, LayoutDocument};

use crate::data::{Block, BlockList};
use crate::error::Result;

pub fn export_block(block: &Block) -> ExportedBlock {
    match block {
        Block::Text(text) => ExportedBlock::Text {
            content: text.content.clone(),
        },
        Block::Image(image) => ExportedBlock::Image {
            images: image.populated().map(str::to_owned).collect(),
            selected_image_index: image.image_index(),
        },
    }
}

/// Export every block, in list order.
pub fn export_layout(blocks: &BlockList) -> LayoutDocument {
    LayoutDocument {
        blocks: blocks.iter().map(export_block).collect(),
    }
}

pub fn to_json(document: &LayoutDocument, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(document)?
    } else {
        serde_json::to_string(document)?
    };
    Ok(json)
}
