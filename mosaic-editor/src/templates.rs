//! Palette templates — the fixed catalog of draggable block sources.

use mosaic_api::BlockKind;

/// A palette entry. Dragging it onto the canvas creates a block of `kind`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockTemplate {
    pub kind: BlockKind,
    pub label: &'static str,
    /// Icon asset key resolved by the surface.
    pub icon: &'static str,
}

static TEMPLATES: [BlockTemplate; 2] = [
    BlockTemplate {
        kind: BlockKind::Text,
        label: "Text Block",
        icon: "type",
    },
    BlockTemplate {
        kind: BlockKind::Image,
        label: "Image Block",
        icon: "image",
    },
];

/// All templates, in palette order.
pub fn templates() -> &'static [BlockTemplate] {
    &TEMPLATES
}

pub fn template_for(kind: BlockKind) -> &'static BlockTemplate {
    match kind {
        BlockKind::Text => &TEMPLATES[0],
        BlockKind::Image => &TEMPLATES[1],
    }
}
