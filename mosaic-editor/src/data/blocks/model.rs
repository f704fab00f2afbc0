//! Core block types: Block, TextBlock, ImageBlock.

use mosaic_api::{BlockId, BlockKind, IMAGE_SLOTS};

/// A content unit on the canvas. Text and image blocks are interleaved in
/// list order; the position in the list is the visual and export position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Text(TextBlock),
    Image(ImageBlock),
}

impl Block {
    /// A fresh block of `kind` with default field values.
    pub fn new(id: BlockId, kind: BlockKind) -> Self {
        match kind {
            BlockKind::Text => Block::Text(TextBlock::new(id)),
            BlockKind::Image => Block::Image(ImageBlock::new(id)),
        }
    }

    pub fn id(&self) -> BlockId {
        match self {
            Block::Text(b) => b.id,
            Block::Image(b) => b.id,
        }
    }

    pub fn kind(&self) -> BlockKind {
        match self {
            Block::Text(_) => BlockKind::Text,
            Block::Image(_) => BlockKind::Image,
        }
    }

    /// Same content under a different id.
    pub(crate) fn duplicate(&self, id: BlockId) -> Self {
        let mut copy = self.clone();
        match &mut copy {
            Block::Text(b) => b.id = id,
            Block::Image(b) => b.id = id,
        }
        copy
    }

    pub fn as_text(&self) -> Option<&TextBlock> {
        match self {
            Block::Text(b) => Some(b),
            Block::Image(_) => None,
        }
    }

    pub fn as_image(&self) -> Option<&ImageBlock> {
        match self {
            Block::Image(b) => Some(b),
            Block::Text(_) => None,
        }
    }
}

/// A block of user-typed text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextBlock {
    pub id: BlockId,
    pub content: String,
}

impl TextBlock {
    pub fn new(id: BlockId) -> Self {
        Self { id, content: String::new() }
    }
}

/// A block with a fixed row of image slots and one selected slot.
///
/// Slots keep stable positions so the surface can bind upload targets to
/// them; an empty slot is `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageBlock {
    pub id: BlockId,
    images: [Option<String>; IMAGE_SLOTS],
    /// Always `< IMAGE_SLOTS`.
    image_index: usize,
}

impl ImageBlock {
    pub fn new(id: BlockId) -> Self {
        Self {
            id,
            images: Default::default(),
            image_index: 0,
        }
    }

    pub fn images(&self) -> &[Option<String>; IMAGE_SLOTS] {
        &self.images
    }

    pub fn image(&self, slot: usize) -> Option<&str> {
        self.images.get(slot)?.as_deref()
    }

    pub fn image_index(&self) -> usize {
        self.image_index
    }

    /// Populated slot values in slot order.
    pub fn populated(&self) -> impl Iterator<Item = &str> {
        self.images.iter().filter_map(|slot| slot.as_deref())
    }

    /// Fill or clear `slot`. An empty string clears it.
    /// Returns false without touching anything when `slot` is out of range.
    pub(crate) fn set_image(&mut self, slot: usize, image: Option<String>) -> bool {
        let Some(target) = self.images.get_mut(slot) else {
            return false;
        };
        *target = image.filter(|s| !s.is_empty());
        true
    }

    /// Select a slot, clamped into range. Returns the stored index.
    pub(crate) fn select(&mut self, index: usize) -> usize {
        self.image_index = index.min(IMAGE_SLOTS - 1);
        self.image_index
    }
}
