//! Block storage — owns the ordered block list and the block-ID-to-index map.
//!
//! Every mutation is applied in place and visible to the next reader. Requests
//! that target a missing block or an invalid slot are absorbed: the method
//! returns `false` and the list is untouched.

use std::collections::HashMap;

use mosaic_api::{BlockId, BlockKind};
use tracing::{debug, trace};

use super::blocks::Block;

/// A structural mutation issued by the drag session on drop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockCommand {
    /// Create a block of `kind` at `at` (end of list when `None`).
    Insert { kind: BlockKind, at: Option<usize> },
    /// Move block `id` to `at` (last position when `None`).
    Reorder { id: BlockId, at: Option<usize> },
}

/// The ordered collection of blocks on the canvas.
///
/// All mutations go through `BlockList` methods so the index stays in sync.
#[derive(Debug)]
pub struct BlockList {
    blocks: Vec<Block>,
    /// Fast BlockId → index lookup. Rebuilt after every structural change.
    block_index: HashMap<BlockId, usize>,
    next_block_id: u64,
}

impl BlockList {
    pub fn new() -> Self {
        Self {
            blocks: Vec::new(),
            block_index: HashMap::new(),
            next_block_id: 1,
        }
    }

    fn next_id(&mut self) -> BlockId {
        let id = BlockId(self.next_block_id);
        self.next_block_id += 1;
        id
    }

    fn reindex(&mut self) {
        self.block_index.clear();
        for (idx, block) in self.blocks.iter().enumerate() {
            self.block_index.insert(block.id(), idx);
        }
    }

    fn position(&self, id: BlockId) -> Option<usize> {
        self.block_index.get(&id).copied()
    }

    // --- Reads ---

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Block> {
        self.blocks.iter()
    }

    /// Look up a block by ID.
    pub fn get(&self, id: BlockId) -> Option<&Block> {
        self.position(id).and_then(|idx| self.blocks.get(idx))
    }

    fn get_mut(&mut self, id: BlockId) -> Option<&mut Block> {
        let idx = self.position(id)?;
        self.blocks.get_mut(idx)
    }

    pub fn contains(&self, id: BlockId) -> bool {
        self.block_index.contains_key(&id)
    }

    pub fn index_of(&self, id: BlockId) -> Option<usize> {
        self.position(id)
    }

    pub fn ids(&self) -> Vec<BlockId> {
        self.blocks.iter().map(Block::id).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    // --- Structural mutations ---

    /// Create a default block of `kind` at `at` (clamped to the end) and return its id.
    pub fn insert_block(&mut self, kind: BlockKind, at: Option<usize>) -> BlockId {
        let id = self.next_id();
        let idx = at.map_or(self.blocks.len(), |i| i.min(self.blocks.len()));
        self.blocks.insert(idx, Block::new(id, kind));
        self.reindex();
        debug!(block_id = %id, %kind, index = idx, "Inserted block");
        id
    }

    /// Move block `id` to `to_index`, clamped to `[0, len - 1]`. Returns
    /// false when the block is missing or already sits at that index.
    pub fn reorder_block(&mut self, id: BlockId, to_index: usize) -> bool {
        let Some(from) = self.position(id) else {
            debug!(block_id = %id, "Reorder ignored: no such block");
            return false;
        };
        let to = to_index.min(self.blocks.len() - 1);
        if from == to {
            debug!(block_id = %id, index = to, "Reorder ignored: already in place");
            return false;
        }
        let block = self.blocks.remove(from);
        self.blocks.insert(to, block);
        self.reindex();
        debug!(block_id = %id, from, to, "Reordered block");
        true
    }

    pub fn remove_block(&mut self, id: BlockId) -> bool {
        let Some(idx) = self.position(id) else {
            debug!(block_id = %id, "Remove ignored: no such block");
            return false;
        };
        self.blocks.remove(idx);
        self.reindex();
        debug!(block_id = %id, "Removed block");
        true
    }

    /// Insert a copy of block `id` right after it. Returns the copy's id.
    pub fn duplicate_block(&mut self, id: BlockId) -> Option<BlockId> {
        let Some(idx) = self.position(id) else {
            debug!(block_id = %id, "Duplicate ignored: no such block");
            return None;
        };
        let new_id = self.next_id();
        let copy = self.blocks[idx].duplicate(new_id);
        self.blocks.insert(idx + 1, copy);
        self.reindex();
        debug!(block_id = %id, copy_id = %new_id, "Duplicated block");
        Some(new_id)
    }

    /// Apply a drop command. Returns the affected block id when something changed.
    pub fn apply(&mut self, command: BlockCommand) -> Option<BlockId> {
        match command {
            BlockCommand::Insert { kind, at } => Some(self.insert_block(kind, at)),
            BlockCommand::Reorder { id, at } => {
                let to = at.unwrap_or(usize::MAX);
                self.reorder_block(id, to).then_some(id)
            }
        }
    }

    // --- Content edits ---

    /// Replace the content of a text block. Ignored for image blocks.
    pub fn update_block_content(&mut self, id: BlockId, content: impl Into<String>) -> bool {
        match self.get_mut(id) {
            Some(Block::Text(block)) => {
                block.content = content.into();
                trace!(block_id = %id, "Updated text content");
                true
            }
            Some(Block::Image(_)) => {
                debug!(block_id = %id, "Content update ignored: not a text block");
                false
            }
            None => {
                debug!(block_id = %id, "Content update ignored: no such block");
                false
            }
        }
    }

    /// Fill or clear one image slot. Rejected for out-of-range slots and non-image blocks.
    pub fn update_block_image(&mut self, id: BlockId, slot: usize, image: Option<String>) -> bool {
        match self.get_mut(id) {
            Some(Block::Image(block)) => {
                let applied = block.set_image(slot, image);
                if applied {
                    trace!(block_id = %id, slot, "Updated image slot");
                } else {
                    debug!(block_id = %id, slot, "Image update rejected: slot out of range");
                }
                applied
            }
            Some(Block::Text(_)) => {
                debug!(block_id = %id, "Image update ignored: not an image block");
                false
            }
            None => {
                debug!(block_id = %id, "Image update ignored: no such block");
                false
            }
        }
    }

    /// Select the displayed slot of an image block, clamped to the slot range.
    pub fn set_selected_image_index(&mut self, id: BlockId, index: usize) -> bool {
        match self.get_mut(id) {
            Some(Block::Image(block)) => {
                let stored = block.select(index);
                trace!(block_id = %id, requested = index, stored, "Selected image slot");
                true
            }
            _ => {
                debug!(block_id = %id, "Image selection ignored: no such image block");
                false
            }
        }
    }
}

impl Default for BlockList {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a BlockList {
    type Item = &'a Block;
    type IntoIter = std::slice::Iter<'a, Block>;

    fn into_iter(self) -> Self::IntoIter {
        self.blocks.iter()
    }
}
