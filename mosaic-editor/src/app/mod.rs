//! Editor — owns the block list and the drag session.
//!
//! Signals arrive one at a time and each runs to completion. The drag session
//! never touches the block list directly: on drop it returns a command and the
//! editor applies it.

pub mod message;
mod update;

use mosaic_api::{BlockId, BlockKind, DragChannel, DragOrigin, LayoutDocument, NodeId};
use tracing::{debug, info};

use crate::config::EditorConfig;
use crate::data::{Block, BlockList};
use crate::error::Result;
use crate::export;
use crate::features::drag::{DragSession, DragSource, SurfaceHierarchy};
use crate::templates::{self, BlockTemplate};

pub use message::{BlockMsg, DragMsg, EditorMessage, EditorOutput};

pub struct Editor {
    blocks: BlockList,
    drag: DragSession,
    config: EditorConfig,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}

impl Editor {
    pub fn new(config: EditorConfig) -> Self {
        Self {
            blocks: BlockList::new(),
            drag: DragSession::new(),
            config,
        }
    }

    // --- Reads ---

    pub fn blocks(&self) -> &BlockList {
        &self.blocks
    }

    pub fn drag(&self) -> &DragSession {
        &self.drag
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn templates(&self) -> &'static [BlockTemplate] {
        templates::templates()
    }

    /// The canvas placeholder, shown only while there are no blocks.
    pub fn empty_state(&self) -> Option<&str> {
        self.blocks
            .is_empty()
            .then_some(self.config.empty_state_message.as_str())
    }

    // --- Drag lifecycle ---

    /// Start dragging from a template or an existing block. `channel` is
    /// rewritten with the drag payload. Any drag already in progress is
    /// discarded either way; returns false, with the session idle and the
    /// channel empty, when the origin names a block that is not on the canvas.
    pub fn begin_drag(&mut self, origin: DragOrigin, channel: &mut DragChannel) -> bool {
        let (source, kind) = match origin {
            DragOrigin::Template { kind } => (DragSource::Template, kind),
            DragOrigin::Block { id } => match self.blocks.get(id) {
                Some(block) => (DragSource::ExistingBlock(id), block.kind()),
                None => {
                    debug!(block_id = %id, "Drag start ignored: no such block");
                    self.drag.on_drag_end();
                    channel.clear_data();
                    return false;
                }
            },
        };
        self.drag.begin_drag(source, kind, channel);
        true
    }

    pub fn drag_over(&mut self) {
        self.drag.on_drag_over();
    }

    pub fn drag_leave(
        &mut self,
        target: NodeId,
        related: Option<NodeId>,
        surface: &impl SurfaceHierarchy,
    ) {
        self.drag.on_drag_leave(target, related, surface);
    }

    /// Handle a drop. Returns the inserted or moved block, if any.
    pub fn handle_drop(&mut self, channel: &DragChannel, at: Option<usize>) -> Option<BlockId> {
        let command = self.drag.on_drop(channel, at)?;
        self.blocks.apply(command)
    }

    pub fn drag_end(&mut self) {
        self.drag.on_drag_end();
    }

    // --- Block operations ---

    pub fn insert_block(&mut self, kind: BlockKind, at: Option<usize>) -> BlockId {
        self.blocks.insert_block(kind, at)
    }

    pub fn reorder_block(&mut self, id: BlockId, to_index: usize) -> bool {
        self.blocks.reorder_block(id, to_index)
    }

    pub fn remove_block(&mut self, id: BlockId) -> bool {
        self.blocks.remove_block(id)
    }

    pub fn duplicate_block(&mut self, id: BlockId) -> Option<BlockId> {
        self.blocks.duplicate_block(id)
    }

    pub fn update_block_content(&mut self, id: BlockId, content: impl Into<String>) -> bool {
        self.blocks.update_block_content(id, content)
    }

    pub fn update_block_image(&mut self, id: BlockId, slot: usize, image: Option<String>) -> bool {
        self.blocks.update_block_image(id, slot, image)
    }

    pub fn set_selected_image_index(&mut self, id: BlockId, index: usize) -> bool {
        self.blocks.set_selected_image_index(id, index)
    }

    pub fn block(&self, id: BlockId) -> Option<&Block> {
        self.blocks.get(id)
    }

    // --- Save ---

    /// Export the current layout.
    pub fn save(&self) -> LayoutDocument {
        let document = export::export_layout(&self.blocks);
        info!(blocks = document.len(), "Saved layout");
        debug!(?document, "Saved layout contents");
        document
    }

    /// Export the current layout as JSON, formatted per config.
    pub fn save_json(&self) -> Result<String> {
        export::to_json(&self.save(), self.config.pretty_export)
    }
}
