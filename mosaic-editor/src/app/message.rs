//! Message types that drive the editor update loop.
//!
//! Nested enum structure: drag signals and block edits each have their own
//! message type, wrapped by the root `EditorMessage` enum.

use mosaic_api::{BlockId, DragChannel, DragOrigin, LayoutDocument, NodeId};

// =========================================================================
// Root message
// =========================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum EditorMessage {
    Drag(DragMsg),
    Block(BlockMsg),
    Save,
}

/// Drag-and-drop lifecycle signals from the surface.
#[derive(Debug, Clone, PartialEq)]
pub enum DragMsg {
    /// A drag began on a template or an existing block.
    Start(DragOrigin),
    /// The drag is over the canvas.
    Over,
    /// The drag left `target` for `related`.
    Leave { target: NodeId, related: Option<NodeId> },
    /// Something dropped on the canvas, with the drag data the surface carried.
    Drop { data: DragChannel, at: Option<usize> },
    /// The drag ended (after a drop, or as a cancel).
    End,
}

/// Edits issued from a block card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockMsg {
    EditText { id: BlockId, content: String },
    SetImage { id: BlockId, slot: usize, image: Option<String> },
    SelectImage { id: BlockId, index: usize },
    Remove(BlockId),
    Duplicate(BlockId),
}

// =========================================================================
// Output
// =========================================================================

/// Typed output from `Editor::update` back to the surface.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum EditorOutput {
    /// Nothing changed.
    #[default]
    None,
    /// Transient drag state or a block changed in place.
    Changed,
    /// A drag started; the surface attaches this data to the drag.
    DragStarted(DragChannel),
    /// A block was created (drop or duplicate).
    Inserted(BlockId),
    /// A block moved.
    Moved(BlockId),
    /// The layout was saved.
    Saved(LayoutDocument),
}
