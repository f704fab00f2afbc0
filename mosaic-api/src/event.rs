//! Surface events - the signals a host delivers to the editor, one at a time.
//!
//! These are the serialized form used by hosts that drive the editor over a
//! stream (scripts, IPC). In-process hosts call the editor directly.

use serde::{Deserialize, Serialize};

use crate::{BlockId, BlockKind, DragChannel};

/// Identifier for an element on the host surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub u32);

/// Where a drag started.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum DragOrigin {
    /// A palette template; dropping it creates a new block.
    Template { kind: BlockKind },
    /// A block already on the canvas; dropping it moves the block.
    Block { id: BlockId },
}

/// Signals emitted by the host surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum SurfaceEvent {
    /// An element exists on the surface under `parent` (root when `None`).
    Mount {
        node: NodeId,
        #[serde(default)]
        parent: Option<NodeId>,
    },

    /// The element that acts as the canvas drop target.
    SetDropTarget { node: NodeId },

    /// A drag began.
    DragStart {
        #[serde(flatten)]
        origin: DragOrigin,
    },

    /// The drag is over the drop target.
    DragOver,

    /// The drag left an element; `related` is the element it entered.
    DragLeave {
        #[serde(default)]
        related: Option<NodeId>,
    },

    /// Something was dropped on the canvas.
    Drop {
        #[serde(default)]
        at: Option<usize>,
        /// Drag data from outside this surface. Replaces the host's own channel.
        #[serde(default)]
        data: Option<DragChannel>,
    },

    /// The drag ended, with or without a drop.
    DragEnd,

    /// Text typed into a text block.
    EditText { id: BlockId, content: String },

    /// An image slot was filled (`Some`) or cleared (`None`).
    SetImage {
        id: BlockId,
        slot: usize,
        #[serde(default)]
        image: Option<String>,
    },

    /// A different image slot was selected for display.
    SelectImage { id: BlockId, index: usize },

    /// The block's remove action.
    Remove { id: BlockId },

    /// The block's copy action.
    Duplicate { id: BlockId },

    /// The save button.
    Save,
}
