//! Drag session state machine — Idle/Dragging plus the drop indicator.
//!
//! The session never carries the payload across to the drop target. On drag
//! start it writes the payload into the host's [`DragChannel`]; on drop it
//! reads it back from whatever channel the host hands over.

use mosaic_api::{BlockId, BlockKind, DragChannel, NodeId, BLOCK_ID_KEY, BLOCK_TYPE_KEY};
use tracing::{debug, trace};

use super::drop::SurfaceHierarchy;
use crate::data::BlockCommand;

/// Where the dragged item came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragSource {
    /// A palette template.
    Template,
    /// A block already on the canvas.
    ExistingBlock(BlockId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragStatus {
    /// No drag in progress.
    Idle,
    /// Drag started on this surface and has not dropped or ended.
    Dragging(ActiveDrag),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActiveDrag {
    pub source: DragSource,
    pub payload_type: BlockKind,
}

/// Transient drag state, owned by the editor and passed to signal handlers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragSession {
    pub status: DragStatus,
    /// Advisory: the canvas should highlight as a drop target.
    /// Cleared whenever the session returns to idle.
    show_drop_indicator: bool,
}

impl Default for DragSession {
    fn default() -> Self {
        Self::new()
    }
}

impl DragSession {
    pub fn new() -> Self {
        Self {
            status: DragStatus::Idle,
            show_drop_indicator: false,
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self.status, DragStatus::Dragging(_))
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.status, DragStatus::Idle)
    }

    pub fn show_drop_indicator(&self) -> bool {
        self.show_drop_indicator
    }

    pub fn source(&self) -> Option<DragSource> {
        match self.status {
            DragStatus::Dragging(drag) => Some(drag.source),
            DragStatus::Idle => None,
        }
    }

    pub fn payload_type(&self) -> Option<BlockKind> {
        match self.status {
            DragStatus::Dragging(drag) => Some(drag.payload_type),
            DragStatus::Idle => None,
        }
    }

    fn reset(&mut self) {
        self.status = DragStatus::Idle;
        self.show_drop_indicator = false;
    }

    /// Start a drag. Any drag already in progress is discarded first, and
    /// `channel` is rewritten from scratch.
    pub fn begin_drag(&mut self, source: DragSource, payload_type: BlockKind, channel: &mut DragChannel) {
        if let DragStatus::Dragging(previous) = self.status {
            debug!(?previous, "Discarding unfinished drag");
        }
        self.reset();

        channel.clear_data();
        channel.set_data(BLOCK_TYPE_KEY, payload_type.as_str());
        if let DragSource::ExistingBlock(id) = source {
            channel.set_data(BLOCK_ID_KEY, id.to_string());
        }

        self.status = DragStatus::Dragging(ActiveDrag { source, payload_type });
        trace!(?source, %payload_type, "Drag started");
    }

    /// The drag is over the drop target. Idempotent.
    pub fn on_drag_over(&mut self) {
        self.show_drop_indicator = true;
    }

    /// The drag left `target` for `related`. Moving onto a descendant of the
    /// target keeps the indicator; leaving for anything else (or nothing)
    /// clears it.
    pub fn on_drag_leave(
        &mut self,
        target: NodeId,
        related: Option<NodeId>,
        surface: &impl SurfaceHierarchy,
    ) {
        let still_inside = related.is_some_and(|node| surface.contains(target, node));
        if !still_inside {
            self.show_drop_indicator = false;
        }
    }

    /// Something was dropped on the canvas. The session returns to idle and,
    /// if the channel names a known block type, a mutation is issued: a move
    /// when the channel also names a block id, otherwise an insertion.
    pub fn on_drop(&mut self, channel: &DragChannel, at: Option<usize>) -> Option<BlockCommand> {
        self.reset();

        let Some(kind) = channel.block_kind() else {
            debug!(
                block_type = ?channel.get_data(BLOCK_TYPE_KEY),
                "Drop ignored: missing or unknown block type"
            );
            return None;
        };

        let command = match channel.get_data(BLOCK_ID_KEY) {
            None => BlockCommand::Insert { kind, at },
            Some(raw) => match raw.parse::<BlockId>() {
                Ok(id) => BlockCommand::Reorder { id, at },
                Err(_) => {
                    debug!(block_id = raw, "Drop ignored: malformed block id");
                    return None;
                }
            },
        };
        trace!(?command, "Drop accepted");
        Some(command)
    }

    /// The drag ended. Without a preceding drop this cancels the drag.
    pub fn on_drag_end(&mut self) {
        if self.is_active() {
            debug!("Drag cancelled");
        }
        self.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::drag::NodeTree;

    const CANVAS: NodeId = NodeId(1);
    const CARD: NodeId = NodeId(2);
    const SIDEBAR: NodeId = NodeId(3);

    fn surface() -> NodeTree {
        let mut tree = NodeTree::new();
        tree.mount(CANVAS, None);
        tree.mount(CARD, Some(CANVAS));
        tree.mount(SIDEBAR, None);
        tree
    }

    #[test]
    fn begin_drag_writes_channel_and_enters_dragging() {
        let mut session = DragSession::new();
        let mut channel = DragChannel::new();
        session.begin_drag(DragSource::Template, BlockKind::Text, &mut channel);

        assert!(session.is_active());
        assert_eq!(session.source(), Some(DragSource::Template));
        assert_eq!(session.payload_type(), Some(BlockKind::Text));
        assert_eq!(channel.get_data("blockType"), Some("text"));
        assert_eq!(channel.get_data("blockId"), None);
    }

    #[test]
    fn existing_block_drag_carries_id() {
        let mut session = DragSession::new();
        let mut channel = DragChannel::new();
        session.begin_drag(DragSource::ExistingBlock(BlockId(5)), BlockKind::Image, &mut channel);
        assert_eq!(channel.get_data("blockId"), Some("5"));
        assert_eq!(channel.block_id(), Some(BlockId(5)));
    }

    #[test]
    fn second_begin_drag_replaces_first() {
        let mut session = DragSession::new();
        let mut channel = DragChannel::new();
        session.begin_drag(DragSource::ExistingBlock(BlockId(5)), BlockKind::Image, &mut channel);
        session.on_drag_over();
        session.begin_drag(DragSource::Template, BlockKind::Text, &mut channel);

        assert_eq!(session.payload_type(), Some(BlockKind::Text));
        assert!(!session.show_drop_indicator());
        assert_eq!(channel.block_id(), None);
        assert_eq!(channel.block_kind(), Some(BlockKind::Text));
    }

    #[test]
    fn drag_over_is_idempotent() {
        let mut session = DragSession::new();
        session.on_drag_over();
        session.on_drag_over();
        assert!(session.show_drop_indicator());
    }

    #[test]
    fn drag_leave_without_related_clears_indicator() {
        let tree = surface();
        for prior in [false, true] {
            let mut session = DragSession::new();
            if prior {
                session.on_drag_over();
            }
            session.on_drag_leave(CANVAS, None, &tree);
            assert!(!session.show_drop_indicator());
        }
    }

    #[test]
    fn drag_leave_into_descendant_keeps_indicator() {
        let tree = surface();
        let mut session = DragSession::new();
        session.on_drag_over();
        session.on_drag_leave(CANVAS, Some(CARD), &tree);
        assert!(session.show_drop_indicator());

        session.on_drag_leave(CANVAS, Some(SIDEBAR), &tree);
        assert!(!session.show_drop_indicator());
    }

    #[test]
    fn drop_issues_insert_and_returns_to_idle() {
        let mut session = DragSession::new();
        let mut channel = DragChannel::new();
        session.begin_drag(DragSource::Template, BlockKind::Image, &mut channel);
        session.on_drag_over();

        let command = session.on_drop(&channel, Some(1));
        assert_eq!(command, Some(BlockCommand::Insert { kind: BlockKind::Image, at: Some(1) }));
        assert!(session.is_idle());
        assert!(!session.show_drop_indicator());
    }

    #[test]
    fn drop_with_block_id_issues_reorder() {
        let mut session = DragSession::new();
        let mut channel = DragChannel::new();
        session.begin_drag(DragSource::ExistingBlock(BlockId(3)), BlockKind::Text, &mut channel);
        assert_eq!(
            session.on_drop(&channel, None),
            Some(BlockCommand::Reorder { id: BlockId(3), at: None })
        );
    }

    #[test]
    fn drop_reads_channel_not_session() {
        let mut session = DragSession::new();
        let mut channel = DragChannel::new();
        channel.set_data(BLOCK_TYPE_KEY, "image");
        assert_eq!(
            session.on_drop(&channel, None),
            Some(BlockCommand::Insert { kind: BlockKind::Image, at: None })
        );
    }

    #[test]
    fn drop_with_unknown_or_missing_type_is_ignored() {
        let mut session = DragSession::new();
        let mut channel = DragChannel::new();
        session.on_drag_over();
        assert_eq!(session.on_drop(&channel, None), None);
        assert!(!session.show_drop_indicator());

        channel.set_data(BLOCK_TYPE_KEY, "video");
        channel.set_data(BLOCK_ID_KEY, "1");
        assert_eq!(session.on_drop(&channel, None), None);
    }

    #[test]
    fn drop_with_malformed_block_id_is_ignored() {
        let mut session = DragSession::new();
        let mut channel = DragChannel::new();
        channel.set_data(BLOCK_TYPE_KEY, "text");
        channel.set_data(BLOCK_ID_KEY, "abc");
        session.on_drag_over();
        assert_eq!(session.on_drop(&channel, Some(0)), None);
        assert!(session.is_idle());
        assert!(!session.show_drop_indicator());
    }

    #[test]
    fn drag_end_cancels() {
        let mut session = DragSession::new();
        let mut channel = DragChannel::new();
        session.begin_drag(DragSource::Template, BlockKind::Text, &mut channel);
        session.on_drag_over();
        session.on_drag_end();
        assert_eq!(session, DragSession::new());
    }
}
