//! Replay host — drives an editor from a stream of surface events.
//!
//! Plays the part a live surface would: it owns the element tree, knows which
//! element is the canvas drop target, and carries the drag data from drag
//! start to drop.

use mosaic_api::{DragChannel, LayoutDocument, NodeId, SurfaceEvent};
use tracing::{debug, trace};

use crate::app::{BlockMsg, DragMsg, Editor, EditorMessage, EditorOutput};
use crate::error::{EditorError, Result};
use crate::features::drag::NodeTree;

pub struct ReplayHost {
    editor: Editor,
    tree: NodeTree,
    drop_target: Option<NodeId>,
    /// Drag data for the drag in flight, attached at drag start.
    channel: Option<DragChannel>,
}

impl ReplayHost {
    pub fn new(editor: Editor) -> Self {
        Self {
            editor,
            tree: NodeTree::new(),
            drop_target: None,
            channel: None,
        }
    }

    pub fn editor(&self) -> &Editor {
        &self.editor
    }

    pub fn into_editor(self) -> Editor {
        self.editor
    }

    /// Deliver one event. Returns the layout when the event was a save.
    pub fn handle(&mut self, event: SurfaceEvent) -> Option<LayoutDocument> {
        trace!(?event, "Surface event");
        let msg = match event {
            SurfaceEvent::Mount { node, parent } => {
                self.tree.mount(node, parent);
                return None;
            }
            SurfaceEvent::SetDropTarget { node } => {
                self.drop_target = Some(node);
                return None;
            }
            SurfaceEvent::DragStart { origin } => {
                self.channel = None;
                EditorMessage::Drag(DragMsg::Start(origin))
            }
            SurfaceEvent::DragOver => EditorMessage::Drag(DragMsg::Over),
            SurfaceEvent::DragLeave { related } => match self.drop_target {
                Some(target) => EditorMessage::Drag(DragMsg::Leave { target, related }),
                None => {
                    debug!("Drag leave with no drop target declared; treating as leaving");
                    EditorMessage::Drag(DragMsg::Leave { target: NodeId(u32::MAX), related: None })
                }
            },
            SurfaceEvent::Drop { at, data } => {
                let data = data.or_else(|| self.channel.take()).unwrap_or_default();
                EditorMessage::Drag(DragMsg::Drop { data, at })
            }
            SurfaceEvent::DragEnd => {
                self.channel = None;
                EditorMessage::Drag(DragMsg::End)
            }
            SurfaceEvent::EditText { id, content } => {
                EditorMessage::Block(BlockMsg::EditText { id, content })
            }
            SurfaceEvent::SetImage { id, slot, image } => {
                EditorMessage::Block(BlockMsg::SetImage { id, slot, image })
            }
            SurfaceEvent::SelectImage { id, index } => {
                EditorMessage::Block(BlockMsg::SelectImage { id, index })
            }
            SurfaceEvent::Remove { id } => EditorMessage::Block(BlockMsg::Remove(id)),
            SurfaceEvent::Duplicate { id } => EditorMessage::Block(BlockMsg::Duplicate(id)),
            SurfaceEvent::Save => EditorMessage::Save,
        };

        match self.editor.update(msg, &self.tree) {
            EditorOutput::DragStarted(channel) => {
                self.channel = Some(channel);
                None
            }
            EditorOutput::Saved(document) => Some(document),
            _ => None,
        }
    }

    /// Replay a JSON-lines script. Blank lines and `#` comments are skipped.
    /// Returns every saved layout, in order.
    pub fn run_script(&mut self, script: &str) -> Result<Vec<LayoutDocument>> {
        let mut saved = Vec::new();
        for (idx, line) in script.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let event: SurfaceEvent = serde_json::from_str(line)
                .map_err(|source| EditorError::Script { line: idx + 1, source })?;
            if let Some(document) = self.handle(event) {
                saved.push(document);
            }
        }
        Ok(saved)
    }
}
