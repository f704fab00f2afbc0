//! Message dispatch for the editor.

use mosaic_api::DragChannel;

use super::message::{BlockMsg, DragMsg, EditorMessage, EditorOutput};
use super::Editor;
use crate::data::BlockCommand;
use crate::features::drag::SurfaceHierarchy;

fn changed(applied: bool) -> EditorOutput {
    if applied { EditorOutput::Changed } else { EditorOutput::None }
}

impl Editor {
    /// Top-level message dispatch. `surface` answers drag-leave containment queries.
    pub fn update(&mut self, msg: EditorMessage, surface: &impl SurfaceHierarchy) -> EditorOutput {
        match msg {
            EditorMessage::Drag(msg) => self.update_drag(msg, surface),
            EditorMessage::Block(msg) => self.update_block(msg),
            EditorMessage::Save => EditorOutput::Saved(self.save()),
        }
    }

    fn update_drag(&mut self, msg: DragMsg, surface: &impl SurfaceHierarchy) -> EditorOutput {
        match msg {
            DragMsg::Start(origin) => {
                let mut channel = DragChannel::new();
                if self.begin_drag(origin, &mut channel) {
                    EditorOutput::DragStarted(channel)
                } else {
                    EditorOutput::None
                }
            }
            DragMsg::Over => {
                self.drag_over();
                EditorOutput::Changed
            }
            DragMsg::Leave { target, related } => {
                self.drag_leave(target, related, surface);
                EditorOutput::Changed
            }
            DragMsg::Drop { data, at } => match self.drag.on_drop(&data, at) {
                Some(command @ BlockCommand::Insert { .. }) => {
                    self.blocks.apply(command).map_or(EditorOutput::None, EditorOutput::Inserted)
                }
                Some(command @ BlockCommand::Reorder { .. }) => {
                    self.blocks.apply(command).map_or(EditorOutput::None, EditorOutput::Moved)
                }
                None => EditorOutput::Changed,
            },
            DragMsg::End => {
                self.drag_end();
                EditorOutput::Changed
            }
        }
    }

    fn update_block(&mut self, msg: BlockMsg) -> EditorOutput {
        match msg {
            BlockMsg::EditText { id, content } => changed(self.update_block_content(id, content)),
            BlockMsg::SetImage { id, slot, image } => {
                changed(self.update_block_image(id, slot, image))
            }
            BlockMsg::SelectImage { id, index } => {
                changed(self.set_selected_image_index(id, index))
            }
            BlockMsg::Remove(id) => changed(self.remove_block(id)),
            BlockMsg::Duplicate(id) => self
                .duplicate_block(id)
                .map_or(EditorOutput::None, EditorOutput::Inserted),
        }
    }
}
