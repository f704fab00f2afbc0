//! Integration tests for scripted editor sessions.
//!
//! Each test feeds a JSON-lines script of surface events through the replay
//! host, the same path the `mosaic replay` command uses, and checks the saved
//! layouts and the final editor state.

use mosaic_api::{BlockKind, ExportedBlock, LayoutDocument};
use mosaic_editor::replay::ReplayHost;
use mosaic_editor::{Editor, EditorError};

/// Test harness that replays a script against a fresh editor.
struct SessionTest {
    host: ReplayHost,
}

impl SessionTest {
    fn new() -> Self {
        Self { host: ReplayHost::new(Editor::default()) }
    }

    fn run(&mut self, script: &str) -> Vec<LayoutDocument> {
        let result = self.host.run_script(script);
        assert!(result.is_ok(), "Script failed: {:?}", result.err());
        result.unwrap()
    }

    fn kinds(&self) -> Vec<BlockKind> {
        self.host.editor().blocks().iter().map(|b| b.kind()).collect()
    }
}

const SURFACE: &str = r#"
{"event":"mount","node":1}
{"event":"mount","node":2,"parent":1}
{"event":"mount","node":3}
{"event":"set_drop_target","node":1}
"#;

#[test]
fn compose_edit_and_save() {
    let mut t = SessionTest::new();
    let script = format!(
        "{SURFACE}{}",
        r#"
{"event":"drag_start","source":"template","kind":"text"}
{"event":"drag_over"}
{"event":"drop"}
{"event":"drag_end"}
{"event":"drag_start","source":"template","kind":"image"}
{"event":"drag_over"}
{"event":"drop"}
{"event":"drag_end"}
{"event":"edit_text","id":1,"content":"Text block content"}
{"event":"set_image","id":2,"slot":0,"image":"image1.jpg"}
{"event":"save"}
"#
    );

    let saved = t.run(&script);
    assert_eq!(saved.len(), 1);
    assert_eq!(
        saved[0].blocks,
        vec![
            ExportedBlock::Text { content: "Text block content".into() },
            ExportedBlock::Image { images: vec!["image1.jpg".into()], selected_image_index: 0 },
        ]
    );
}

#[test]
fn reorder_by_dragging_existing_block() {
    let mut t = SessionTest::new();
    let script = r#"
{"event":"drag_start","source":"template","kind":"text"}
{"event":"drop"}
{"event":"drag_start","source":"template","kind":"image"}
{"event":"drop"}
{"event":"drag_start","source":"block","id":2}
{"event":"drop","at":0}
{"event":"drag_end"}
"#;
    t.run(script);
    assert_eq!(t.kinds(), vec![BlockKind::Image, BlockKind::Text]);
}

#[test]
fn foreign_drop_with_unknown_type_is_ignored() {
    let mut t = SessionTest::new();
    let script = r#"
{"event":"drag_over"}
{"event":"drop","data":{"blockType":"video"}}
{"event":"drop","data":{}}
{"event":"save"}
"#;
    let saved = t.run(script);
    assert!(saved[0].is_empty());
    assert!(!t.host.editor().drag().show_drop_indicator());
    assert!(t.host.editor().empty_state().is_some());
}

#[test]
fn foreign_drop_with_known_type_inserts() {
    let mut t = SessionTest::new();
    t.run(r#"{"event":"drop","data":{"blockType":"image"}}"#);
    assert_eq!(t.kinds(), vec![BlockKind::Image]);
}

#[test]
fn indicator_survives_leave_into_child_only() {
    let mut t = SessionTest::new();
    let script = format!(
        "{SURFACE}{}",
        r#"
{"event":"drag_start","source":"template","kind":"text"}
{"event":"drag_over"}
{"event":"drag_leave","related":2}
"#
    );
    t.run(&script);
    assert!(t.host.editor().drag().show_drop_indicator());

    t.run(r#"{"event":"drag_leave","related":3}"#);
    assert!(!t.host.editor().drag().show_drop_indicator());
}

#[test]
fn cancelled_drag_creates_nothing() {
    let mut t = SessionTest::new();
    let script = r#"
{"event":"drag_start","source":"template","kind":"image"}
{"event":"drag_over"}
{"event":"drag_end"}
{"event":"save"}
"#;
    let saved = t.run(script);
    assert!(saved[0].is_empty());
    assert!(t.host.editor().drag().is_idle());
}

#[test]
fn duplicate_remove_and_select() {
    let mut t = SessionTest::new();
    let script = r#"
{"event":"drag_start","source":"template","kind":"image"}
{"event":"drop"}
{"event":"set_image","id":1,"slot":2,"image":"c.png"}
{"event":"select_image","id":1,"index":9}
{"event":"duplicate","id":1}
{"event":"remove","id":1}
{"event":"remove","id":1}
{"event":"save"}
"#;
    let saved = t.run(script);
    assert_eq!(
        saved[0].blocks,
        vec![ExportedBlock::Image { images: vec!["c.png".into()], selected_image_index: 3 }]
    );
}

#[test]
fn every_save_is_reported_in_order() {
    let mut t = SessionTest::new();
    let script = r#"
{"event":"save"}
{"event":"drag_start","source":"template","kind":"text"}
{"event":"drop"}
{"event":"save"}
"#;
    let saved = t.run(script);
    assert_eq!(saved.iter().map(LayoutDocument::len).collect::<Vec<_>>(), vec![0, 1]);
}

#[test]
fn malformed_line_is_an_error() {
    let mut t = SessionTest::new();
    let err = t.host.run_script("{\"event\":\"save\"}\nnot json\n").unwrap_err();
    assert!(matches!(err, EditorError::Script { line: 2, .. }));
}

#[test]
fn bundled_demo_script_replays() {
    let mut t = SessionTest::new();
    let saved = t.run(include_str!("../demos/landing.jsonl"));
    assert_eq!(
        saved,
        vec![LayoutDocument {
            blocks: vec![
                ExportedBlock::Text { content: "Welcome to the launch page".into() },
                ExportedBlock::Image {
                    images: vec!["hero.jpg".into(), "detail.jpg".into()],
                    selected_image_index: 2,
                },
            ],
        }]
    );
}

#[test]
fn rejected_drag_start_discards_earlier_payload() {
    let mut t = SessionTest::new();
    let script = r#"
{"event":"drag_start","source":"template","kind":"image"}
{"event":"drag_start","source":"block","id":99}
{"event":"drop"}
{"event":"drag_end"}
{"event":"save"}
"#;
    let saved = t.run(script);
    assert!(saved[0].is_empty());
    assert!(t.host.editor().drag().is_idle());
}

#[test]
fn dropping_block_back_in_place_keeps_order() {
    let mut t = SessionTest::new();
    let script = r#"
{"event":"drag_start","source":"template","kind":"text"}
{"event":"drop"}
{"event":"drag_start","source":"template","kind":"image"}
{"event":"drop"}
{"event":"drag_start","source":"block","id":2}
{"event":"drop"}
{"event":"drag_start","source":"block","id":1}
{"event":"drop","at":0}
"#;
    t.run(script);
    assert_eq!(t.kinds(), vec![BlockKind::Text, BlockKind::Image]);
}
