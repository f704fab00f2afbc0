//! Mosaic Editor - block composition engine for the Mosaic page editor.
//!
//! Blocks are dragged from a palette of templates onto a canvas, reordered,
//! edited in place, and exported as a layout document.
//!
//! # Module Organization
//!
//! - `templates`: The palette catalog
//! - `data`: Block types and the ordered block list
//! - `features::drag`: Drag session state machine and drop-target geometry
//! - `export`: Layout export
//! - `app`: Editor state and the message/update loop
//! - `replay`: Host that drives an editor from serialized surface events
//! - `config`, `error`: Ambient configuration and error types

pub mod config;
pub mod error;

// Palette and block data (no internal dependencies)
pub mod templates;
pub mod data;

// Drag session (depends on data)
pub mod features;

// Export (depends on data)
pub mod export;

// Editor orchestration (depends on everything above)
pub mod app;
pub mod replay;

pub use app::{BlockMsg, DragMsg, Editor, EditorMessage, EditorOutput};
pub use config::EditorConfig;
pub use error::{EditorError, Result};
