//! Mosaic API - Shared types and data contracts for the Mosaic block editor.

mod event;
mod block;
mod channel;
mod export;

pub use event::*;
pub use block::*;
pub use channel::*;
pub use export::*;
