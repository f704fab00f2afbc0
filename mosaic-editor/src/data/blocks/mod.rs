//! Block types for representing canvas content.

mod model;

pub use model::{Block, ImageBlock, TextBlock};
