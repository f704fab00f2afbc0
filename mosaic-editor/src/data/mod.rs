//! Editor data models: block types and the ordered block list.

pub mod blocks;
pub mod block_list;

pub use blocks::{Block, ImageBlock, TextBlock};
pub use block_list::{BlockCommand, BlockList};
