//! Interaction features.

pub mod drag;
