//! Drag and drop — the drag session state machine and drop-target geometry.

pub mod drop;
pub mod session;

pub use drop::{NodeTree, SurfaceHierarchy};
pub use session::{ActiveDrag, DragSession, DragSource, DragStatus};
