//! Drop-target geometry — the host's element tree, as far as drag-leave needs it.

use std::collections::HashMap;

use mosaic_api::NodeId;

/// Answers containment queries about elements on the host surface.
pub trait SurfaceHierarchy {
    /// Whether `node` is `ancestor` itself or lies anywhere beneath it.
    fn contains(&self, ancestor: NodeId, node: NodeId) -> bool;
}

/// A parent-pointer element tree.
#[derive(Debug, Clone, Default)]
pub struct NodeTree {
    parents: HashMap<NodeId, Option<NodeId>>,
}

impl NodeTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `node` under `parent` (as a root when `None`). Remounting moves it.
    pub fn mount(&mut self, node: NodeId, parent: Option<NodeId>) {
        self.parents.insert(node, parent);
    }

    pub fn is_mounted(&self, node: NodeId) -> bool {
        self.parents.contains_key(&node)
    }

    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.parents.get(&node).copied().flatten()
    }
}

impl SurfaceHierarchy for NodeTree {
    fn contains(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut current = Some(node);
        // Bounded by tree size so a cyclic remount cannot loop forever.
        for _ in 0..=self.parents.len() {
            match current {
                Some(n) if n == ancestor => return true,
                Some(n) => current = self.parent(n),
                None => return false,
            }
        }
        false
    }
}
