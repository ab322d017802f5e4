//! Mock content hierarchy and scroll region.

use std::collections::BTreeMap;
use std::sync::Arc;

use parking_lot::Mutex;
use snapsheet_drawer::{ContentTree, ScrollRegion};
use snapsheet_input::NodeId;

/// Content hierarchy built from explicit parent links.
#[derive(Debug, Clone, Default)]
pub struct MockContentTree {
    parents: BTreeMap<NodeId, NodeId>,
    scroll_regions: Vec<NodeId>,
}

impl MockContentTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `child` under `parent`.
    pub fn with_child(mut self, parent: NodeId, child: NodeId) -> Self {
        self.parents.insert(child, parent);
        self
    }

    /// Mark `node` as a scrollable content region.
    pub fn with_scroll_region(mut self, node: NodeId) -> Self {
        self.scroll_regions.push(node);
        self
    }
}

impl ContentTree for MockContentTree {
    fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.parents.get(&node).copied()
    }

    fn is_scroll_region(&self, node: NodeId) -> bool {
        self.scroll_regions.contains(&node)
    }
}

/// Scroll region whose measurements can change while the drawer holds it.
#[derive(Debug, Clone)]
pub struct MockScrollRegion {
    metrics: Arc<Mutex<(f32, f32)>>,
}

impl MockScrollRegion {
    pub fn new(scroll_height: f32, client_height: f32) -> Self {
        Self {
            metrics: Arc::new(Mutex::new((scroll_height, client_height))),
        }
    }

    pub fn set_scroll_height(&self, scroll_height: f32) {
        self.metrics.lock().0 = scroll_height;
    }
}

impl ScrollRegion for MockScrollRegion {
    fn scroll_height(&self) -> f32 {
        self.metrics.lock().0
    }

    fn client_height(&self) -> f32 {
        self.metrics.lock().1
    }
}
