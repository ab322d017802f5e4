//! Scroll-conflict detection between the drawer and its content.

use snapsheet_core::alloc::HashSet;
use snapsheet_input::NodeId;

/// Slack for layout rounding when deciding whether content overflows.
pub const OVERFLOW_TOLERANCE: f32 = 1.0;

/// Read-only view of the host's content hierarchy.
pub trait ContentTree {
    /// Parent of `node`, or `None` at the root.
    fn parent(&self, node: NodeId) -> Option<NodeId>;

    /// Whether `node` is a scrollable content region.
    fn is_scroll_region(&self, node: NodeId) -> bool;
}

/// Measurements of the drawer's scrollable content region.
pub trait ScrollRegion {
    fn scroll_height(&self) -> f32;

    fn client_height(&self) -> f32;

    /// Whether the content is taller than its viewport.
    fn has_overflow(&self) -> bool {
        self.scroll_height() > self.client_height() + OVERFLOW_TOLERANCE
    }
}

/// Fixed scroll measurements, for hosts that snapshot them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollMetrics {
    pub scroll_height: f32,
    pub client_height: f32,
}

impl ScrollRegion for ScrollMetrics {
    fn scroll_height(&self) -> f32 {
        self.scroll_height
    }

    fn client_height(&self) -> f32 {
        self.client_height
    }
}

/// Walk from `origin` up to (not including) `boundary` and return the first
/// scroll region on the way.
///
/// Stops at the root or if the hierarchy loops.
pub fn find_scroll_region(tree: &dyn ContentTree, origin: NodeId, boundary: NodeId) -> Option<NodeId> {
    let mut visited = HashSet::new();
    let mut node = Some(origin);

    while let Some(n) = node {
        if n == boundary || !visited.insert(n) {
            return None;
        }
        if tree.is_scroll_region(n) {
            return Some(n);
        }
        node = tree.parent(n);
    }
    None
}
