//! Gesture state machine.
//!
//! `Idle -> Dragging -> Idle`. While dragging the drawer tracks the pointer
//! 1:1, with friction once it is pulled past the fully open point. On
//! release the rest target is chosen by velocity first, then by position.

use snapsheet_core::profiling::profile_function;
use snapsheet_input::{GestureDetail, NodeId};

use crate::content::{ContentTree, ScrollRegion, find_scroll_region};
use crate::events::DrawerEvents;
use crate::position::PositionController;
use crate::snap::SnapTable;

/// Release velocity beyond which a gesture counts as a fling.
pub const FLING_VELOCITY_THRESHOLD: f32 = 0.6;

/// Fraction of the pointer delta applied while over-dragged.
pub const OVERDRAG_FRICTION: f32 = 0.3;

/// Where a released drawer should come to rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestTarget {
    /// Slide to the fully open point.
    Open,
    /// Slide to the closed coordinate.
    Close,
    /// Slide to this snap table entry.
    Point(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragPhase {
    #[default]
    Idle,
    Dragging,
}

/// Content the gesture may conflict with.
#[derive(Clone, Copy)]
pub struct ContentBinding<'a> {
    pub tree: Option<&'a dyn ContentTree>,
    pub scroll: Option<&'a dyn ScrollRegion>,
    /// The drawer's own node; the ancestry walk stops here.
    pub boundary: NodeId,
}

#[derive(Debug, Default)]
pub struct GestureStateMachine {
    phase: DragPhase,
    /// Pointer coordinate at the previous move of this gesture.
    last_y: Option<f32>,
}

impl GestureStateMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> DragPhase {
        self.phase
    }

    pub fn is_dragging(&self) -> bool {
        self.phase == DragPhase::Dragging
    }

    pub fn last_y(&self) -> Option<f32> {
        self.last_y
    }

    pub fn on_start(&mut self, position: &mut PositionController) {
        self.phase = DragPhase::Dragging;
        self.last_y = None;
        position.disable_transition();
    }

    /// Abandon the current drag without resolving a rest target.
    ///
    /// Later moves and the end of the same gesture are ignored.
    pub fn cancel(&mut self) {
        self.phase = DragPhase::Idle;
        self.last_y = None;
    }

    pub fn on_move(
        &mut self,
        detail: &GestureDetail,
        table: &SnapTable,
        position: &mut PositionController,
        events: &mut DrawerEvents,
    ) {
        profile_function!();
        let current = detail.current_y();
        // The first move of a gesture has nothing to diff against.
        let dy = self.last_y.map_or(0.0, |last| current - last);

        let max_y = table.max_y();
        let y = position.y();
        if y < max_y {
            position.grow_content_height(max_y - y);
            position.slide_by(dy * OVERDRAG_FRICTION, Some(*detail), events);
        } else {
            position.grow_content_height(0.0);
            position.slide_by(dy, Some(*detail), events);
        }

        self.last_y = Some(current);
    }

    pub fn on_end(
        &mut self,
        detail: &GestureDetail,
        table: &SnapTable,
        position: &mut PositionController,
    ) -> RestTarget {
        profile_function!();
        position.enable_transition();
        self.last_y = None;
        self.phase = DragPhase::Idle;

        let target = resolve_rest(detail.velocity_y(), position.y(), table);
        tracing::debug!(
            velocity = detail.velocity_y(),
            y = position.y(),
            ?target,
            "gesture released"
        );
        target
    }
}

/// Decide whether a gesture starting on `origin` may drag the drawer.
///
/// A scrollable region between the origin and the drawer wins the gesture
/// when its content overflows and the drawer is bounded and resting at its
/// first or last point.
pub fn can_start(origin: NodeId, table: Option<&SnapTable>, bounded: bool, content: ContentBinding<'_>) -> bool {
    let Some(table) = table else {
        tracing::trace!("gesture rejected, drawer not mounted");
        return false;
    };

    let Some(tree) = content.tree else {
        return true;
    };
    if find_scroll_region(tree, origin, content.boundary).is_none() {
        return true;
    }

    let Some(scroll) = content.scroll else {
        return true;
    };
    if !scroll.has_overflow() {
        return true;
    }

    !bounded || table.at_intermediate()
}

/// Pick the rest target for a release at `y` with `velocity`.
///
/// Negative velocity points towards open.
pub fn resolve_rest(velocity: f32, y: f32, table: &SnapTable) -> RestTarget {
    if velocity < -FLING_VELOCITY_THRESHOLD {
        RestTarget::Open
    } else if velocity > FLING_VELOCITY_THRESHOLD {
        RestTarget::Close
    } else if let Some(index) = table.first_above(y) {
        RestTarget::Point(index)
    } else {
        RestTarget::Close
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::Easing;
    use crate::config::DrawerConfig;
    use crate::content::ScrollMetrics;
    use crate::geometry::Geometry;
    use crate::surface::{DrawerSurface, TransitionStyle};
    use snapsheet_core::math::Vec2;
    use std::time::Duration;

    struct NullSurface;

    impl DrawerSurface for NullSurface {
        fn set_translate_y(&mut self, _y: f32) {}
        fn set_height(&mut self, _height: f32) {}
        fn set_content_height(&mut self, _height: f32) {}
        fn set_transition(&mut self, _transition: Option<TransitionStyle>) {}
    }

    fn table() -> SnapTable {
        // [700, 500, 200]
        let config = DrawerConfig::new()
            .with_preview_offset(100.0)
            .with_snap_offsets([300.0])
            .with_max_offset(600.0);
        SnapTable::build(&config, &Geometry::new(800.0, 20.0))
    }

    fn position_at(y: f32) -> PositionController {
        let style = TransitionStyle::new(Duration::from_millis(400), Easing::Linear);
        let mut position = PositionController::new(Box::new(NullSurface), style);
        position.slide_to(y, None, &mut DrawerEvents::new());
        position
    }

    fn detail_at(y: f32) -> GestureDetail {
        GestureDetail::new(Vec2::new(0.0, y), NodeId(1), 0.0)
    }

    #[test]
    fn test_fling_overrides_position() {
        let table = table();
        assert_eq!(resolve_rest(-0.7, 690.0, &table), RestTarget::Open);
        assert_eq!(resolve_rest(0.7, 210.0, &table), RestTarget::Close);
    }

    #[test]
    fn test_slow_release_picks_first_point_above() {
        let table = table();
        assert_eq!(resolve_rest(0.1, 600.0, &table), RestTarget::Point(1));
        assert_eq!(resolve_rest(0.0, 100.0, &table), RestTarget::Close);
    }

    #[test]
    fn test_threshold_is_exclusive() {
        let table = table();
        assert_eq!(resolve_rest(-0.6, 600.0, &table), RestTarget::Point(1));
        assert_eq!(resolve_rest(0.6, 600.0, &table), RestTarget::Point(1));
    }

    #[test]
    fn test_first_move_has_zero_delta() {
        let table = table();
        let mut position = position_at(500.0);
        let mut machine = GestureStateMachine::new();
        let mut events = DrawerEvents::new();

        machine.on_start(&mut position);
        machine.on_move(&detail_at(480.0), &table, &mut position, &mut events);
        assert_eq!(position.y(), 500.0);

        machine.on_move(&detail_at(470.0), &table, &mut position, &mut events);
        assert_eq!(position.y(), 490.0);
        assert_eq!(machine.last_y(), Some(470.0));
    }

    #[test]
    fn test_overdrag_applies_friction() {
        let table = table();
        let mut position = position_at(190.0);
        let mut machine = GestureStateMachine::new();
        let mut events = DrawerEvents::new();

        machine.on_start(&mut position);
        machine.on_move(&detail_at(300.0), &table, &mut position, &mut events);
        machine.on_move(&detail_at(280.0), &table, &mut position, &mut events);
        machine.on_move(&detail_at(250.0), &table, &mut position, &mut events);

        // raw deltas -20 and -30, 30% applied
        assert!((position.y() - (190.0 - 15.0)).abs() < 1e-3);
        assert!(position.content_growth() > 0.0);
    }

    #[test]
    fn test_end_resets_state() {
        let table = table();
        let mut position = position_at(600.0);
        let mut machine = GestureStateMachine::new();
        let mut events = DrawerEvents::new();

        machine.on_start(&mut position);
        assert!(!position.transition_enabled());
        machine.on_move(&detail_at(600.0), &table, &mut position, &mut events);

        let target = machine.on_end(&detail_at(600.0), &table, &mut position);
        assert_eq!(target, RestTarget::Point(1));
        assert!(position.transition_enabled());
        assert_eq!(machine.last_y(), None);
        assert_eq!(machine.phase(), DragPhase::Idle);
    }

    #[test]
    fn test_cancel_returns_to_idle() {
        let table = table();
        let mut position = position_at(600.0);
        let mut machine = GestureStateMachine::new();
        let mut events = DrawerEvents::new();

        machine.on_start(&mut position);
        machine.on_move(&detail_at(600.0), &table, &mut position, &mut events);
        machine.cancel();

        assert!(!machine.is_dragging());
        assert_eq!(machine.last_y(), None);
    }

    #[test]
    fn test_can_start_requires_table() {
        let content = ContentBinding {
            tree: None,
            scroll: None,
            boundary: NodeId(0),
        };
        assert!(!can_start(NodeId(1), None, false, content));
        assert!(can_start(NodeId(1), Some(&table()), true, content));
    }

    struct Flat;

    impl ContentTree for Flat {
        fn parent(&self, node: NodeId) -> Option<NodeId> {
            (node.0 > 0).then(|| NodeId(node.0 - 1))
        }

        fn is_scroll_region(&self, node: NodeId) -> bool {
            node == NodeId(1)
        }
    }

    #[test]
    fn test_scroll_region_blocks_bounded_edge() {
        let mut table = table();
        let overflowing = ScrollMetrics {
            scroll_height: 900.0,
            client_height: 400.0,
        };
        let content = ContentBinding {
            tree: Some(&Flat),
            scroll: Some(&overflowing),
            boundary: NodeId(0),
        };

        assert!(!can_start(NodeId(2), Some(&table), true, content));
        assert!(can_start(NodeId(2), Some(&table), false, content));

        table.set_current_index(1);
        assert!(can_start(NodeId(2), Some(&table), true, content));
    }

    #[test]
    fn test_scroll_region_without_overflow_allows_drag() {
        let table = table();
        let fits = ScrollMetrics {
            scroll_height: 401.0,
            client_height: 400.0,
        };
        let content = ContentBinding {
            tree: Some(&Flat),
            scroll: Some(&fits),
            boundary: NodeId(0),
        };
        assert!(can_start(NodeId(2), Some(&table), true, content));
    }
}
