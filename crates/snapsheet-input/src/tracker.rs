//! Pointer-to-gesture tracking.

use snapsheet_core::math::Vec2;

use crate::gesture::{GestureDetail, GestureEvent, NodeId};

/// Samples further apart than this do not update the velocity estimate.
pub const VELOCITY_SAMPLE_WINDOW_MS: f64 = 100.0;

/// Weight of the newest instantaneous velocity in the smoothed estimate.
const VELOCITY_SMOOTHING: f32 = 0.7;

/// Converts raw pointer samples into a start / move / end gesture stream.
///
/// Tracks a single pointer; a second `pointer_down` while a gesture is
/// active restarts tracking from the new position.
#[derive(Debug, Default)]
pub struct GestureTracker {
    active: Option<GestureDetail>,
}

impl GestureTracker {
    pub fn new() -> Self {
        Self { active: None }
    }

    /// Whether a gesture is in progress.
    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Begin a gesture at `pos` on `origin`.
    pub fn pointer_down(&mut self, pos: Vec2, origin: NodeId, timestamp_ms: f64) -> GestureEvent {
        if self.active.is_some() {
            tracing::trace!("pointer down while tracking, restarting gesture");
        }
        let detail = GestureDetail::new(pos, origin, timestamp_ms);
        self.active = Some(detail);
        GestureEvent::start(detail)
    }

    /// Feed a pointer move. Returns `None` when no gesture is active.
    pub fn pointer_move(&mut self, pos: Vec2, timestamp_ms: f64) -> Option<GestureEvent> {
        let detail = self.active.as_mut()?;
        Self::sample(detail, pos, timestamp_ms);
        Some(GestureEvent::moved(*detail))
    }

    /// Finish the gesture at `pos`. Returns `None` when no gesture is active.
    pub fn pointer_up(&mut self, pos: Vec2, timestamp_ms: f64) -> Option<GestureEvent> {
        let mut detail = self.active.take()?;
        Self::sample(&mut detail, pos, timestamp_ms);
        Some(GestureEvent::end(detail))
    }

    /// Abort the gesture, ending it where it last was with its last velocity.
    pub fn cancel(&mut self) -> Option<GestureEvent> {
        self.active.take().map(GestureEvent::end)
    }

    fn sample(detail: &mut GestureDetail, pos: Vec2, timestamp_ms: f64) {
        let dt = timestamp_ms - detail.timestamp_ms;
        if dt > 0.0 && dt < VELOCITY_SAMPLE_WINDOW_MS {
            let instant = (pos - detail.current) / dt as f32;
            detail.velocity = instant * VELOCITY_SMOOTHING + detail.velocity * (1.0 - VELOCITY_SMOOTHING);
        }
        detail.current = pos;
        detail.delta = pos - detail.start;
        detail.timestamp_ms = timestamp_ms;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gesture::GesturePhase;

    #[test]
    fn test_move_without_down_is_ignored() {
        let mut tracker = GestureTracker::new();
        assert!(tracker.pointer_move(Vec2::new(0.0, 10.0), 5.0).is_none());
        assert!(tracker.pointer_up(Vec2::new(0.0, 10.0), 5.0).is_none());
    }

    #[test]
    fn test_velocity_is_smoothed() {
        let mut tracker = GestureTracker::new();
        tracker.pointer_down(Vec2::new(0.0, 500.0), NodeId(1), 0.0);

        // 10 units in 10ms -> instant 1.0, smoothed 0.7
        let ev = tracker.pointer_move(Vec2::new(0.0, 510.0), 10.0).unwrap();
        assert!((ev.detail.velocity.y - 0.7).abs() < 1e-5);

        // another 1.0 sample -> 0.7 + 0.3 * 0.7 = 0.91
        let ev = tracker.pointer_move(Vec2::new(0.0, 520.0), 20.0).unwrap();
        assert!((ev.detail.velocity.y - 0.91).abs() < 1e-5);
        assert_eq!(ev.detail.delta.y, 20.0);
    }

    #[test]
    fn test_slow_samples_keep_previous_velocity() {
        let mut tracker = GestureTracker::new();
        tracker.pointer_down(Vec2::new(0.0, 500.0), NodeId(1), 0.0);
        tracker.pointer_move(Vec2::new(0.0, 490.0), 10.0);
        let before = tracker.active.unwrap().velocity.y;

        let ev = tracker.pointer_up(Vec2::new(0.0, 400.0), 500.0).unwrap();
        assert_eq!(ev.phase, GesturePhase::End);
        assert_eq!(ev.detail.velocity.y, before);
        assert_eq!(ev.detail.current.y, 400.0);
        assert!(!tracker.is_active());
    }

    #[test]
    fn test_cancel_ends_gesture() {
        let mut tracker = GestureTracker::new();
        tracker.pointer_down(Vec2::new(0.0, 100.0), NodeId(7), 0.0);
        let ev = tracker.cancel().unwrap();
        assert_eq!(ev.phase, GesturePhase::End);
        assert_eq!(ev.detail.origin, NodeId(7));
        assert!(tracker.cancel().is_none());
    }
}
