use std::collections::VecDeque;

use crate::gesture::{GestureEvent, GesturePhase};

/// Gesture queue filled by the host between frames.
///
/// Moves are never coalesced: every sample reaches the drawer in arrival
/// order so position notifications match the pointer one-to-one.
pub struct GestureQueue {
    pending: VecDeque<GestureEvent>,
    stats: GestureStats,
}

impl GestureQueue {
    pub fn new() -> Self {
        Self {
            pending: VecDeque::with_capacity(64),
            stats: GestureStats::default(),
        }
    }

    /// Push a gesture event (called from the host's pointer handler).
    pub fn push(&mut self, event: GestureEvent) {
        self.stats.events_received += 1;
        if event.phase == GesturePhase::Move {
            self.stats.moves_received += 1;
        }
        self.pending.push_back(event);
    }

    /// Take every queued event as a batch.
    pub fn drain(&mut self) -> GestureBatch {
        let events: Vec<GestureEvent> = self.pending.drain(..).collect();
        self.stats.events_drained += events.len();
        GestureBatch { events }
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn stats(&self) -> &GestureStats {
        &self.stats
    }

    pub fn reset_stats(&mut self) {
        self.stats = GestureStats::default();
    }
}

impl Default for GestureQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl Extend<GestureEvent> for GestureQueue {
    fn extend<I: IntoIterator<Item = GestureEvent>>(&mut self, iter: I) {
        for event in iter {
            self.push(event);
        }
    }
}

#[derive(Default, Debug, Clone)]
pub struct GestureStats {
    pub events_received: usize,
    pub moves_received: usize,
    pub events_drained: usize,
}

pub struct GestureBatch {
    events: Vec<GestureEvent>,
}

impl GestureBatch {
    pub fn from_events(events: Vec<GestureEvent>) -> Self {
        Self { events }
    }

    pub fn iter(&self) -> impl Iterator<Item = &GestureEvent> {
        self.events.iter()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Hand each event to `handler`; consumed events are removed from the
    /// batch so later handlers do not see them.
    pub fn dispatch<H>(&mut self, mut handler: H)
    where
        H: FnMut(&GestureEvent) -> HandleStatus,
    {
        self.events.retain(|event| {
            let status = handler(event);
            !status.is_consumed()
        });
    }
}

bitflags::bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct HandleStatus: u8 {
        const HANDLED = 0b00000001;
        const CONSUMED = 0b00000010;
    }
}

impl HandleStatus {
    pub const fn is_consumed(&self) -> bool {
        self.contains(Self::CONSUMED)
    }

    pub const fn is_handled(&self) -> bool {
        self.contains(Self::HANDLED)
    }

    pub const fn consumed() -> Self {
        Self::from_bits_truncate(Self::HANDLED.bits() | Self::CONSUMED.bits())
    }

    pub const fn handled() -> Self {
        Self::from_bits_truncate(Self::HANDLED.bits())
    }

    pub const fn ignored() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gesture::{GestureDetail, NodeId};
    use snapsheet_core::math::Vec2;

    fn detail(y: f32) -> GestureDetail {
        GestureDetail::new(Vec2::new(0.0, y), NodeId(0), 0.0)
    }

    #[test]
    fn test_moves_are_not_coalesced() {
        let mut queue = GestureQueue::new();
        queue.push(GestureEvent::start(detail(10.0)));
        queue.push(GestureEvent::moved(detail(11.0)));
        queue.push(GestureEvent::moved(detail(12.0)));
        queue.push(GestureEvent::end(detail(12.0)));

        let batch = queue.drain();
        assert_eq!(batch.len(), 4);
        let ys: Vec<f32> = batch.iter().map(|e| e.detail.current_y()).collect();
        assert_eq!(ys, vec![10.0, 11.0, 12.0, 12.0]);
        assert!(queue.is_empty());
        assert_eq!(queue.stats().moves_received, 2);
    }

    #[test]
    fn test_extend_skips_none() {
        let mut queue = GestureQueue::new();
        queue.extend(Some(GestureEvent::start(detail(0.0))));
        queue.extend(None);
        queue.extend([GestureEvent::moved(detail(5.0)), GestureEvent::end(detail(5.0))]);
        assert_eq!(queue.len(), 3);
        assert_eq!(queue.stats().moves_received, 1);

        queue.reset_stats();
        assert_eq!(queue.stats().events_received, 0);
        assert_eq!(queue.len(), 3);
    }

    #[test]
    fn test_dispatch_removes_consumed() {
        let mut batch = GestureBatch::from_events(vec![
            GestureEvent::start(detail(1.0)),
            GestureEvent::moved(detail(2.0)),
        ]);
        batch.dispatch(|event| {
            if event.phase == GesturePhase::Start {
                HandleStatus::consumed()
            } else {
                HandleStatus::handled()
            }
        });
        assert_eq!(batch.len(), 1);
        assert_eq!(batch.iter().next().unwrap().phase, GesturePhase::Move);
    }

    #[test]
    fn test_handle_status_flags() {
        assert!(HandleStatus::consumed().is_handled());
        assert!(!HandleStatus::handled().is_consumed());
        assert!(!HandleStatus::ignored().is_handled());
    }
}
