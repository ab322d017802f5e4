//! Sequencing of will/did notifications around edge slides.
//!
//! Each slide to the open or closed position records the target it was
//! started with. The matching did-notification reports that snapshot, never
//! the drawer's live coordinate, so overlapping slides cannot report each
//! other's targets.

use std::collections::VecDeque;
use std::time::Duration;

use crate::config::TransitionCompletion;

/// Which edge a slide is heading to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Toggle {
    Open,
    Close,
}

/// A slide waiting for its did-notification.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PendingToggle {
    pub toggle: Toggle,
    pub target_y: f32,
    remaining: Duration,
}

pub struct TransitionCoordinator {
    pending: VecDeque<PendingToggle>,
    duration: Duration,
    completion: TransitionCompletion,
}

impl TransitionCoordinator {
    pub fn new(duration: Duration, completion: TransitionCompletion) -> Self {
        Self {
            pending: VecDeque::new(),
            duration,
            completion,
        }
    }

    /// Change timing for slides started from now on.
    pub fn configure(&mut self, duration: Duration, completion: TransitionCompletion) {
        self.duration = duration;
        self.completion = completion;
    }

    /// Record a slide that just started.
    pub fn begin(&mut self, toggle: Toggle, target_y: f32) {
        tracing::debug!(?toggle, target_y, "edge slide started");
        self.pending.push_back(PendingToggle {
            toggle,
            target_y,
            remaining: self.duration,
        });
    }

    /// Whether any slide is still waiting for completion.
    pub fn is_settling(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Advance the timers and return the slides that completed, oldest first.
    ///
    /// Does nothing when completion is signalled by the host.
    pub fn advance(&mut self, dt: Duration) -> Vec<PendingToggle> {
        if self.completion != TransitionCompletion::Timer {
            return Vec::new();
        }

        for pending in self.pending.iter_mut() {
            pending.remaining = pending.remaining.saturating_sub(dt);
        }

        let mut done = Vec::new();
        self.pending.retain(|pending| {
            if pending.remaining.is_zero() {
                done.push(*pending);
                false
            } else {
                true
            }
        });
        done
    }

    /// The host reported that the visual transition ended.
    pub fn complete_all(&mut self) -> Vec<PendingToggle> {
        self.pending.drain(..).collect()
    }
}
