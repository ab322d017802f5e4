use std::time::{Duration, Instant};

use snapsheet_core::profiling::profile_function;

/// Frame timing for hosts that drive a drawer from their own loop.
///
/// Delta time is capped so a stalled frame does not skip an entire slide
/// and its completion notification in one step.
///
/// # Example
/// ```ignore
/// let mut clock = FrameClock::new();
/// loop {
///     drawer.update(clock.tick());
/// }
/// ```
#[derive(Debug, Clone)]
pub struct FrameClock {
    /// Total time elapsed since the clock started
    elapsed: Duration,
    /// Time elapsed since last frame
    delta: Duration,
    frame_count: u64,
    /// Maximum delta time handed out per frame (default: 0.1s)
    max_delta: Duration,
    last_frame_time: Instant,
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            elapsed: Duration::ZERO,
            delta: Duration::ZERO,
            frame_count: 0,
            max_delta: Duration::from_millis(100),
            last_frame_time: Instant::now(),
        }
    }

    /// Sets the per-frame delta cap.
    pub fn with_max_delta(mut self, max_delta: Duration) -> Self {
        self.max_delta = max_delta;
        self
    }

    /// Start a new frame from the wall clock and return its delta.
    pub fn tick(&mut self) -> Duration {
        profile_function!();
        let now = Instant::now();
        let raw_delta = now.duration_since(self.last_frame_time);
        self.last_frame_time = now;
        self.advance(raw_delta)
    }

    /// Start a new frame that lasted `raw_delta` and return the capped delta.
    ///
    /// Used by hosts with their own time source, and by tests.
    pub fn advance(&mut self, raw_delta: Duration) -> Duration {
        self.delta = raw_delta.min(self.max_delta);
        self.elapsed += self.delta;
        self.frame_count += 1;
        self.delta
    }

    #[inline]
    pub fn delta(&self) -> Duration {
        self.delta
    }

    #[inline]
    pub fn delta_seconds(&self) -> f32 {
        self.delta.as_secs_f32()
    }

    #[inline]
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    #[inline]
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    #[inline]
    pub fn max_delta(&self) -> Duration {
        self.max_delta
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
