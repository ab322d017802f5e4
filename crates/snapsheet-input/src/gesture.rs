use snapsheet_core::math::Vec2;

/// Identifier of a node in the host's content hierarchy.
///
/// The drawer only compares and walks these ids; their meaning belongs to
/// the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u64);

/// Phase of a disambiguated gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GesturePhase {
    /// Pointer went down and the gesture was recognized.
    Start,
    /// Pointer moved while the gesture is active.
    Move,
    /// Pointer was released or the gesture was cancelled.
    End,
}

/// Snapshot of a gesture at one point in time.
///
/// Positions are in viewport coordinates. Velocity is in units per
/// millisecond, smoothed across samples.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureDetail {
    /// Position where the gesture started.
    pub start: Vec2,
    /// Current pointer position.
    pub current: Vec2,
    /// Offset from `start` to `current`.
    pub delta: Vec2,
    /// Smoothed velocity.
    pub velocity: Vec2,
    /// Node the pointer first went down on.
    pub origin: NodeId,
    /// Timestamp of the sample that produced this detail, in milliseconds.
    pub timestamp_ms: f64,
}

impl GestureDetail {
    /// Create a detail for a gesture starting at `start`.
    pub fn new(start: Vec2, origin: NodeId, timestamp_ms: f64) -> Self {
        Self {
            start,
            current: start,
            delta: Vec2::ZERO,
            velocity: Vec2::ZERO,
            origin,
            timestamp_ms,
        }
    }

    /// Current coordinate along the drag axis.
    #[inline]
    pub fn current_y(&self) -> f32 {
        self.current.y
    }

    /// Velocity along the drag axis.
    #[inline]
    pub fn velocity_y(&self) -> f32 {
        self.velocity.y
    }
}

/// A phase-tagged gesture sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureEvent {
    pub phase: GesturePhase,
    pub detail: GestureDetail,
}

impl GestureEvent {
    pub fn start(detail: GestureDetail) -> Self {
        Self {
            phase: GesturePhase::Start,
            detail,
        }
    }

    pub fn moved(detail: GestureDetail) -> Self {
        Self {
            phase: GesturePhase::Move,
            detail,
        }
    }

    pub fn end(detail: GestureDetail) -> Self {
        Self {
            phase: GesturePhase::End,
            detail,
        }
    }
}
