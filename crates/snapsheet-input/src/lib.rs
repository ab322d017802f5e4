//! Gesture input for snapsheet.
//!
//! Turns raw pointer samples into a single-axis gesture stream that has
//! already been split into start / move / end phases, with deltas and a
//! smoothed velocity precomputed. Drawers consume [`GestureEvent`]s and
//! never look at raw pointer data.
//!
//! ```
//! use snapsheet_core::math::Vec2;
//! use snapsheet_input::{GesturePhase, GestureTracker, NodeId};
//!
//! let mut tracker = GestureTracker::new();
//! let start = tracker.pointer_down(Vec2::new(0.0, 600.0), NodeId(3), 0.0);
//! assert_eq!(start.phase, GesturePhase::Start);
//!
//! let moved = tracker.pointer_move(Vec2::new(0.0, 560.0), 16.0).unwrap();
//! assert_eq!(moved.detail.delta.y, -40.0);
//! assert!(moved.detail.velocity.y < 0.0);
//! ```

mod gesture;
mod queue;
mod tracker;

pub use gesture::{GestureDetail, GestureEvent, GesturePhase, NodeId};
pub use queue::{GestureBatch, GestureQueue, GestureStats, HandleStatus};
pub use tracker::{GestureTracker, VELOCITY_SAMPLE_WINDOW_MS};
