//! Math types.
//!
//! Re-exports the `glam` vector types used for pointer positions and
//! velocities, plus small helpers for the single drag axis.
//!
//! # Examples
//!
//! ```
//! use snapsheet_core::math::{Vec2, approx_eq};
//!
//! let start = Vec2::new(10.0, 400.0);
//! let current = Vec2::new(12.0, 350.0);
//! assert!(approx_eq((current - start).y, -50.0));
//! ```

pub use glam::Vec2;

/// Tolerance used when comparing axis coordinates.
pub const AXIS_EPSILON: f32 = 1e-3;

/// Compare two axis coordinates with [`AXIS_EPSILON`] tolerance.
#[inline]
pub fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() <= AXIS_EPSILON
}
