//! The visual surface the drawer drives.

use std::time::Duration;

use crate::animation::Easing;

/// Transition applied to position changes while animation is enabled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionStyle {
    pub duration: Duration,
    pub easing: Easing,
}

impl TransitionStyle {
    pub fn new(duration: Duration, easing: Easing) -> Self {
        Self { duration, easing }
    }

    /// CSS `transition` shorthand, e.g.
    /// `400ms transform cubic-bezier(0.23, 1, 0.32, 1)`.
    pub fn css(&self) -> String {
        format!("{}ms transform {}", self.duration.as_millis(), self.easing.css())
    }
}

/// Host-side element the drawer positions and sizes.
///
/// Every method is a plain write; the drawer never reads back from the
/// surface.
pub trait DrawerSurface {
    /// Translate the drawer along the drag axis to `y`.
    fn set_translate_y(&mut self, y: f32);

    /// Set the height of the drawer box.
    fn set_height(&mut self, height: f32);

    /// Set the height of the content box inside the drawer.
    fn set_content_height(&mut self, height: f32);

    /// Enable (`Some`) or disable (`None`) animated position changes.
    fn set_transition(&mut self, transition: Option<TransitionStyle>);
}
