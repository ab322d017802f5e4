//! Slide animation for hosts that render the drawer themselves.
//!
//! Hosts with native transitions (e.g. CSS) only need the target
//! coordinate; others sample [`SlideAnimation::value`] every frame.

use std::time::Duration;

/// Easing curves for drawer slides.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    /// Linear interpolation
    Linear,
    /// Ease out (slow end)
    EaseOut,
    /// Ease in and out (slow start and end)
    EaseInOut,
    /// CSS-style cubic bezier through (0, 0), (x1, y1), (x2, y2), (1, 1)
    CubicBezier { x1: f32, y1: f32, x2: f32, y2: f32 },
}

impl Easing {
    /// The drawer's default curve, a fast start with a long soft landing.
    pub const DRAWER: Easing = Easing::CubicBezier {
        x1: 0.23,
        y1: 1.0,
        x2: 0.32,
        y2: 1.0,
    };

    /// Apply the easing function to a normalized time value (0.0 to 1.0).
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);

        match *self {
            Easing::Linear => t,
            Easing::EaseOut => t * (2.0 - t),
            Easing::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    -1.0 + (4.0 - 2.0 * t) * t
                }
            }
            Easing::CubicBezier { x1, y1, x2, y2 } => {
                if t == 0.0 || t == 1.0 {
                    return t;
                }
                let s = solve_bezier_x(t, x1, x2);
                bezier(s, y1, y2)
            }
        }
    }

    /// CSS `transition-timing-function` form of the curve.
    pub fn css(&self) -> String {
        match *self {
            Easing::Linear => "linear".to_string(),
            Easing::EaseOut => "ease-out".to_string(),
            Easing::EaseInOut => "ease-in-out".to_string(),
            Easing::CubicBezier { x1, y1, x2, y2 } => {
                format!("cubic-bezier({}, {}, {}, {})", x1, y1, x2, y2)
            }
        }
    }
}

/// One coordinate of a cubic bezier with endpoints 0 and 1.
fn bezier(s: f32, p1: f32, p2: f32) -> f32 {
    let inv = 1.0 - s;
    3.0 * inv * inv * s * p1 + 3.0 * inv * s * s * p2 + s * s * s
}

fn bezier_slope(s: f32, p1: f32, p2: f32) -> f32 {
    let inv = 1.0 - s;
    3.0 * inv * inv * p1 + 6.0 * inv * s * (p2 - p1) + 3.0 * s * s * (1.0 - p2)
}

/// Find the curve parameter whose x equals `x`.
fn solve_bezier_x(x: f32, x1: f32, x2: f32) -> f32 {
    // Newton first, bisection when the slope flattens out.
    let mut s = x;
    for _ in 0..8 {
        let err = bezier(s, x1, x2) - x;
        if err.abs() < 1e-5 {
            return s;
        }
        let slope = bezier_slope(s, x1, x2);
        if slope.abs() < 1e-6 {
            break;
        }
        s -= err / slope;
    }

    let (mut lo, mut hi) = (0.0f32, 1.0f32);
    s = x;
    for _ in 0..32 {
        let v = bezier(s, x1, x2);
        if (v - x).abs() < 1e-5 {
            break;
        }
        if v < x {
            lo = s;
        } else {
            hi = s;
        }
        s = (lo + hi) * 0.5;
    }
    s
}

/// Animation state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationState {
    Running,
    Completed,
}

/// Eased interpolation of the drawer coordinate between two values.
#[derive(Debug, Clone)]
pub struct SlideAnimation {
    from: f32,
    to: f32,
    duration: Duration,
    elapsed: Duration,
    easing: Easing,
    state: AnimationState,
}

impl SlideAnimation {
    pub fn new(from: f32, to: f32, duration: Duration, easing: Easing) -> Self {
        let state = if duration.is_zero() {
            AnimationState::Completed
        } else {
            AnimationState::Running
        };
        Self {
            from,
            to,
            duration,
            elapsed: Duration::ZERO,
            easing,
            state,
        }
    }

    pub fn target(&self) -> f32 {
        self.to
    }

    pub fn state(&self) -> AnimationState {
        self.state
    }

    /// Current interpolated value.
    pub fn value(&self) -> f32 {
        if self.state == AnimationState::Completed {
            return self.to;
        }
        let t = self.elapsed.as_secs_f32() / self.duration.as_secs_f32();
        self.from + (self.to - self.from) * self.easing.apply(t)
    }

    /// Advance by `dt`. Returns true while the animation is still running.
    pub fn update(&mut self, dt: Duration) -> bool {
        if self.state == AnimationState::Completed {
            return false;
        }
        self.elapsed += dt;
        if self.elapsed >= self.duration {
            self.elapsed = self.duration;
            self.state = AnimationState::Completed;
            return false;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_easing() {
        let easing = Easing::Linear;
        assert_eq!(easing.apply(0.0), 0.0);
        assert_eq!(easing.apply(0.5), 0.5);
        assert_eq!(easing.apply(1.0), 1.0);
    }

    #[test]
    fn test_bezier_endpoints_and_monotonic() {
        let easing = Easing::DRAWER;
        assert_eq!(easing.apply(0.0), 0.0);
        assert_eq!(easing.apply(1.0), 1.0);

        let mut last = 0.0;
        for i in 1..20 {
            let v = easing.apply(i as f32 / 20.0);
            assert!(v >= last - 1e-4);
            last = v;
        }
        // Strong ease-out: most of the distance is covered early.
        assert!(easing.apply(0.3) > 0.7);
    }

    #[test]
    fn test_bezier_matches_linear_control_points() {
        let easing = Easing::CubicBezier {
            x1: 1.0 / 3.0,
            y1: 1.0 / 3.0,
            x2: 2.0 / 3.0,
            y2: 2.0 / 3.0,
        };
        assert!((easing.apply(0.25) - 0.25).abs() < 1e-3);
        assert!((easing.apply(0.8) - 0.8).abs() < 1e-3);
    }

    #[test]
    fn test_css_form() {
        assert_eq!(Easing::DRAWER.css(), "cubic-bezier(0.23, 1, 0.32, 1)");
    }

    #[test]
    fn test_slide_animation_update() {
        let mut anim = SlideAnimation::new(800.0, 400.0, Duration::from_millis(400), Easing::Linear);
        assert_eq!(anim.value(), 800.0);

        assert!(anim.update(Duration::from_millis(200)));
        assert!((anim.value() - 600.0).abs() < 0.01);

        assert!(!anim.update(Duration::from_millis(200)));
        assert_eq!(anim.value(), 400.0);
        assert_eq!(anim.state(), AnimationState::Completed);
    }

    #[test]
    fn test_zero_duration_completes_immediately() {
        let anim = SlideAnimation::new(0.0, 10.0, Duration::ZERO, Easing::Linear);
        assert_eq!(anim.state(), AnimationState::Completed);
        assert_eq!(anim.value(), 10.0);
    }
}
