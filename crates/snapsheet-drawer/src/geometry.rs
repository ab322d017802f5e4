//! Viewport geometry and the offset-to-coordinate transform.
//!
//! Offsets are distances from the bottom edge; coordinates grow downwards
//! from the top of the viewport, so a smaller coordinate is "more open".

use crate::error::GeometryError;

/// Top padding on hosts without a display notch.
pub const BASE_TOP_PADDING: f32 = 20.0;

/// Top padding when the host reports a bottom safe-area inset.
pub const NOTCH_TOP_PADDING: f32 = 40.0;

/// Handle to a detached measurement element created by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProbeId(pub u64);

/// The host environment the drawer lives in.
pub trait HostEnvironment {
    /// Current viewport height.
    fn viewport_height(&self) -> f32;

    /// Whether the host can evaluate safe-area insets at all.
    fn supports_safe_area(&self) -> bool {
        true
    }

    /// Create a detached element padded by the bottom safe-area inset.
    fn create_probe(&mut self) -> Result<ProbeId, GeometryError>;

    /// Measure the resolved bottom padding of a probe.
    fn measure_probe(&self, probe: ProbeId) -> Result<f32, GeometryError>;

    /// Remove a probe created by [`HostEnvironment::create_probe`].
    fn remove_probe(&mut self, probe: ProbeId);
}

/// Removes the probe element when dropped, whatever happened in between.
struct ProbeGuard<'a> {
    env: &'a mut dyn HostEnvironment,
    probe: ProbeId,
}

impl ProbeGuard<'_> {
    fn measure(&self) -> Result<f32, GeometryError> {
        self.env.measure_probe(self.probe)
    }
}

impl Drop for ProbeGuard<'_> {
    fn drop(&mut self) {
        self.env.remove_probe(self.probe);
    }
}

/// Measured geometry for one sizing pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    pub viewport_height: f32,
    pub top_padding: f32,
}

impl Geometry {
    pub fn new(viewport_height: f32, top_padding: f32) -> Self {
        Self {
            viewport_height,
            top_padding,
        }
    }

    /// Convert a distance from the bottom edge into an axis coordinate.
    #[inline]
    pub fn coordinate_for_offset(&self, offset_from_edge: f32) -> f32 {
        self.viewport_height - offset_from_edge
    }
}

/// Owns the host environment and the cached result of the last sizing pass.
pub struct GeometryProvider {
    env: Box<dyn HostEnvironment>,
    cached: Option<Geometry>,
}

impl GeometryProvider {
    pub fn new(env: Box<dyn HostEnvironment>) -> Self {
        Self { env, cached: None }
    }

    /// Run a sizing pass: read the viewport and probe the top padding once.
    pub fn measure(&mut self) -> Geometry {
        let geometry = Geometry::new(self.env.viewport_height(), self.top_padding());
        tracing::debug!(
            viewport_height = geometry.viewport_height,
            top_padding = geometry.top_padding,
            "measured drawer geometry"
        );
        self.cached = Some(geometry);
        geometry
    }

    /// Geometry of the last sizing pass, measuring if there was none.
    pub fn geometry(&mut self) -> Geometry {
        match self.cached {
            Some(geometry) => geometry,
            None => self.measure(),
        }
    }

    /// Geometry of the last sizing pass, if any.
    pub fn cached(&self) -> Option<Geometry> {
        self.cached
    }

    /// Forget the cached geometry, e.g. after the keyboard was hidden or the
    /// viewport resized.
    pub fn invalidate(&mut self) {
        self.cached = None;
    }

    /// Top padding for the current host, probing for a notch.
    pub fn top_padding(&mut self) -> f32 {
        if self.has_notch() {
            NOTCH_TOP_PADDING
        } else {
            BASE_TOP_PADDING
        }
    }

    /// A non-zero bottom safe-area inset is taken as a sign of a notch.
    fn has_notch(&mut self) -> bool {
        if !self.env.supports_safe_area() {
            return false;
        }

        let probe = match self.env.create_probe() {
            Ok(probe) => probe,
            Err(e) => {
                tracing::warn!("{}", e);
                return false;
            }
        };

        let guard = ProbeGuard {
            env: self.env.as_mut(),
            probe,
        };
        match guard.measure() {
            Ok(padding) => {
                tracing::trace!(padding, "safe-area probe");
                padding > 0.0
            }
            Err(e) => {
                tracing::warn!("{}", e);
                false
            }
        }
    }
}
