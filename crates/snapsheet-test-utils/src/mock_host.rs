//! Mock host environment.

use std::sync::Arc;

use parking_lot::Mutex;
use snapsheet_drawer::{GeometryError, HostEnvironment, ProbeId};

#[derive(Debug)]
struct HostState {
    viewport_height: f32,
    safe_area_inset: f32,
    supports_safe_area: bool,
    fail_measure: bool,
    next_probe: u64,
    live: Vec<ProbeId>,
    probes_created: usize,
}

/// Host with a settable viewport and safe-area inset.
///
/// Tracks probe elements so tests can assert none leak.
#[derive(Debug, Clone)]
pub struct MockHost {
    state: Arc<Mutex<HostState>>,
}

impl MockHost {
    pub fn new(viewport_height: f32) -> Self {
        Self {
            state: Arc::new(Mutex::new(HostState {
                viewport_height,
                safe_area_inset: 0.0,
                supports_safe_area: true,
                fail_measure: false,
                next_probe: 0,
                live: Vec::new(),
                probes_created: 0,
            })),
        }
    }

    /// Report a bottom safe-area inset, i.e. a notched display.
    pub fn with_safe_area_inset(self, inset: f32) -> Self {
        self.state.lock().safe_area_inset = inset;
        self
    }

    pub fn set_viewport_height(&self, height: f32) {
        self.state.lock().viewport_height = height;
    }

    pub fn set_supports_safe_area(&self, supported: bool) {
        self.state.lock().supports_safe_area = supported;
    }

    /// Make probe measurement fail.
    pub fn set_fail_measure(&self, fail: bool) {
        self.state.lock().fail_measure = fail;
    }

    /// Probes created and not yet removed.
    pub fn live_probes(&self) -> usize {
        self.state.lock().live.len()
    }

    pub fn probes_created(&self) -> usize {
        self.state.lock().probes_created
    }
}

impl HostEnvironment for MockHost {
    fn viewport_height(&self) -> f32 {
        self.state.lock().viewport_height
    }

    fn supports_safe_area(&self) -> bool {
        self.state.lock().supports_safe_area
    }

    fn create_probe(&mut self) -> Result<ProbeId, GeometryError> {
        let mut state = self.state.lock();
        let probe = ProbeId(state.next_probe);
        state.next_probe += 1;
        state.probes_created += 1;
        state.live.push(probe);
        Ok(probe)
    }

    fn measure_probe(&self, probe: ProbeId) -> Result<f32, GeometryError> {
        let state = self.state.lock();
        if state.fail_measure {
            return Err(GeometryError::ProbeMeasurement(format!("probe {} detached", probe.0)));
        }
        Ok(state.safe_area_inset)
    }

    fn remove_probe(&mut self, probe: ProbeId) {
        self.state.lock().live.retain(|p| *p != probe);
    }
}
