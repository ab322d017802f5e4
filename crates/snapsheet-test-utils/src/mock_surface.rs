//! Mock drawer surface.

use std::sync::Arc;

use parking_lot::Mutex;
use snapsheet_drawer::{DrawerSurface, TransitionStyle};

/// Records a surface write for verification in tests.
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceCall {
    TranslateY(f32),
    Height(f32),
    ContentHeight(f32),
    Transition(Option<TransitionStyle>),
}

/// Surface that records every write.
#[derive(Debug, Clone, Default)]
pub struct MockSurface {
    calls: Arc<Mutex<Vec<SurfaceCall>>>,
}

impl MockSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<SurfaceCall> {
        self.calls.lock().clone()
    }

    pub fn clear(&self) {
        self.calls.lock().clear();
    }

    /// Last applied translation.
    pub fn translate_y(&self) -> Option<f32> {
        self.calls.lock().iter().rev().find_map(|c| match c {
            SurfaceCall::TranslateY(y) => Some(*y),
            _ => None,
        })
    }

    /// Last applied box height.
    pub fn height(&self) -> Option<f32> {
        self.calls.lock().iter().rev().find_map(|c| match c {
            SurfaceCall::Height(h) => Some(*h),
            _ => None,
        })
    }

    /// Last applied content height.
    pub fn content_height(&self) -> Option<f32> {
        self.calls.lock().iter().rev().find_map(|c| match c {
            SurfaceCall::ContentHeight(h) => Some(*h),
            _ => None,
        })
    }

    /// Last applied transition; `None` if never set.
    pub fn transition(&self) -> Option<Option<TransitionStyle>> {
        self.calls.lock().iter().rev().find_map(|c| match c {
            SurfaceCall::Transition(t) => Some(*t),
            _ => None,
        })
    }

    /// Whether the last transition write enabled animation.
    pub fn transition_enabled(&self) -> bool {
        matches!(self.transition(), Some(Some(_)))
    }

    pub fn count_translates(&self) -> usize {
        self.calls
            .lock()
            .iter()
            .filter(|c| matches!(c, SurfaceCall::TranslateY(_)))
            .count()
    }
}

impl DrawerSurface for MockSurface {
    fn set_translate_y(&mut self, y: f32) {
        self.calls.lock().push(SurfaceCall::TranslateY(y));
    }

    fn set_height(&mut self, height: f32) {
        self.calls.lock().push(SurfaceCall::Height(height));
    }

    fn set_content_height(&mut self, height: f32) {
        self.calls.lock().push(SurfaceCall::ContentHeight(height));
    }

    fn set_transition(&mut self, transition: Option<TransitionStyle>) {
        self.calls.lock().push(SurfaceCall::Transition(transition));
    }
}
