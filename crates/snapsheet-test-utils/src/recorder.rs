//! Drawer event recording.

use std::sync::Arc;

use parking_lot::Mutex;
use snapsheet_drawer::{Drawer, DrawerEvent, ListenerId};

/// Collects every event a drawer emits.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Arc<Mutex<Vec<DrawerEvent>>>,
}

impl EventLog {
    /// Subscribe a new log to `drawer`.
    pub fn attach(drawer: &mut Drawer) -> (Self, ListenerId) {
        let log = Self::default();
        let sink = log.events.clone();
        let id = drawer.subscribe(move |event| sink.lock().push(event.clone()));
        (log, id)
    }

    pub fn events(&self) -> Vec<DrawerEvent> {
        self.events.lock().clone()
    }

    /// Event names in emission order.
    pub fn names(&self) -> Vec<&'static str> {
        self.events.lock().iter().map(DrawerEvent::name).collect()
    }

    /// Names of everything except position changes.
    pub fn toggles(&self) -> Vec<&'static str> {
        self.events
            .lock()
            .iter()
            .filter(|e| !matches!(e, DrawerEvent::PositionChanged { .. }))
            .map(DrawerEvent::name)
            .collect()
    }

    pub fn count(&self, name: &str) -> usize {
        self.events.lock().iter().filter(|e| e.name() == name).count()
    }

    pub fn clear(&self) {
        self.events.lock().clear();
    }
}
