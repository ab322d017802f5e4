//! Drawer notifications and listener registration.

use indexmap::IndexMap;
use snapsheet_input::GestureDetail;

/// Notifications emitted by a drawer, in the order they happen.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawerEvent {
    /// The drawer coordinate changed, by a drag move or a slide.
    PositionChanged {
        y: f32,
        gesture: Option<GestureDetail>,
    },
    /// A slide to the fully open position is about to start.
    WillOpen { y: f32 },
    /// The slide to the fully open position finished.
    DidOpen { y: f32 },
    /// A slide to the closed position is about to start.
    WillClose { y: f32 },
    /// The slide to the closed position finished.
    DidClose { y: f32 },
}

impl DrawerEvent {
    /// Coordinate carried by the event.
    pub fn y(&self) -> f32 {
        match *self {
            DrawerEvent::PositionChanged { y, .. }
            | DrawerEvent::WillOpen { y }
            | DrawerEvent::DidOpen { y }
            | DrawerEvent::WillClose { y }
            | DrawerEvent::DidClose { y } => y,
        }
    }

    /// Short name of the event kind.
    pub fn name(&self) -> &'static str {
        match self {
            DrawerEvent::PositionChanged { .. } => "position-change",
            DrawerEvent::WillOpen { .. } => "will-open",
            DrawerEvent::DidOpen { .. } => "did-open",
            DrawerEvent::WillClose { .. } => "will-close",
            DrawerEvent::DidClose { .. } => "did-close",
        }
    }
}

/// Handle returned by [`DrawerEvents::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener = Box<dyn FnMut(&DrawerEvent)>;

/// Ordered set of drawer listeners.
///
/// Listeners are called synchronously in subscription order.
#[derive(Default)]
pub struct DrawerEvents {
    listeners: IndexMap<ListenerId, Listener>,
    next_id: u64,
}

impl DrawerEvents {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&DrawerEvent) + 'static,
    {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.insert(id, Box::new(listener));
        id
    }

    /// Remove a listener. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.listeners.shift_remove(&id).is_some()
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    pub fn emit(&mut self, event: DrawerEvent) {
        tracing::trace!(event = event.name(), y = event.y(), "drawer event");
        for listener in self.listeners.values_mut() {
            listener(&event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_listeners_called_in_subscription_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut events = DrawerEvents::new();

        let a = log.clone();
        events.subscribe(move |e| a.borrow_mut().push(("a", e.name())));
        let b = log.clone();
        events.subscribe(move |e| b.borrow_mut().push(("b", e.name())));

        events.emit(DrawerEvent::WillOpen { y: 20.0 });
        assert_eq!(*log.borrow(), vec![("a", "will-open"), ("b", "will-open")]);
    }

    #[test]
    fn test_unsubscribe() {
        let count = Rc::new(RefCell::new(0));
        let mut events = DrawerEvents::new();
        let c = count.clone();
        let id = events.subscribe(move |_| *c.borrow_mut() += 1);

        events.emit(DrawerEvent::DidClose { y: 820.0 });
        assert!(events.unsubscribe(id));
        assert!(!events.unsubscribe(id));
        events.emit(DrawerEvent::DidClose { y: 820.0 });

        assert_eq!(*count.borrow(), 1);
        assert!(events.is_empty());
    }
}
