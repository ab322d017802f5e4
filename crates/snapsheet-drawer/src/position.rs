//! Position controller.
//!
//! Owns the live drawer coordinate and is the only writer of the surface
//! transform. Every coordinate change emits a position notification, even
//! when the coordinate does not actually change.

use std::time::Duration;

use snapsheet_input::GestureDetail;

use crate::animation::SlideAnimation;
use crate::events::{DrawerEvent, DrawerEvents};
use crate::surface::{DrawerSurface, TransitionStyle};

pub struct PositionController {
    surface: Box<dyn DrawerSurface>,
    y: f32,
    height: f32,
    content_growth: f32,
    style: TransitionStyle,
    transition_enabled: bool,
    /// Re-enable the transition on the next frame.
    arm_on_frame: bool,
    animation: Option<SlideAnimation>,
}

impl PositionController {
    /// Create a controller with transitions disabled.
    pub fn new(surface: Box<dyn DrawerSurface>, style: TransitionStyle) -> Self {
        Self {
            surface,
            y: 0.0,
            height: 0.0,
            content_growth: 0.0,
            style,
            transition_enabled: false,
            arm_on_frame: false,
            animation: None,
        }
    }

    pub fn y(&self) -> f32 {
        self.y
    }

    /// Coordinate as currently shown, following any running slide.
    pub fn visual_y(&self) -> f32 {
        self.animation.as_ref().map_or(self.y, SlideAnimation::value)
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    /// Extra content height currently applied for over-drag.
    pub fn content_growth(&self) -> f32 {
        self.content_growth
    }

    pub fn transition_enabled(&self) -> bool {
        self.transition_enabled
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    pub fn set_style(&mut self, style: TransitionStyle) {
        self.style = style;
        if self.transition_enabled {
            self.surface.set_transition(Some(style));
        }
    }

    /// Move to `y` and notify listeners.
    pub fn slide_to(&mut self, y: f32, gesture: Option<GestureDetail>, events: &mut DrawerEvents) {
        if self.transition_enabled {
            let from = self.visual_y();
            self.animation = Some(SlideAnimation::new(from, y, self.style.duration, self.style.easing));
        } else {
            self.animation = None;
        }

        self.y = y;
        self.surface.set_translate_y(y);
        events.emit(DrawerEvent::PositionChanged { y, gesture });
    }

    pub fn slide_by(&mut self, dy: f32, gesture: Option<GestureDetail>, events: &mut DrawerEvents) {
        self.slide_to(self.y + dy, gesture, events);
    }

    /// Grow the content box past its resting height while over-dragged.
    /// Zero restores the resting height.
    pub fn grow_content_height(&mut self, over_amount: f32) {
        let over_amount = over_amount.max(0.0);
        if over_amount == self.content_growth {
            return;
        }
        self.content_growth = over_amount;
        self.surface.set_content_height(self.height + over_amount);
    }

    /// Size the drawer box and reset the content box to match.
    pub fn size(&mut self, height: f32) {
        tracing::debug!(height, y = self.y, "sizing drawer");
        self.height = height;
        self.content_growth = 0.0;
        self.surface.set_height(height);
        self.surface.set_content_height(height);
    }

    /// Track the pointer 1:1.
    pub fn disable_transition(&mut self) {
        self.transition_enabled = false;
        self.arm_on_frame = false;
        self.animation = None;
        self.surface.set_transition(None);
    }

    pub fn enable_transition(&mut self) {
        self.transition_enabled = true;
        self.arm_on_frame = false;
        self.surface.set_transition(Some(self.style));
    }

    /// Enable the transition after the next rendered frame, so an initial
    /// placement is not animated.
    pub fn enable_transition_next_frame(&mut self) {
        self.arm_on_frame = true;
    }

    /// Called by the host once per rendered frame.
    pub fn on_frame(&mut self) {
        if self.arm_on_frame {
            self.enable_transition();
        }
    }

    /// Advance the running slide.
    pub fn update(&mut self, dt: Duration) {
        if let Some(animation) = self.animation.as_mut()
            && !animation.update(dt)
        {
            self.animation = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::Easing;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Default)]
    struct Writes {
        translate: Vec<f32>,
        content: Vec<f32>,
        transitions: Vec<bool>,
    }

    struct RecordingSurface(Rc<RefCell<Writes>>);

    impl DrawerSurface for RecordingSurface {
        fn set_translate_y(&mut self, y: f32) {
            self.0.borrow_mut().translate.push(y);
        }
        fn set_height(&mut self, _height: f32) {}
        fn set_content_height(&mut self, height: f32) {
            self.0.borrow_mut().content.push(height);
        }
        fn set_transition(&mut self, transition: Option<TransitionStyle>) {
            self.0.borrow_mut().transitions.push(transition.is_some());
        }
    }

    fn controller() -> (PositionController, Rc<RefCell<Writes>>) {
        let writes = Rc::new(RefCell::new(Writes::default()));
        let style = TransitionStyle::new(Duration::from_millis(400), Easing::Linear);
        let controller = PositionController::new(Box::new(RecordingSurface(writes.clone())), style);
        (controller, writes)
    }

    #[test]
    fn test_slide_to_is_idempotent() {
        let (mut position, writes) = controller();
        let mut events = DrawerEvents::new();
        let count = Rc::new(RefCell::new(0));
        let c = count.clone();
        events.subscribe(move |_| *c.borrow_mut() += 1);

        position.slide_to(300.0, None, &mut events);
        position.slide_to(300.0, None, &mut events);

        assert_eq!(position.y(), 300.0);
        assert_eq!(writes.borrow().translate, vec![300.0, 300.0]);
        assert_eq!(*count.borrow(), 2);
    }

    #[test]
    fn test_grow_content_height() {
        let (mut position, writes) = controller();
        position.size(500.0);
        position.grow_content_height(30.0);
        position.grow_content_height(0.0);
        assert_eq!(writes.borrow().content, vec![500.0, 530.0, 500.0]);
        assert_eq!(position.content_growth(), 0.0);
    }

    #[test]
    fn test_transition_armed_on_next_frame() {
        let (mut position, writes) = controller();
        position.enable_transition_next_frame();
        assert!(!position.transition_enabled());
        position.on_frame();
        assert!(position.transition_enabled());
        position.on_frame();
        assert_eq!(writes.borrow().transitions, vec![true]);
    }

    #[test]
    fn test_visual_y_follows_animation() {
        let (mut position, _) = controller();
        let mut events = DrawerEvents::new();
        position.slide_to(800.0, None, &mut events);
        position.enable_transition();
        position.slide_to(400.0, None, &mut events);

        assert_eq!(position.visual_y(), 800.0);
        position.update(Duration::from_millis(200));
        assert!((position.visual_y() - 600.0).abs() < 0.01);
        position.update(Duration::from_millis(200));
        assert_eq!(position.visual_y(), 400.0);
        assert!(!position.is_animating());
    }

    #[test]
    fn test_disable_transition_jumps_to_target() {
        let (mut position, _) = controller();
        let mut events = DrawerEvents::new();
        position.enable_transition();
        position.slide_to(100.0, None, &mut events);
        position.disable_transition();
        assert_eq!(position.visual_y(), 100.0);
    }
}
