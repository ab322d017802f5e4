//! The drawer facade.
//!
//! [`Drawer`] wires the geometry provider, snap table, position controller,
//! gesture state machine and transition coordinator together and exposes
//! the host-facing surface: mounting, gestures, programmatic snapping,
//! reconfiguration and frame/timer ticks.

use std::time::Duration;

use snapsheet_core::math::approx_eq;
use snapsheet_core::profiling::profile_function;
use snapsheet_input::{GestureBatch, GestureDetail, GestureEvent, GesturePhase, HandleStatus, NodeId};

use crate::config::DrawerConfig;
use crate::content::{ContentTree, ScrollRegion};
use crate::error::{ConfigWarning, DrawerError};
use crate::events::{DrawerEvent, DrawerEvents, ListenerId};
use crate::geometry::{Geometry, GeometryProvider, HostEnvironment};
use crate::gesture::{self, ContentBinding, GestureStateMachine, RestTarget};
use crate::position::PositionController;
use crate::snap::SnapTable;
use crate::surface::{DrawerSurface, TransitionStyle};
use crate::transition::{PendingToggle, Toggle, TransitionCoordinator};

/// A draggable bottom drawer with snap points.
///
/// # Example
///
/// ```ignore
/// let config = DrawerConfig::new()
///     .with_preview_offset(120.0)
///     .with_snap_offsets_str("360")
///     .with_max_offset(640.0);
///
/// let mut drawer = Drawer::new(NodeId(1), config, Box::new(host), Box::new(surface));
/// drawer.mount(None);
///
/// // every frame
/// drawer.on_frame();
/// drawer.handle_gestures(&mut batch);
/// drawer.update(frame_time.delta);
/// ```
pub struct Drawer {
    root: NodeId,
    config: DrawerConfig,
    warnings: Vec<ConfigWarning>,
    geometry: GeometryProvider,
    table: Option<SnapTable>,
    position: PositionController,
    gestures: GestureStateMachine,
    transitions: TransitionCoordinator,
    events: DrawerEvents,
    content: Option<Box<dyn ContentTree>>,
    scroll: Option<Box<dyn ScrollRegion>>,
}

impl Drawer {
    /// Create an unmounted drawer rooted at `root`.
    ///
    /// The configuration is validated here; corrections are logged and kept
    /// in [`Drawer::warnings`].
    pub fn new(
        root: NodeId,
        config: DrawerConfig,
        env: Box<dyn HostEnvironment>,
        surface: Box<dyn DrawerSurface>,
    ) -> Self {
        let (config, warnings) = config.validated();
        let style = TransitionStyle::new(config.animation_duration, config.easing);
        let transitions = TransitionCoordinator::new(config.animation_duration, config.completion);

        Self {
            root,
            config,
            warnings,
            geometry: GeometryProvider::new(env),
            table: None,
            position: PositionController::new(surface, style),
            gestures: GestureStateMachine::new(),
            transitions,
            events: DrawerEvents::new(),
            content: None,
            scroll: None,
        }
    }

    /// Provide the content hierarchy used for scroll-conflict checks.
    pub fn set_content_tree(&mut self, tree: Box<dyn ContentTree>) {
        self.content = Some(tree);
    }

    /// Provide the scroll region resolved from the drawer's content.
    pub fn attach_scroll_region(&mut self, scroll: Box<dyn ScrollRegion>) {
        self.scroll = Some(scroll);
    }

    pub fn detach_scroll_region(&mut self) {
        self.scroll = None;
    }

    pub fn subscribe<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&DrawerEvent) + 'static,
    {
        self.events.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.events.unsubscribe(id)
    }

    /// Geometry is known: build the snap table, size the drawer and place it
    /// without animating.
    ///
    /// `content_height` is the measured height of the drawer content, if the
    /// host has it; a max offset taller than the content is clipped to it.
    pub fn mount(&mut self, content_height: Option<f32>) {
        if let Some(content_height) = content_height
            && let Some(max_offset) = self.config.effective_max_offset()
            && content_height > 0.0
            && content_height < max_offset
        {
            tracing::debug!(max_offset, content_height, "clipping max offset to content height");
            self.config.max_offset = Some(content_height);
        }

        self.position.disable_transition();
        let geometry = self.geometry.measure();
        let table = SnapTable::build(&self.config, &geometry);

        let start_y = if self.config.effective_preview_offset().is_some() {
            table.min_y()
        } else {
            table.closed_y()
        };
        self.table = Some(table);
        self.size(&geometry);

        self.position.slide_to(start_y, None, &mut self.events);
        self.position.enable_transition_next_frame();
        tracing::debug!(y = start_y, "drawer mounted");
    }

    pub fn is_mounted(&self) -> bool {
        self.table.is_some()
    }

    /// Apply a new configuration and recompute the snap table and sizes.
    ///
    /// The drawer keeps its current coordinate.
    pub fn reconfigure(&mut self, config: DrawerConfig) {
        let (config, warnings) = config.validated();
        self.config = config;
        self.warnings = warnings;

        self.position
            .set_style(TransitionStyle::new(self.config.animation_duration, self.config.easing));
        self.transitions
            .configure(self.config.animation_duration, self.config.completion);

        if self.is_mounted() {
            let geometry = self.geometry.geometry();
            self.rebuild(&geometry);
        }
    }

    /// The viewport or safe area changed; re-measure and resize.
    pub fn invalidate_geometry(&mut self) {
        self.geometry.invalidate();
        if self.is_mounted() {
            let geometry = self.geometry.measure();
            self.rebuild(&geometry);
        }
    }

    fn rebuild(&mut self, geometry: &Geometry) {
        let mut table = SnapTable::build(&self.config, geometry);
        if let Some(previous) = self.table.as_ref() {
            table.inherit_index(previous);
        }
        self.table = Some(table);
        self.size(geometry);
    }

    /// Box height is the max offset, or the viewport minus the top padding.
    fn size(&mut self, geometry: &Geometry) {
        let height = self
            .config
            .effective_max_offset()
            .unwrap_or(geometry.viewport_height - geometry.top_padding);
        self.position.size(height);
    }

    /// Called by the host once per rendered frame.
    pub fn on_frame(&mut self) {
        self.position.on_frame();
    }

    /// Advance the slide animation and the completion timers.
    pub fn update(&mut self, dt: Duration) {
        self.position.update(dt);
        let done = self.transitions.advance(dt);
        self.finish(done);
    }

    /// The host observed the end of the visual transition.
    pub fn notify_transition_end(&mut self) {
        let done = self.transitions.complete_all();
        self.finish(done);
    }

    fn finish(&mut self, done: Vec<PendingToggle>) {
        for pending in done {
            let event = match pending.toggle {
                Toggle::Open => DrawerEvent::DidOpen { y: pending.target_y },
                Toggle::Close => DrawerEvent::DidClose { y: pending.target_y },
            };
            self.events.emit(event);
            self.position.grow_content_height(0.0);
        }
    }

    /// Whether a gesture starting at `detail.origin` may drag the drawer.
    pub fn can_start(&self, detail: &GestureDetail) -> bool {
        let content = ContentBinding {
            tree: self.content.as_deref(),
            scroll: self.scroll.as_deref(),
            boundary: self.root,
        };
        gesture::can_start(
            detail.origin,
            self.table.as_ref(),
            self.config.effective_max_offset().is_some(),
            content,
        )
    }

    /// Feed one gesture event.
    ///
    /// Moves and ends of a gesture whose start was rejected are ignored.
    pub fn handle_gesture(&mut self, event: &GestureEvent) -> HandleStatus {
        match event.phase {
            GesturePhase::Start => {
                if !self.can_start(&event.detail) {
                    return HandleStatus::ignored();
                }
                self.gestures.on_start(&mut self.position);
                HandleStatus::consumed()
            }
            GesturePhase::Move => {
                let Some(table) = self.table.as_ref() else {
                    return HandleStatus::ignored();
                };
                if !self.gestures.is_dragging() {
                    return HandleStatus::ignored();
                }
                self.gestures
                    .on_move(&event.detail, table, &mut self.position, &mut self.events);
                HandleStatus::consumed()
            }
            GesturePhase::End => {
                let Some(table) = self.table.as_ref() else {
                    return HandleStatus::ignored();
                };
                if !self.gestures.is_dragging() {
                    return HandleStatus::ignored();
                }
                let target = self.gestures.on_end(&event.detail, table, &mut self.position);
                self.settle(target, Some(event.detail));
                HandleStatus::consumed()
            }
        }
    }

    /// Feed a batch of gesture events, consuming the ones the drawer used.
    pub fn handle_gestures(&mut self, batch: &mut GestureBatch) {
        profile_function!();
        batch.dispatch(|event| self.handle_gesture(event));
    }

    /// Slide to a snap table entry.
    ///
    /// `-1` opens fully, `0` closes, any other index selects that entry.
    /// A drag in progress is ended; its remaining moves are ignored.
    pub fn snap_to(&mut self, index: isize) -> Result<(), DrawerError> {
        let table = self.table.as_ref().ok_or(DrawerError::NotMounted)?;
        let target = match index {
            -1 => RestTarget::Open,
            0 => RestTarget::Close,
            i if i > 0 && (i as usize) < table.len() => RestTarget::Point(i as usize),
            _ => {
                return Err(DrawerError::SnapIndexOutOfRange {
                    index,
                    len: table.len(),
                });
            }
        };

        if self.gestures.is_dragging() {
            tracing::debug!(index, "programmatic slide ends the active drag");
            self.gestures.cancel();
        }

        self.position.enable_transition();
        self.settle(target, None);
        Ok(())
    }

    /// Slide fully open.
    pub fn open(&mut self) -> Result<(), DrawerError> {
        self.snap_to(-1)
    }

    /// Slide to the closed position.
    pub fn close(&mut self) -> Result<(), DrawerError> {
        self.snap_to(0)
    }

    /// Drive the drawer from an `opened` flag, sliding only when it is not
    /// already at the requested edge.
    pub fn set_opened(&mut self, opened: bool) -> Result<(), DrawerError> {
        if !self.is_mounted() {
            return Err(DrawerError::NotMounted);
        }
        if opened && !self.is_open() {
            self.open()
        } else if !opened && !self.is_closed() {
            self.close()
        } else {
            Ok(())
        }
    }

    fn settle(&mut self, target: RestTarget, gesture: Option<GestureDetail>) {
        let Some(table) = self.table.as_ref() else {
            return;
        };
        let (max_y, closed_y, last) = (table.max_y(), table.closed_y(), table.last_index());

        match target {
            RestTarget::Open => self.slide_open(gesture),
            RestTarget::Close => self.slide_close(gesture),
            RestTarget::Point(index) => {
                let Some(y) = table.get(index) else {
                    return;
                };
                if index == last || approx_eq(y, max_y) {
                    self.slide_open(gesture);
                } else if approx_eq(y, closed_y) {
                    self.slide_close(gesture);
                } else {
                    self.position.grow_content_height(0.0);
                    self.position.slide_to(y, gesture, &mut self.events);
                    self.set_current_index(index);
                }
            }
        }
    }

    fn slide_open(&mut self, gesture: Option<GestureDetail>) {
        let Some(table) = self.table.as_ref() else {
            return;
        };
        let (y, last) = (table.max_y(), table.last_index());

        self.events.emit(DrawerEvent::WillOpen { y });
        self.position.slide_to(y, gesture, &mut self.events);
        self.set_current_index(last);
        self.transitions.begin(Toggle::Open, y);
    }

    fn slide_close(&mut self, gesture: Option<GestureDetail>) {
        let Some(table) = self.table.as_ref() else {
            return;
        };
        let y = table.closed_y();

        self.events.emit(DrawerEvent::WillClose { y });
        self.position.slide_to(y, gesture, &mut self.events);
        self.set_current_index(0);
        self.transitions.begin(Toggle::Close, y);
    }

    fn set_current_index(&mut self, index: usize) {
        if let Some(table) = self.table.as_mut() {
            table.set_current_index(index);
        }
    }

    /// Whether the drawer sits at the fully open point.
    pub fn is_open(&self) -> bool {
        self.table
            .as_ref()
            .is_some_and(|t| approx_eq(self.position.y(), t.max_y()))
    }

    /// Whether the drawer sits at the closed coordinate.
    pub fn is_closed(&self) -> bool {
        self.table
            .as_ref()
            .is_some_and(|t| approx_eq(self.position.y(), t.closed_y()))
    }

    /// Whether an edge slide is still waiting for its did-notification.
    pub fn is_settling(&self) -> bool {
        self.transitions.is_settling()
    }

    pub fn is_dragging(&self) -> bool {
        self.gestures.is_dragging()
    }

    /// Live drawer coordinate.
    pub fn y(&self) -> f32 {
        self.position.y()
    }

    /// Coordinate as currently rendered, following a running slide.
    pub fn visual_y(&self) -> f32 {
        self.position.visual_y()
    }

    pub fn height(&self) -> f32 {
        self.position.height()
    }

    pub fn snap_table(&self) -> Option<&SnapTable> {
        self.table.as_ref()
    }

    pub fn current_point_index(&self) -> Option<usize> {
        self.table.as_ref().map(SnapTable::current_index)
    }

    pub fn config(&self) -> &DrawerConfig {
        &self.config
    }

    /// Corrections made to the last applied configuration.
    pub fn warnings(&self) -> &[ConfigWarning] {
        &self.warnings
    }

    pub fn geometry(&self) -> Option<Geometry> {
        self.geometry.cached()
    }

    pub fn root(&self) -> NodeId {
        self.root
    }
}
