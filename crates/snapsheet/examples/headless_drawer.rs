//! Drives a drawer without any UI toolkit.
//!
//! A terminal-sized "viewport" stands in for the host, the surface just
//! logs the transform it is given, and a scripted pointer swipes the drawer
//! open and then flings it closed.
//!
//! Run with: cargo run -p snapsheet --example headless_drawer

use std::time::Duration;

use snapsheet::prelude::*;

struct TerminalHost {
    rows: f32,
    next_probe: u64,
}

impl HostEnvironment for TerminalHost {
    fn viewport_height(&self) -> f32 {
        self.rows
    }

    fn supports_safe_area(&self) -> bool {
        false
    }

    fn create_probe(&mut self) -> Result<ProbeId, GeometryError> {
        self.next_probe += 1;
        Ok(ProbeId(self.next_probe))
    }

    fn measure_probe(&self, _probe: ProbeId) -> Result<f32, GeometryError> {
        Err(GeometryError::ProbeUnsupported)
    }

    fn remove_probe(&mut self, _probe: ProbeId) {}
}

struct LogSurface;

impl DrawerSurface for LogSurface {
    fn set_translate_y(&mut self, y: f32) {
        tracing::trace!(y, "translate");
    }

    fn set_height(&mut self, height: f32) {
        tracing::info!(height, "drawer height");
    }

    fn set_content_height(&mut self, height: f32) {
        tracing::trace!(height, "content height");
    }

    fn set_transition(&mut self, transition: Option<TransitionStyle>) {
        match transition {
            Some(style) => tracing::debug!(transition = %style.css(), "transition on"),
            None => tracing::debug!("transition off"),
        }
    }
}

fn swipe(tracker: &mut GestureTracker, queue: &mut GestureQueue, from: f32, to: f32, step_ms: f64) {
    let steps = 8;
    let mut t = 0.0;
    queue.push(tracker.pointer_down(Vec2::new(0.0, from), NodeId(2), t));
    for i in 1..=steps {
        t += step_ms;
        let y = from + (to - from) * i as f32 / steps as f32;
        queue.extend(tracker.pointer_move(Vec2::new(0.0, y), t));
    }
    queue.extend(tracker.pointer_up(Vec2::new(0.0, to), t + step_ms));
}

fn run_frames(drawer: &mut Drawer, clock: &mut FrameClock, frames: usize) {
    for _ in 0..frames {
        snapsheet::core::profiling::new_frame();
        drawer.on_frame();
        drawer.update(clock.advance(Duration::from_millis(16)));
    }
}

fn main() {
    snapsheet::logging::init();
    snapsheet::core::profiling::init_profiling();

    let config = DrawerConfig::new()
        .with_preview_offset(120.0)
        .with_snap_offsets_str("320, 480")
        .with_max_offset(640.0);

    let host = TerminalHost {
        rows: 800.0,
        next_probe: 0,
    };
    let mut drawer = Drawer::new(NodeId(1), config, Box::new(host), Box::new(LogSurface));
    drawer.subscribe(|event| match event {
        DrawerEvent::PositionChanged { .. } => {}
        other => tracing::info!(event = other.name(), y = other.y(), "drawer"),
    });
    drawer.mount(None);

    if let Some(table) = drawer.snap_table() {
        tracing::info!(points = ?table.points(), closed = table.closed_y(), "snap table");
    }

    let mut clock = FrameClock::new();
    let mut tracker = GestureTracker::new();
    let mut queue = GestureQueue::new();
    run_frames(&mut drawer, &mut clock, 1);

    // Slow drag: rests at the nearest point above the release.
    swipe(&mut tracker, &mut queue, 680.0, 420.0, 40.0);
    drawer.handle_gestures(&mut queue.drain());
    run_frames(&mut drawer, &mut clock, 30);
    tracing::info!(y = drawer.y(), index = ?drawer.current_point_index(), "after slow drag");

    // Fast swipe down: flings closed regardless of position.
    swipe(&mut tracker, &mut queue, 420.0, 480.0, 8.0);
    drawer.handle_gestures(&mut queue.drain());
    run_frames(&mut drawer, &mut clock, 30);
    tracing::info!(y = drawer.y(), closed = drawer.is_closed(), "after fling");

    tracing::info!(
        events = queue.stats().events_received,
        moves = queue.stats().moves_received,
        "gesture stats"
    );
}
