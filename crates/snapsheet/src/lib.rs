//! Snapsheet - a draggable bottom drawer
//!
//! A panel anchored to the bottom of a viewport that follows the pointer,
//! flings open or closed, and rests at configurable snap points. The crate
//! is host-agnostic: the host supplies viewport measurements, a surface to
//! write the drawer transform to, and a stream of gestures.
//!
//! - **Geometry**: viewport height and notch-aware top padding
//! - **Snap points**: offsets from the bottom edge turned into coordinates
//! - **Gestures**: 1:1 tracking, friction past the open point, fling release
//! - **Notifications**: position changes plus will/did open and close
//!
//! # Quick Start
//!
//! ```ignore
//! use snapsheet::prelude::*;
//!
//! let config = DrawerConfig::new()
//!     .with_preview_offset(120.0)
//!     .with_snap_offsets_str("360")
//!     .with_max_offset(640.0);
//!
//! let mut drawer = Drawer::new(NodeId(1), config, Box::new(host), Box::new(surface));
//! drawer.subscribe(|event| tracing::info!(event = event.name(), y = event.y()));
//! drawer.mount(None);
//!
//! let mut clock = FrameClock::new();
//! loop {
//!     let dt = clock.tick();
//!     drawer.on_frame();
//!     drawer.handle_gestures(&mut queue.drain());
//!     drawer.update(dt);
//! }
//! ```

pub mod time;

// Re-export core types
pub use snapsheet_core as core;
pub use snapsheet_core::{logging, math};

#[cfg(feature = "input")]
pub use snapsheet_input as input;

#[cfg(feature = "drawer")]
pub use snapsheet_drawer as drawer;

#[cfg(feature = "drawer")]
pub use snapsheet_drawer::{
    Drawer, DrawerConfig, DrawerError, DrawerEvent, DrawerSurface, HostEnvironment,
};

pub use time::FrameClock;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::time::FrameClock;

    // Core math types
    pub use snapsheet_core::math::Vec2;

    #[cfg(feature = "input")]
    pub use snapsheet_input::{
        GestureBatch, GestureDetail, GestureEvent, GesturePhase, GestureQueue, GestureTracker,
        HandleStatus, NodeId,
    };

    #[cfg(feature = "drawer")]
    pub use snapsheet_drawer::{
        ConfigWarning, ContentTree, Drawer, DrawerConfig, DrawerError, DrawerEvent, DrawerSurface,
        Easing, GeometryError, HostEnvironment, ListenerId, ProbeId, ScrollMetrics, ScrollRegion,
        TransitionCompletion, TransitionStyle,
    };
}
