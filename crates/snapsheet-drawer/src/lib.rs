//! Snap-point bottom drawer.
//!
//! A panel anchored to the bottom edge of a viewport that can be dragged
//! open, dragged closed, or dropped at one of several intermediate snap
//! points. Flings win over position, and pulling past the fully open point
//! rubber-bands with friction.
//!
//! # Coordinates
//!
//! Configuration is expressed as offsets from the bottom edge. Internally
//! everything works on axis coordinates measured from the top of the
//! viewport, so smaller values are more open:
//!
//! ```
//! use snapsheet_drawer::Geometry;
//!
//! let geometry = Geometry::new(800.0, 20.0);
//! assert_eq!(geometry.coordinate_for_offset(300.0), 500.0);
//! ```
//!
//! # Components
//!
//! - [`GeometryProvider`] - viewport height, notch-aware top padding
//! - [`SnapTable`] - ordered resting coordinates
//! - [`PositionController`] - live coordinate, surface writes, content growth
//! - [`GestureStateMachine`] - drag tracking and release resolution
//! - [`TransitionCoordinator`] - will/did notifications around edge slides
//! - [`Drawer`] - the host-facing facade over all of the above

pub mod animation;
pub mod config;
pub mod content;
pub mod drawer;
pub mod error;
pub mod events;
pub mod geometry;
pub mod gesture;
pub mod position;
pub mod snap;
pub mod surface;
pub mod transition;

pub use animation::{Easing, SlideAnimation};
pub use config::{DEFAULT_ANIMATION_DURATION, DrawerConfig, TransitionCompletion, parse_snap_offsets};
pub use content::{ContentTree, OVERFLOW_TOLERANCE, ScrollMetrics, ScrollRegion};
pub use drawer::Drawer;
pub use error::{ConfigWarning, DrawerError, GeometryError};
pub use events::{DrawerEvent, DrawerEvents, ListenerId};
pub use geometry::{
    BASE_TOP_PADDING, Geometry, GeometryProvider, HostEnvironment, NOTCH_TOP_PADDING, ProbeId,
};
pub use gesture::{
    DragPhase, FLING_VELOCITY_THRESHOLD, GestureStateMachine, OVERDRAG_FRICTION, RestTarget,
};
pub use position::PositionController;
pub use snap::{CLOSED_OVERSHOOT, SnapTable};
pub use surface::{DrawerSurface, TransitionStyle};
pub use transition::{PendingToggle, Toggle, TransitionCoordinator};
