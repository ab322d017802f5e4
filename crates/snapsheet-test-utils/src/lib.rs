//! Test utilities for snapsheet drawers.
//!
//! Provides mock implementations of the host-facing traits so drawers can
//! be driven headlessly and their side effects inspected.
//!
//! # Overview
//!
//! - `MockHost` - [`HostEnvironment`](snapsheet_drawer::HostEnvironment) with
//!   a settable viewport and safe-area inset, counting probe elements
//! - `MockSurface` - [`DrawerSurface`](snapsheet_drawer::DrawerSurface) that
//!   records every write
//! - `MockContentTree` / `MockScrollRegion` - content hierarchy for
//!   scroll-conflict checks
//! - `EventLog` - collects drawer notifications
//!
//! All mocks are cheap handles over shared state (`Arc<Mutex<_>>`): keep a
//! clone in the test and hand the other to the drawer.
//!
//! ```rust
//! # #[cfg(feature = "mock")]
//! # {
//! use snapsheet_drawer::{Drawer, DrawerConfig};
//! use snapsheet_input::NodeId;
//! use snapsheet_test_utils::{MockHost, MockSurface};
//!
//! let host = MockHost::new(800.0);
//! let surface = MockSurface::new();
//! let mut drawer = Drawer::new(
//!     NodeId(0),
//!     DrawerConfig::new().with_max_offset(300.0),
//!     Box::new(host.clone()),
//!     Box::new(surface.clone()),
//! );
//! drawer.mount(None);
//!
//! assert_eq!(surface.translate_y(), Some(820.0));
//! assert_eq!(host.live_probes(), 0);
//! # }
//! ```

#[cfg(feature = "mock")]
mod mock_content;
#[cfg(feature = "mock")]
mod mock_host;
#[cfg(feature = "mock")]
mod mock_surface;
#[cfg(feature = "mock")]
mod recorder;

#[cfg(feature = "mock")]
pub use mock_content::*;
#[cfg(feature = "mock")]
pub use mock_host::*;
#[cfg(feature = "mock")]
pub use mock_surface::*;
#[cfg(feature = "mock")]
pub use recorder::*;
