//! Profiling utilities based on the `puffin` crate.
//!
//! Scopes are compiled in unconditionally and cost a single atomic load
//! while profiling is off.

pub use puffin::{GlobalProfiler, profile_function, profile_scope};

/// Enable collection of profiling scopes.
///
/// With the `profiling-server` feature, also starts a `puffin_http` server
/// on port 8585 for `puffin_viewer`.
pub fn init_profiling() {
    puffin::set_scopes_on(true);

    #[cfg(feature = "profiling-server")]
    {
        use std::sync::OnceLock;

        static PROFILING_SERVER: OnceLock<puffin_http::Server> = OnceLock::new();

        match puffin_http::Server::new("0.0.0.0:8585") {
            Ok(server) => {
                tracing::info!("Puffin profiler server started on http://0.0.0.0:8585");
                let _ = PROFILING_SERVER.set(server);
            }
            Err(e) => {
                tracing::error!("Failed to start puffin server: {}", e);
            }
        }
    }
}

/// Mark the start of a new frame for profiling.
#[inline]
pub fn new_frame() {
    puffin::GlobalProfiler::lock().new_frame();
}
