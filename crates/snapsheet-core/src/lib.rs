//! Snapsheet Core
//!
//! Shared plumbing for the snapsheet crates: hash collections, math types,
//! logging setup and profiling scopes.

pub mod alloc;
pub mod logging;
pub mod math;
pub mod profiling;
