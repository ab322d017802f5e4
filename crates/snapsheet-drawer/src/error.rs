//! Error and warning types for the drawer.

use std::fmt;

/// Errors returned by the drawer's programmatic control surface.
///
/// None of these are fatal to the host; the drawer state is left untouched
/// when one is returned.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawerError {
    /// The drawer has not been mounted, so no snap table exists yet.
    NotMounted,

    /// A snap index outside the table was requested.
    SnapIndexOutOfRange {
        /// The requested index.
        index: isize,
        /// Number of points in the table.
        len: usize,
    },
}

impl fmt::Display for DrawerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DrawerError::NotMounted => write!(f, "Drawer is not mounted yet"),
            DrawerError::SnapIndexOutOfRange { index, len } => write!(
                f,
                "Snap index {} is out of range for a table of {} points",
                index, len
            ),
        }
    }
}

impl std::error::Error for DrawerError {}

/// Errors raised while probing host geometry.
#[derive(Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// The host cannot evaluate safe-area insets at all.
    ProbeUnsupported,

    /// The probe element could not be created or measured.
    ProbeMeasurement(String),
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeometryError::ProbeUnsupported => write!(f, "Safe-area probing is not supported"),
            GeometryError::ProbeMeasurement(msg) => {
                write!(f, "Failed to measure safe-area probe: {}", msg)
            }
        }
    }
}

impl std::error::Error for GeometryError {}

/// Non-fatal configuration problems that were corrected automatically.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigWarning {
    /// `can_close = false` was requested without a usable preview offset,
    /// so the drawer would have had nowhere to rest. `can_close` was forced
    /// back to `true`.
    CanCloseWithoutPreview,

    /// A snap offset token could not be parsed and was dropped.
    MalformedSnapOffset {
        /// The offending token.
        token: String,
    },
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigWarning::CanCloseWithoutPreview => write!(
                f,
                "can_close = false requires a non-zero preview offset; can_close was reset to true"
            ),
            ConfigWarning::MalformedSnapOffset { token } => {
                write!(f, "Ignoring malformed snap offset {:?}", token)
            }
        }
    }
}
