//! Error types for the CGA framework
//!
//! This module defines the error types used throughout the framework,
//! covering camera math, scene graph traversal, and presentation surfaces.

use std::fmt;

/// Result type for framework operations
pub type Result<T> = std::result::Result<T, Error>;

/// Framework errors
#[derive(Debug, Clone)]
pub enum Error {
    /// Initialization failed (framework, surface, camera)
    InitializationFailed(String),

    /// Presentation surface / windowing backend error
    BackendError(String),

    /// A parameter is out of its valid range (zero-sized surface, bad fov, ...)
    InvalidParameter(String),

    /// A vector that must be normalized has zero length, or two vectors
    /// that must span a plane are parallel
    DegenerateVector(String),

    /// Homogeneous divide by a zero or negative `w` (point at or behind the eye)
    DegenerateProjection {
        /// The homogeneous weight that was rejected
        w: f64,
    },

    /// Camera queried after a pose/frustum change without calling `update()`
    CameraNotUpdated,

    /// Capability not provided by this implementation
    Unsupported(String),

    /// A scene graph lock was poisoned by a panicking thread
    LockPoisoned(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InitializationFailed(msg) => write!(f, "Initialization failed: {}", msg),
            Error::BackendError(msg) => write!(f, "Backend error: {}", msg),
            Error::InvalidParameter(msg) => write!(f, "Invalid parameter: {}", msg),
            Error::DegenerateVector(msg) => write!(f, "Degenerate vector: {}", msg),
            Error::DegenerateProjection { w } => {
                write!(f, "Degenerate projection: homogeneous w = {}", w)
            }
            Error::CameraNotUpdated => {
                write!(f, "Camera not updated: call update() after changing pose or frustum")
            }
            Error::Unsupported(msg) => write!(f, "Unsupported operation: {}", msg),
            Error::LockPoisoned(msg) => write!(f, "Lock poisoned: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

impl Error {
    /// True for numeric edge cases a caller may skip over (the rest of the
    /// frame stays valid).
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Error::DegenerateProjection { .. })
    }
}

/// Log an error through the framework logger and evaluate to it.
///
/// # Example
///
/// ```ignore
/// let guard = lock.write().map_err(|_| cga_err!("cga::Node", Error::LockPoisoned("geometry".into())))?;
/// ```
#[macro_export]
macro_rules! cga_err {
    ($source:expr, $err:expr) => {{
        let err: $crate::cga::Error = $err;
        $crate::cga_error!($source, "{}", err);
        err
    }};
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
