//! Small helpers on top of glam's double-precision types.
//!
//! Matrices in this crate are written down row-major (the way the view and
//! translation matrices are usually printed) and converted into glam's
//! column-major storage here.

use glam::{DMat4, DVec3, DVec4};
use crate::error::{Error, Result};

/// Tolerance used by the camera math for "zero" lengths and weights.
pub const EPSILON: f64 = 1e-9;

/// Build a 4x4 matrix from a row-major literal.
pub fn matrix_from_rows(rows: [[f64; 4]; 4]) -> DMat4 {
    DMat4::from_cols_array_2d(&rows).transpose()
}

/// Homogeneous point (w = 1).
pub fn to_homogeneous(point: DVec3) -> DVec4 {
    point.extend(1.0)
}

/// Normalize `v`, failing on zero (or non-finite) magnitude.
pub fn normalize(v: DVec3, what: &str) -> Result<DVec3> {
    v.try_normalize()
        .ok_or_else(|| Error::DegenerateVector(format!("cannot normalize {} ({})", what, v)))
}
