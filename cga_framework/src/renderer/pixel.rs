/// Pixel - a point in logical image space.
///
/// Logical image space has its origin at the centre of the output surface
/// and positive y pointing up. Renderers translate it to surface coordinates.

use glam::DVec2;

/// A point in logical pixel space (centre origin, y up).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Pixel {
    pub x: f64,
    pub y: f64,
}

impl Pixel {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Pixel rounded to the nearest integer grid position. Saturates at the
    /// `i64` range; NaN rounds to 0, check `is_finite()` first.
    pub fn rounded(&self) -> (i64, i64) {
        (self.x.round() as i64, self.y.round() as i64)
    }
}

impl From<DVec2> for Pixel {
    fn from(v: DVec2) -> Self {
        Self::new(v.x, v.y)
    }
}
