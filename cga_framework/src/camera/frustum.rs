/// Frustum - six culling planes of a camera.
///
/// Each plane is represented as a DVec4 (A, B, C, D) where:
/// - (A, B, C) is the inward-pointing unit normal
/// - D is the signed distance
/// - A point P is inside the frustum if dot(plane, P_homogeneous) >= 0 for all planes
///
/// Cameras recompute their frustum in `update()`; it is stale until then.

use glam::{DMat4, DVec3, DVec4};

/// Frustum plane indices
pub const PLANE_LEFT: usize = 0;
pub const PLANE_RIGHT: usize = 1;
pub const PLANE_BOTTOM: usize = 2;
pub const PLANE_TOP: usize = 3;
pub const PLANE_NEAR: usize = 4;
pub const PLANE_FAR: usize = 5;

/// Number of frustum planes
pub const FRUSTUM_PLANES_COUNT: usize = 6;

/// Six frustum planes for culling.
///
/// Each plane is (A, B, C, D) where Ax + By + Cz + D = 0.
/// Normal (A, B, C) points inward (toward the visible volume).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frustum {
    /// Frustum planes: left, right, bottom, top, near, far
    pub planes: [DVec4; FRUSTUM_PLANES_COUNT],
}

impl Frustum {
    /// Extract frustum planes from a view-projection matrix.
    ///
    /// Uses the Gribb & Hartmann method for OpenGL-style clip space
    /// (-w <= x, y, z <= w).
    pub fn from_view_projection(vp: &DMat4) -> Self {
        let m = vp.to_cols_array_2d();

        // m[col][row]; each plane combines row 3 with one of rows 0..2
        let mut planes = [
            // Left:   row3 + row0
            DVec4::new(m[0][3] + m[0][0], m[1][3] + m[1][0], m[2][3] + m[2][0], m[3][3] + m[3][0]),
            // Right:  row3 - row0
            DVec4::new(m[0][3] - m[0][0], m[1][3] - m[1][0], m[2][3] - m[2][0], m[3][3] - m[3][0]),
            // Bottom: row3 + row1
            DVec4::new(m[0][3] + m[0][1], m[1][3] + m[1][1], m[2][3] + m[2][1], m[3][3] + m[3][1]),
            // Top:    row3 - row1
            DVec4::new(m[0][3] - m[0][1], m[1][3] - m[1][1], m[2][3] - m[2][1], m[3][3] - m[3][1]),
            // Near:   row3 + row2
            DVec4::new(m[0][3] + m[0][2], m[1][3] + m[1][2], m[2][3] + m[2][2], m[3][3] + m[3][2]),
            // Far:    row3 - row2
            DVec4::new(m[0][3] - m[0][2], m[1][3] - m[1][2], m[2][3] - m[2][2], m[3][3] - m[3][2]),
        ];

        for plane in &mut planes {
            let normal_len = plane.truncate().length();
            if normal_len > 0.0 {
                *plane /= normal_len;
            }
        }

        Self { planes }
    }

    /// Signed distance from `point` to plane `index` (positive = inside).
    pub fn signed_distance(&self, index: usize, point: DVec3) -> f64 {
        let plane = self.planes[index];
        plane.truncate().dot(point) + plane.w
    }

    /// True if `point` lies inside (or on) all six planes.
    pub fn contains_point(&self, point: DVec3) -> bool {
        (0..FRUSTUM_PLANES_COUNT).all(|i| self.signed_distance(i, point) >= 0.0)
    }

    /// Conservative sphere test: false only if the sphere is fully outside a plane.
    pub fn intersects_sphere(&self, center: DVec3, radius: f64) -> bool {
        (0..FRUSTUM_PLANES_COUNT).all(|i| self.signed_distance(i, center) >= -radius)
    }
}

impl Default for Frustum {
    /// Frustum of the identity view-projection (the NDC cube).
    fn default() -> Self {
        Self::from_view_projection(&DMat4::IDENTITY)
    }
}

#[cfg(test)]
#[path = "frustum_tests.rs"]
mod tests;
