/// Camera - capability set shared by all camera variants.
///
/// A camera owns its pose and frustum parameters and caches the derived
/// view matrix, projection matrix, and culling planes. The cache is refreshed
/// only by `update()`: after any setter, queries return
/// `Error::CameraNotUpdated` until `update()` has been called again.

use glam::{DMat4, DVec3, DVec4};
use crate::error::{Error, Result};
use crate::math::{self, EPSILON};
use crate::renderer::Pixel;
use super::frustum::Frustum;

/// Point in clipping space after the perspective divide.
///
/// `x`, `y`, `z` are normalized device coordinates; `w` is the homogeneous
/// weight the point was divided by, kept so the divide can be undone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CVPoint {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub w: f64,
}

impl CVPoint {
    /// Divide a homogeneous clip-space point by its weight.
    ///
    /// Weights at or below `EPSILON` mean the point sits on the eye plane or
    /// behind the camera; those are reported as `DegenerateProjection`.
    pub fn from_homogeneous(clip: DVec4) -> Result<Self> {
        if !(clip.w > EPSILON) {
            return Err(Error::DegenerateProjection { w: clip.w });
        }
        Ok(Self {
            x: clip.x / clip.w,
            y: clip.y / clip.w,
            z: clip.z / clip.w,
            w: clip.w,
        })
    }

    /// Undo the divide.
    pub fn to_homogeneous(&self) -> DVec4 {
        DVec4::new(self.x * self.w, self.y * self.w, self.z * self.w, self.w)
    }

    /// True if the point lies in the canonical view volume.
    pub fn is_inside_ndc(&self) -> bool {
        self.x.abs() <= 1.0 && self.y.abs() <= 1.0 && self.z.abs() <= 1.0
    }
}

/// Normalized sub-rectangle of the output surface a camera draws into.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub left: f64,
    pub right: f64,
    pub bottom: f64,
    pub top: f64,
}

impl Viewport {
    /// Validated viewport; bounds must lie in [0, 1] with left < right, bottom < top.
    pub fn new(left: f64, right: f64, bottom: f64, top: f64) -> Result<Self> {
        let in_unit = |v: f64| (0.0..=1.0).contains(&v);
        if !(in_unit(left) && in_unit(right) && in_unit(bottom) && in_unit(top)) {
            return Err(Error::InvalidParameter(format!(
                "viewport bounds must lie in [0, 1]: ({}, {}, {}, {})",
                left, right, bottom, top
            )));
        }
        if left >= right || bottom >= top {
            return Err(Error::InvalidParameter(format!(
                "empty viewport: ({}, {}, {}, {})",
                left, right, bottom, top
            )));
        }
        Ok(Self { left, right, bottom, top })
    }

    /// Map NDC onto a `width` x `height` surface, returning logical pixels
    /// (centre origin, y up).
    pub fn ndc_to_pixel(&self, ndc_x: f64, ndc_y: f64, width: u32, height: u32) -> Pixel {
        let width = width as f64;
        let height = height as f64;
        let sx = (self.left + (ndc_x + 1.0) * 0.5 * (self.right - self.left)) * width;
        let sy = (self.bottom + (ndc_y + 1.0) * 0.5 * (self.top - self.bottom)) * height;
        Pixel::new(sx - width * 0.5, sy - height * 0.5)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self { left: 0.0, right: 1.0, bottom: 0.0, top: 1.0 }
    }
}

/// Orthonormal camera basis derived from a look-at pose.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraBasis {
    /// Camera x axis (right)
    pub u: DVec3,
    /// Camera y axis (up)
    pub v: DVec3,
    /// Camera z axis, pointing from the target back to the eye
    pub n: DVec3,
}

impl CameraBasis {
    /// `n = normalize(position - target)`, `u = normalize(up x n)`, `v = n x u`.
    pub fn look_at(position: DVec3, target: DVec3, up: DVec3) -> Result<Self> {
        let n = math::normalize(position - target, "position - target")?;
        let u = math::normalize(up.cross(n), "up x n (up parallel to view direction)")?;
        let v = n.cross(u);
        Ok(Self { u, v, n })
    }

    /// World → camera matrix for an eye at `position`.
    ///
    /// Rows are `[u | d.x]`, `[v | d.y]`, `[n | d.z]`, `[0 0 0 1]` with
    /// `d = -(position·u, position·v, position·n)`.
    pub fn view_matrix(&self, position: DVec3) -> DMat4 {
        let d = -DVec3::new(position.dot(self.u), position.dot(self.v), position.dot(self.n));
        math::matrix_from_rows([
            [self.u.x, self.u.y, self.u.z, d.x],
            [self.v.x, self.v.y, self.v.z, d.y],
            [self.n.x, self.n.y, self.n.z, d.z],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }
}

/// Capability set every camera provides to shapes and renderers.
///
/// `image_space_coordinates` is optional: the default reports
/// `Error::Unsupported`, so callers can branch on the capability.
pub trait Camera: Send + Sync {
    /// Recompute view, projection, and culling planes from the current pose.
    fn update(&mut self) -> Result<()>;

    /// False after a setter changed pose or frustum and before `update()`.
    fn is_up_to_date(&self) -> bool;

    /// World → camera matrix.
    fn view(&self) -> Result<DMat4>;

    /// Camera → clip matrix.
    fn projection(&self) -> Result<DMat4>;

    /// Culling planes of the current view volume.
    fn frustum(&self) -> Result<&Frustum>;

    /// Width and height of the output in pixels.
    fn resolution(&self) -> (u32, u32);

    /// `projection · view`.
    fn view_projection(&self) -> Result<DMat4> {
        Ok(self.projection()? * self.view()?)
    }

    /// World point expressed in the camera basis.
    fn camera_space_coordinates(&self, world: DVec3) -> Result<DVec3> {
        Ok(self.view()?.transform_point3(world))
    }

    /// World point → clipping space, perspective divide included.
    fn clipping_space_coordinates(&self, world: DVec3) -> Result<CVPoint> {
        let clip = self.view_projection()? * math::to_homogeneous(world);
        CVPoint::from_homogeneous(clip)
    }

    /// Clipping space → world (inverse of `clipping_space_coordinates`).
    fn unproject(&self, point: &CVPoint) -> Result<DVec3> {
        let world = self.view_projection()?.inverse() * point.to_homogeneous();
        if world.w.abs() <= EPSILON {
            return Err(Error::DegenerateProjection { w: world.w });
        }
        Ok(world.truncate() / world.w)
    }

    /// Move the eye to `position` looking at `target`. The camera is stale
    /// until the next `update()`.
    fn look_at(&mut self, _position: DVec3, _target: DVec3) -> Result<()> {
        Err(Error::Unsupported("this camera has a fixed pose".to_string()))
    }

    /// World point → logical pixel.
    fn image_space_coordinates(&self, _world: DVec3) -> Result<Pixel> {
        Err(Error::Unsupported(
            "image space coordinates are not provided by this camera".to_string(),
        ))
    }
}

#[cfg(test)]
#[path = "camera_tests.rs"]
mod tests;
