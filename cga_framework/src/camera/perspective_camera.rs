/// PerspectiveCamera - look-at camera with a perspective projection.
///
/// The view matrix is built from position, target and up vector; the
/// projection is an OpenGL-style right-handed perspective derived from the
/// vertical field of view, the aspect ratio and the near/far distances.

use glam::{DMat3, DMat4, DQuat, DVec3};
use crate::error::{Error, Result};
use crate::renderer::Pixel;
use super::camera::{Camera, CameraBasis, Viewport};
use super::frustum::Frustum;

const SOURCE: &str = "cga::PerspectiveCamera";

/// Default vertical field of view in degrees
pub const DEFAULT_FIELD_OF_VIEW_DEGREES: f64 = 75.0;
/// Default distance to the near plane
pub const DEFAULT_FRUSTUM_NEAR: f64 = 1.0;
/// Default distance to the far plane
pub const DEFAULT_FRUSTUM_FAR: f64 = 1000.0;

/// Camera with perspective projection.
#[derive(Debug, Clone)]
pub struct PerspectiveCamera {
    position: DVec3,
    /// The point the camera looks at
    target: DVec3,
    up: DVec3,
    /// Vertical field of view in radians
    field_of_view: f64,
    aspect_ratio: f64,
    width: u32,
    height: u32,
    frustum_near: f64,
    frustum_far: f64,
    viewport: Viewport,

    // ===== derived in update() =====
    frustum_left: f64,
    frustum_right: f64,
    frustum_bottom: f64,
    frustum_top: f64,
    basis: CameraBasis,
    rotation: DQuat,
    view: DMat4,
    projection: DMat4,
    frustum: Frustum,
    dirty: bool,
}

impl PerspectiveCamera {
    /// Camera at the origin looking down -z with a 75° field of view.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Self::with_pose(
            DVec3::ZERO,
            DVec3::NEG_Z,
            DVec3::Y,
            DEFAULT_FIELD_OF_VIEW_DEGREES.to_radians(),
            width,
            height,
        )
    }

    /// Camera at `position` looking at `target`.
    ///
    /// # Arguments
    ///
    /// * `position` - Eye position in world space
    /// * `target` - Point the camera looks at
    /// * `up` - Approximate up direction (must not be parallel to the view direction)
    /// * `fov` - Vertical field of view in radians, in (0, π)
    /// * `width`, `height` - Output resolution in pixels
    pub fn with_pose(
        position: DVec3,
        target: DVec3,
        up: DVec3,
        fov: f64,
        width: u32,
        height: u32,
    ) -> Result<Self> {
        validate_resolution(width, height)?;
        validate_field_of_view(fov)?;

        let mut camera = Self {
            position,
            target,
            up,
            field_of_view: fov,
            aspect_ratio: width as f64 / height as f64,
            width,
            height,
            frustum_near: DEFAULT_FRUSTUM_NEAR,
            frustum_far: DEFAULT_FRUSTUM_FAR,
            viewport: Viewport::default(),
            frustum_left: 0.0,
            frustum_right: 0.0,
            frustum_bottom: 0.0,
            frustum_top: 0.0,
            basis: CameraBasis { u: DVec3::X, v: DVec3::Y, n: DVec3::Z },
            rotation: DQuat::IDENTITY,
            view: DMat4::IDENTITY,
            projection: DMat4::IDENTITY,
            frustum: Frustum::default(),
            dirty: true,
        };
        camera.update()?;
        Ok(camera)
    }

    // ===== GETTERS =====

    pub fn position(&self) -> DVec3 {
        self.position
    }

    pub fn target(&self) -> DVec3 {
        self.target
    }

    pub fn up(&self) -> DVec3 {
        self.up
    }

    pub fn field_of_view(&self) -> f64 {
        self.field_of_view
    }

    pub fn aspect_ratio(&self) -> f64 {
        self.aspect_ratio
    }

    pub fn frustum_near(&self) -> f64 {
        self.frustum_near
    }

    pub fn frustum_far(&self) -> f64 {
        self.frustum_far
    }

    /// Near-plane extents `(left, right, bottom, top)` of the last update.
    pub fn frustum_extents(&self) -> (f64, f64, f64, f64) {
        (self.frustum_left, self.frustum_right, self.frustum_bottom, self.frustum_top)
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Camera basis of the last update.
    pub fn basis(&self) -> &CameraBasis {
        &self.basis
    }

    /// Orientation of the camera axes in world space.
    pub fn orientation(&self) -> DQuat {
        self.rotation
    }

    // ===== SETTERS - call update() afterwards =====

    pub fn set_position(&mut self, position: DVec3) {
        self.position = position;
        self.dirty = true;
    }

    pub fn set_target(&mut self, target: DVec3) {
        self.target = target;
        self.dirty = true;
    }

    pub fn set_up(&mut self, up: DVec3) {
        self.up = up;
        self.dirty = true;
    }

    pub fn set_field_of_view(&mut self, fov: f64) -> Result<()> {
        validate_field_of_view(fov)?;
        self.field_of_view = fov;
        self.dirty = true;
        Ok(())
    }

    /// Near and far distances; `0 < near < far`.
    pub fn set_frustum_distances(&mut self, near: f64, far: f64) -> Result<()> {
        if !(near > 0.0 && far > near) {
            return Err(Error::InvalidParameter(format!(
                "frustum distances must satisfy 0 < near < far (near = {}, far = {})",
                near, far
            )));
        }
        self.frustum_near = near;
        self.frustum_far = far;
        self.dirty = true;
        Ok(())
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.dirty = true;
    }

    /// Change the output resolution (and with it the aspect ratio).
    pub fn resize(&mut self, width: u32, height: u32) -> Result<()> {
        validate_resolution(width, height)?;
        self.width = width;
        self.height = height;
        self.aspect_ratio = width as f64 / height as f64;
        self.dirty = true;
        Ok(())
    }

    fn ensure_up_to_date(&self) -> Result<()> {
        if self.dirty {
            return Err(Error::CameraNotUpdated);
        }
        Ok(())
    }
}

impl Camera for PerspectiveCamera {
    fn look_at(&mut self, position: DVec3, target: DVec3) -> Result<()> {
        self.set_position(position);
        self.set_target(target);
        Ok(())
    }

    fn update(&mut self) -> Result<()> {
        // First transformation: world → camera coordinates
        let basis = CameraBasis::look_at(self.position, self.target, self.up)
            .map_err(|e| crate::cga_err!(SOURCE, e))?;
        self.view = basis.view_matrix(self.position);
        self.rotation = DQuat::from_mat3(&DMat3::from_cols(basis.u, basis.v, basis.n));
        self.basis = basis;

        // Second transformation: camera → clipping coordinates
        self.frustum_top = self.frustum_near * (self.field_of_view * 0.5).tan();
        self.frustum_bottom = -self.frustum_top;
        self.frustum_right = self.frustum_top * self.aspect_ratio;
        self.frustum_left = -self.frustum_right;
        self.projection = DMat4::perspective_rh_gl(
            self.field_of_view,
            self.aspect_ratio,
            self.frustum_near,
            self.frustum_far,
        );

        self.frustum = Frustum::from_view_projection(&(self.projection * self.view));
        self.dirty = false;

        crate::cga_debug!(
            SOURCE,
            "updated: position {} target {} fov {:.1}° aspect {:.3}",
            self.position,
            self.target,
            self.field_of_view.to_degrees(),
            self.aspect_ratio
        );
        Ok(())
    }

    fn is_up_to_date(&self) -> bool {
        !self.dirty
    }

    fn view(&self) -> Result<DMat4> {
        self.ensure_up_to_date()?;
        Ok(self.view)
    }

    fn projection(&self) -> Result<DMat4> {
        self.ensure_up_to_date()?;
        Ok(self.projection)
    }

    fn frustum(&self) -> Result<&Frustum> {
        self.ensure_up_to_date()?;
        Ok(&self.frustum)
    }

    fn resolution(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn image_space_coordinates(&self, world: DVec3) -> Result<Pixel> {
        let cv = self.clipping_space_coordinates(world)?;
        Ok(self.viewport.ndc_to_pixel(cv.x, cv.y, self.width, self.height))
    }
}

pub(crate) fn validate_resolution(width: u32, height: u32) -> Result<()> {
    if width == 0 || height == 0 {
        return Err(Error::InvalidParameter(format!(
            "resolution must be non-zero ({}x{})",
            width, height
        )));
    }
    Ok(())
}

fn validate_field_of_view(fov: f64) -> Result<()> {
    if !(fov > 0.0 && fov < std::f64::consts::PI) {
        return Err(Error::InvalidParameter(format!(
            "field of view must lie in (0, π) radians, got {}",
            fov
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "perspective_camera_tests.rs"]
mod tests;
