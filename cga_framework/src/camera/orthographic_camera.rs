/// OrthographicCamera - look-at camera with a parallel projection.
///
/// Shares the view construction with `PerspectiveCamera`; the projection
/// maps a box of `view_height` world units (times the aspect ratio) onto
/// the canonical view volume.

use glam::{DMat4, DVec3};
use crate::error::{Error, Result};
use crate::renderer::Pixel;
use super::camera::{Camera, CameraBasis, Viewport};
use super::frustum::Frustum;
use super::perspective_camera::validate_resolution;

const SOURCE: &str = "cga::OrthographicCamera";

/// Camera with orthographic projection.
#[derive(Debug, Clone)]
pub struct OrthographicCamera {
    position: DVec3,
    target: DVec3,
    up: DVec3,
    /// Visible height in world units
    view_height: f64,
    width: u32,
    height: u32,
    frustum_near: f64,
    frustum_far: f64,
    viewport: Viewport,
    basis: CameraBasis,
    view: DMat4,
    projection: DMat4,
    frustum: Frustum,
    dirty: bool,
}

impl OrthographicCamera {
    /// Camera at `position` looking at `target`, showing `view_height` world units vertically.
    pub fn with_pose(
        position: DVec3,
        target: DVec3,
        up: DVec3,
        view_height: f64,
        width: u32,
        height: u32,
    ) -> Result<Self> {
        validate_resolution(width, height)?;
        if !(view_height > 0.0) {
            return Err(Error::InvalidParameter(format!(
                "view height must be positive, got {}",
                view_height
            )));
        }

        let mut camera = Self {
            position,
            target,
            up,
            view_height,
            width,
            height,
            frustum_near: 0.1,
            frustum_far: 1000.0,
            viewport: Viewport::default(),
            basis: CameraBasis { u: DVec3::X, v: DVec3::Y, n: DVec3::Z },
            view: DMat4::IDENTITY,
            projection: DMat4::IDENTITY,
            frustum: Frustum::default(),
            dirty: true,
        };
        camera.update()?;
        Ok(camera)
    }

    pub fn view_height(&self) -> f64 {
        self.view_height
    }

    pub fn basis(&self) -> &CameraBasis {
        &self.basis
    }

    pub fn set_position(&mut self, position: DVec3) {
        self.position = position;
        self.dirty = true;
    }

    pub fn set_target(&mut self, target: DVec3) {
        self.target = target;
        self.dirty = true;
    }

    pub fn set_view_height(&mut self, view_height: f64) -> Result<()> {
        if !(view_height > 0.0) {
            return Err(Error::InvalidParameter(format!(
                "view height must be positive, got {}",
                view_height
            )));
        }
        self.view_height = view_height;
        self.dirty = true;
        Ok(())
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.dirty = true;
    }

    fn ensure_up_to_date(&self) -> Result<()> {
        if self.dirty {
            return Err(Error::CameraNotUpdated);
        }
        Ok(())
    }
}

impl Camera for OrthographicCamera {
    fn look_at(&mut self, position: DVec3, target: DVec3) -> Result<()> {
        self.set_position(position);
        self.set_target(target);
        Ok(())
    }

    fn update(&mut self) -> Result<()> {
        let basis = CameraBasis::look_at(self.position, self.target, self.up)
            .map_err(|e| crate::cga_err!(SOURCE, e))?;
        self.view = basis.view_matrix(self.position);
        self.basis = basis;

        let half_height = self.view_height * 0.5;
        let half_width = half_height * self.width as f64 / self.height as f64;
        self.projection = DMat4::orthographic_rh_gl(
            -half_width,
            half_width,
            -half_height,
            half_height,
            self.frustum_near,
            self.frustum_far,
        );
        self.frustum = Frustum::from_view_projection(&(self.projection * self.view));
        self.dirty = false;

        crate::cga_debug!(SOURCE, "updated: position {} view height {}", self.position, self.view_height);
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

#[cfg(test)]
#[path = "orthographic_camera_tests.rs"]
mod tests;
