/// Single projected point, culled against the camera frustum.

use glam::{DMat4, DVec3};
use crate::camera::Camera;
use crate::error::Result;
use crate::renderer::{Color, Renderer};

const SOURCE: &str = "cga::Point3d";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point3d {
    position: DVec3,
    color: Option<Color>,
}

impl Point3d {
    pub fn new(position: DVec3) -> Self {
        Self { position, color: None }
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn position(&self) -> DVec3 {
        self.position
    }
}

impl super::Shape for Point3d {
    fn render(&self, transform: &DMat4, camera: &dyn Camera, renderer: &mut dyn Renderer) -> Result<()> {
        let world = transform.transform_point3(self.position);
        if !camera.frustum()?.contains_point(world) {
            return Ok(());
        }
        let pixel = match camera.image_space_coordinates(world) {
            Ok(pixel) => pixel,
            Err(e) if e.is_recoverable() => {
                crate::cga_trace!(SOURCE, "point {} skipped: {}", world, e);
                return Ok(());
            }
            Err(e) => return Err(e),
        };
        match self.color {
            Some(color) => renderer.put_pixel_with_color(pixel, color),
            None => renderer.put_pixel(pixel),
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "point_tests.rs"]
mod tests;
