/// Line primitives and the Bresenham rasterizer.
///
/// Segments are clipped to the renderer's logical area (plus a one pixel
/// margin) before rasterization, so far-away endpoints cost nothing.

use glam::{DMat4, DVec2, DVec3};
use crate::camera::Camera;
use crate::error::Result;
use crate::renderer::{Color, Pixel, Renderer};

const SOURCE: &str = "cga::Line";

/// Clip `a → b` to the rectangle `[min, max]` (Liang-Barsky).
pub fn clip_segment(a: DVec2, b: DVec2, min: DVec2, max: DVec2) -> Option<(DVec2, DVec2)> {
    if !(a.is_finite() && b.is_finite()) {
        return None;
    }
    let d = b - a;
    let mut t0: f64 = 0.0;
    let mut t1: f64 = 1.0;
    let edges = [
        (-d.x, a.x - min.x),
        (d.x, max.x - a.x),
        (-d.y, a.y - min.y),
        (d.y, max.y - a.y),
    ];
    for (p, q) in edges {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let r = q / p;
        if p < 0.0 {
            if r > t1 {
                return None;
            }
            t0 = t0.max(r);
        } else {
            if r < t0 {
                return None;
            }
            t1 = t1.min(r);
        }
    }
    Some((a + d * t0, a + d * t1))
}

/// Integer grid positions from `(x0, y0)` to `(x1, y1)`, both ends included.
pub fn bresenham(x0: i64, y0: i64, x1: i64, y1: i64, mut plot: impl FnMut(i64, i64)) {
    let (mut x, mut y) = (x0, y0);
    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        plot(x, y);
        if x == x1 && y == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
}

/// Rasterize a segment given in logical pixels.
pub fn draw_segment(a: Pixel, b: Pixel, color: Option<Color>, renderer: &mut dyn Renderer) {
    let half = DVec2::new(
        (renderer.width() / 2) as f64 + 1.0,
        (renderer.height() / 2) as f64 + 1.0,
    );
    let Some((a, b)) = clip_segment(DVec2::new(a.x, a.y), DVec2::new(b.x, b.y), -half, half) else {
        return;
    };
    let (x0, y0) = Pixel::from(a).rounded();
    let (x1, y1) = Pixel::from(b).rounded();
    bresenham(x0, y0, x1, y1, |x, y| {
        let pixel = Pixel::new(x as f64, y as f64);
        match color {
            Some(color) => renderer.put_pixel_with_color(pixel, color),
            None => renderer.put_pixel(pixel),
        }
    });
}

// ============================================================================
// Line2d
// ============================================================================

/// Segment in logical pixel space; the camera is not involved.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line2d {
    start: DVec2,
    end: DVec2,
    color: Option<Color>,
}

impl Line2d {
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self {
            start: DVec2::new(x1, y1),
            end: DVec2::new(x2, y2),
            color: None,
        }
    }

    /// Draw in `color` instead of the renderer's foreground.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn start(&self) -> DVec2 {
        self.start
    }

    pub fn end(&self) -> DVec2 {
        self.end
    }

    fn transformed(&self, transform: &DMat4, p: DVec2) -> Pixel {
        let q = transform.transform_point3(p.extend(0.0));
        Pixel::new(q.x, q.y)
    }
}

impl super::Shape for Line2d {
    fn render(&self, transform: &DMat4, _camera: &dyn Camera, renderer: &mut dyn Renderer) -> Result<()> {
        let a = self.transformed(transform, self.start);
        let b = self.transformed(transform, self.end);
        draw_segment(a, b, self.color, renderer);
        Ok(())
    }
}

// ============================================================================
// Line3d
// ============================================================================

/// Segment in object space, projected through the camera.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line3d {
    start: DVec3,
    end: DVec3,
    color: Option<Color>,
}

impl Line3d {
    pub fn new(start: DVec3, end: DVec3) -> Self {
        Self { start, end, color: None }
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn start(&self) -> DVec3 {
        self.start
    }

    pub fn end(&self) -> DVec3 {
        self.end
    }
}

impl super::Shape for Line3d {
    fn render(&self, transform: &DMat4, camera: &dyn Camera, renderer: &mut dyn Renderer) -> Result<()> {
        let a = camera.image_space_coordinates(transform.transform_point3(self.start));
        let b = camera.image_space_coordinates(transform.transform_point3(self.end));
        match (a, b) {
            (Ok(a), Ok(b)) => {
                draw_segment(a, b, self.color, renderer);
                Ok(())
            }
            (Err(e), _) | (_, Err(e)) if e.is_recoverable() => {
                crate::cga_trace!(SOURCE, "segment {} → {} skipped: {}", self.start, self.end, e);
                Ok(())
            }
            (Err(e), _) | (_, Err(e)) => Err(e),
        }
    }
}

#[cfg(test)]
#[path = "line_tests.rs"]
mod tests;
