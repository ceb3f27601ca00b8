/// Mock Renderer for unit tests (no surface required)
///
/// Records every plotted pixel and `show()` call so shapes and visitors can
/// be checked without a frame buffer.

use crate::error::Result;
use super::color::Color;
use super::pixel::Pixel;
use super::renderer::Renderer;

#[derive(Debug, Default)]
pub struct MockRenderer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<(Pixel, Color)>,
    pub shows: u32,
}

impl MockRenderer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Default::default()
        }
    }

    /// Plotted positions rounded to the integer grid.
    pub fn positions(&self) -> Vec<(i64, i64)> {
        self.pixels.iter().map(|(p, _)| p.rounded()).collect()
    }
}

impl Renderer for MockRenderer {
    fn put_pixel(&mut self, pixel: Pixel) {
        self.pixels.push((pixel, Color::BLACK));
    }

    fn put_pixel_with_color(&mut self, pixel: Pixel, color: Color) {
        self.pixels.push((pixel, color));
    }

    fn show(&mut self) -> Result<()> {
        self.shows += 1;
        Ok(())
    }

    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }
}
