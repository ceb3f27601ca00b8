/// Renderer trait - the pixel sink shapes draw into.
///
/// Coordinates passed to a renderer are logical pixels: origin at the centre
/// of the output, x to the right, y up. Each implementation maps them onto
/// its own surface.

use crate::error::Result;
use super::color::Color;
use super::pixel::Pixel;

/// Pixel sink for shapes.
pub trait Renderer {
    /// Plot one pixel in the renderer's current foreground colour.
    fn put_pixel(&mut self, pixel: Pixel);

    /// Plot one pixel in the given colour.
    fn put_pixel_with_color(&mut self, pixel: Pixel, color: Color);

    /// Hand the finished frame to the output.
    fn show(&mut self) -> Result<()>;

    /// Output width in pixels.
    fn width(&self) -> u32;

    /// Output height in pixels.
    fn height(&self) -> u32;
}
