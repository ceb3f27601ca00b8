/// FrameBuffer - CPU back buffer in packed ARGB.
///
/// Addressed in surface coordinates: (0, 0) is the top-left pixel, rows
/// grow downwards. Writes outside the buffer are clipped silently.

use crate::error::{Error, Result};
use super::color::Color;

/// `width x height` back buffer of `0xAARRGGBB` pixels.
#[derive(Debug, Clone)]
pub struct FrameBuffer {
    width: u32,
    height: u32,
    background: Color,
    pixels: Vec<u32>,
}

impl FrameBuffer {
    /// Buffer filled with `background`. Both dimensions must be non-zero.
    pub fn new(width: u32, height: u32, background: Color) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidParameter(format!(
                "frame buffer size must be non-zero, got {}x{}",
                width, height
            )));
        }
        Ok(Self {
            width,
            height,
            background,
            pixels: vec![background.to_argb(); width as usize * height as usize],
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn background(&self) -> Color {
        self.background
    }

    /// Change the background; takes effect on the next `clear()`.
    pub fn set_background(&mut self, background: Color) {
        self.background = background;
    }

    /// Raw pixels, row-major.
    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    fn index(&self, x: i64, y: i64) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    /// Write one pixel. Returns false if the position was clipped.
    pub fn fill_pixel(&mut self, x: i64, y: i64, color: Color) -> bool {
        match self.index(x, y) {
            Some(index) => {
                self.pixels[index] = color.to_argb();
                true
            }
            None => false,
        }
    }

    /// Colour at a position, `None` outside the buffer.
    pub fn get(&self, x: i64, y: i64) -> Option<Color> {
        self.index(x, y).map(|index| Color::from_argb(self.pixels[index]))
    }

    /// Reset every pixel to the background colour.
    pub fn clear(&mut self) {
        self.pixels.fill(self.background.to_argb());
    }

    /// True if every pixel holds the background colour.
    pub fn is_clear(&self) -> bool {
        let background = self.background.to_argb();
        self.pixels.iter().all(|&p| p == background)
    }

    /// Number of pixels differing from the background.
    pub fn count_drawn(&self) -> usize {
        let background = self.background.to_argb();
        self.pixels.iter().filter(|&&p| p != background).count()
    }
}

#[cfg(test)]
#[path = "frame_buffer_tests.rs"]
mod tests;
