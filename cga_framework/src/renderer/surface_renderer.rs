/// SurfaceRenderer - `Renderer` over a `FrameBuffer` and a presentation surface.
///
/// Logical pixels are moved to surface coordinates by adding
/// `(width >> 1, height >> 1)` with y flipped. `show()` presents the back
/// buffer and then clears it, so every frame starts from the background.

use crate::error::Result;
use super::color::Color;
use super::frame_buffer::FrameBuffer;
use super::pixel::Pixel;
use super::renderer::Renderer;
use super::surface::PresentationSurface;

const SOURCE: &str = "cga::SurfaceRenderer";

/// Software renderer presenting through a `PresentationSurface`.
pub struct SurfaceRenderer<S: PresentationSurface> {
    surface: S,
    buffer: FrameBuffer,
    foreground: Color,
    clear_on_show: bool,
    frames_shown: u64,
}

impl<S: PresentationSurface> SurfaceRenderer<S> {
    /// Renderer sized after `surface`, cleared to `background`.
    pub fn new(surface: S, background: Color) -> Result<Self> {
        let (width, height) = surface.size();
        let buffer = FrameBuffer::new(width, height, background)
            .map_err(|e| crate::cga_err!(SOURCE, e))?;
        crate::cga_debug!(SOURCE, "created {}x{} renderer", width, height);
        Ok(Self {
            surface,
            buffer,
            foreground: Color::BLACK,
            clear_on_show: true,
            frames_shown: 0,
        })
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn frame_buffer(&self) -> &FrameBuffer {
        &self.buffer
    }

    pub fn foreground(&self) -> Color {
        self.foreground
    }

    /// Colour used by `put_pixel`.
    pub fn set_foreground(&mut self, color: Color) {
        self.foreground = color;
    }

    pub fn set_background(&mut self, color: Color) {
        self.buffer.set_background(color);
    }

    /// When false, `show()` leaves the back buffer untouched.
    pub fn set_clear_on_show(&mut self, clear_on_show: bool) {
        self.clear_on_show = clear_on_show;
    }

    pub fn frames_shown(&self) -> u64 {
        self.frames_shown
    }

    /// Logical pixel → surface coordinates.
    ///
    /// `None` for non-finite pixels and for coordinates too large to
    /// address; both can never land on the surface.
    pub fn to_surface(&self, pixel: Pixel) -> Option<(i64, i64)> {
        if !pixel.is_finite() {
            return None;
        }
        let (x, y) = pixel.rounded();
        let offset_x = (self.buffer.width() >> 1) as i64;
        let offset_y = (self.buffer.height() >> 1) as i64;
        Some((x.checked_add(offset_x)?, offset_y.checked_sub(y)?))
    }
}

impl<S: PresentationSurface> Renderer for SurfaceRenderer<S> {
    fn put_pixel(&mut self, pixel: Pixel) {
        self.put_pixel_with_color(pixel, self.foreground);
    }

    fn put_pixel_with_color(&mut self, pixel: Pixel, color: Color) {
        match self.to_surface(pixel) {
            Some((x, y)) => {
                self.buffer.fill_pixel(x, y, color);
            }
            None => crate::cga_trace!(SOURCE, "dropped unaddressable pixel ({}, {})", pixel.x, pixel.y),
        }
    }

    fn show(&mut self) -> Result<()> {
        self.surface
            .present(self.buffer.pixels())
            .map_err(|e| crate::cga_err!(SOURCE, e))?;
        if self.clear_on_show {
            self.buffer.clear();
        }
        self.frames_shown += 1;
        Ok(())
    }

    fn width(&self) -> u32 {
        self.buffer.width()
    }

    fn height(&self) -> u32 {
        self.buffer.height()
    }
}

#[cfg(test)]
#[path = "surface_renderer_tests.rs"]
mod tests;
