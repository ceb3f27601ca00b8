/// Presentation surface - the boundary to the windowing system.
///
/// A surface shows finished frames and reports user input. Backends live in
/// their own crates; `HeadlessSurface` keeps frames in memory for offscreen
/// rendering and tests.

use crate::error::{Error, Result};

/// Keys the framework distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Escape,
    Enter,
    Space,
    Left,
    Right,
    Up,
    Down,
    /// Letter or digit, upper case for letters
    Char(char),
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// Input reported by a surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    KeyPressed(Key),
    KeyReleased(Key),
    /// Cursor position in surface coordinates
    MouseMoved { x: f64, y: f64 },
    MouseButton { button: MouseButton, pressed: bool },
    MouseWheel { delta: f64 },
    CloseRequested,
}

/// Callback-style consumer of input events.
pub trait InputListener: Send {
    fn on_event(&mut self, event: &InputEvent);
}

/// Output target for finished frames.
pub trait PresentationSurface {
    /// Width and height in pixels.
    fn size(&self) -> (u32, u32);

    /// Show a frame of `width * height` packed ARGB pixels, row-major.
    fn present(&mut self, pixels: &[u32]) -> Result<()>;

    /// False once the surface has been closed.
    fn is_open(&self) -> bool;

    /// Input gathered since the previous call.
    fn poll_events(&mut self) -> Vec<InputEvent>;
}

/// Check a frame against a surface size.
pub fn check_frame_size(pixels: &[u32], width: u32, height: u32) -> Result<()> {
    let expected = width as usize * height as usize;
    if pixels.len() != expected {
        return Err(Error::InvalidParameter(format!(
            "frame has {} pixels, surface {}x{} needs {}",
            pixels.len(),
            width,
            height,
            expected
        )));
    }
    Ok(())
}

// ============================================================================
// HeadlessSurface
// ============================================================================

/// In-memory surface keeping the last presented frame.
#[derive(Debug, Clone)]
pub struct HeadlessSurface {
    width: u32,
    height: u32,
    last_frame: Vec<u32>,
    presented_frames: u64,
    open: bool,
    pending: Vec<InputEvent>,
}

impl HeadlessSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            last_frame: Vec::new(),
            presented_frames: 0,
            open: true,
            pending: Vec::new(),
        }
    }

    /// Last frame handed to `present`, empty before the first one.
    pub fn last_frame(&self) -> &[u32] {
        &self.last_frame
    }

    pub fn presented_frames(&self) -> u64 {
        self.presented_frames
    }

    /// Queue an event for the next `poll_events`.
    pub fn push_event(&mut self, event: InputEvent) {
        self.pending.push(event);
    }

    pub fn close(&mut self) {
        self.open = false;
    }
}

impl PresentationSurface for HeadlessSurface {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn present(&mut self, pixels: &[u32]) -> Result<()> {
        if !self.open {
            return Err(Error::BackendError("surface is closed".to_string()));
        }
        check_frame_size(pixels, self.width, self.height)?;
        self.last_frame.clear();
        self.last_frame.extend_from_slice(pixels);
        self.presented_frames += 1;
        Ok(())
    }

    fn is_open(&self) -> bool {
        self.open
    }

    fn poll_events(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.pending)
    }
}

#[cfg(test)]
#[path = "surface_tests.rs"]
mod tests;
