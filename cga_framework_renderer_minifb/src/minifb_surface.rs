/// MinifbSurface - minifb window implementation of PresentationSurface

use cga_framework::cga::{Error, Result};
use cga_framework::cga::render::{check_frame_size, InputEvent, InputListener, PresentationSurface};
use cga_framework::{cga_debug, cga_err, cga_info};
use minifb::{Key, Window, WindowOptions};

use crate::input::{InputSnapshot, InputTracker};

const SOURCE: &str = "cga::minifb";

/// Window showing framework frames.
///
/// Pressing Escape closes the surface. Input is read once per
/// `poll_events()` and also handed to every registered listener.
pub struct MinifbSurface {
    window: Window,
    width: u32,
    height: u32,
    tracker: InputTracker,
    listeners: Vec<Box<dyn InputListener>>,
}

impl MinifbSurface {
    /// Open a `width x height` window titled `title`.
    pub fn new(width: u32, height: u32, title: &str) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(cga_err!(
                SOURCE,
                Error::InvalidParameter(format!("window size must be non-zero, got {}x{}", width, height))
            ));
        }

        let window = Window::new(
            title,
            width as usize,
            height as usize,
            WindowOptions {
                scale_mode: minifb::ScaleMode::AspectRatioStretch,
                ..WindowOptions::default()
            },
        )
        .map_err(|e| cga_err!(SOURCE, Error::InitializationFailed(format!("cannot open window: {}", e))))?;

        cga_info!(SOURCE, "window '{}' opened ({}x{})", title, width, height);

        Ok(Self {
            window,
            width,
            height,
            tracker: InputTracker::new(),
            listeners: Vec::new(),
        })
    }

    /// Listener called with every event `poll_events()` reports.
    pub fn register_input_listener(&mut self, listener: Box<dyn InputListener>) {
        self.listeners.push(listener);
        cga_debug!(SOURCE, "{} input listeners registered", self.listeners.len());
    }

    pub fn window(&self) -> &Window {
        &self.window
    }
}

impl PresentationSurface for MinifbSurface {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn present(&mut self, pixels: &[u32]) -> Result<()> {
        check_frame_size(pixels, self.width, self.height)?;
        self.window
            .update_with_buffer(pixels, self.width as usize, self.height as usize)
            .map_err(|e| cga_err!(SOURCE, Error::BackendError(format!("cannot present frame: {}", e))))
    }

    fn is_open(&self) -> bool {
        self.window.is_open() && !self.window.is_key_down(Key::Escape)
    }

    fn poll_events(&mut self) -> Vec<InputEvent> {
        let snapshot = InputSnapshot::capture(&self.window);
        let events = self.tracker.events(&snapshot);
        for event in &events {
            for listener in self.listeners.iter_mut() {
                listener.on_event(event);
            }
        }
        events
    }
}
