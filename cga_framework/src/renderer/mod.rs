/// Renderer module - pixel sinks, frame buffer and presentation surfaces

// Module declarations
mod color;
mod frame_buffer;
mod pixel;
mod renderer;
mod surface;
mod surface_renderer;

#[cfg(test)]
pub(crate) mod mock_renderer;

pub use color::Color;
pub use frame_buffer::FrameBuffer;
pub use pixel::Pixel;
pub use renderer::Renderer;
pub use surface::{
    check_frame_size,
    HeadlessSurface,
    InputEvent,
    InputListener,
    Key,
    MouseButton,
    PresentationSurface,
};
pub use surface_renderer::SurfaceRenderer;
