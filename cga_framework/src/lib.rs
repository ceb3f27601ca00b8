/*!
# CGA Framework

Core types for a small teaching-oriented 3D software renderer.

Applications build a scene graph of shapes under transformations, a camera
projects them, and a pixel renderer draws the result into a back buffer
that a presentation surface shows. Windowing backends (minifb, ...) live in
their own crates and implement `PresentationSurface`.

## Architecture

- **Camera**: capability trait plus perspective and orthographic cameras
- **SceneGraph / Node**: lockable geometry lists, shared transformations, children
- **Visitor**: animation, transformation and render passes over the graph
- **Shape**: drawable leaves (`Line2d`, `Line3d`, `Point3d`)
- **Renderer**: pixel sink; `SurfaceRenderer` draws into a `FrameBuffer`
- **Framework**: frame loop driving an `Application`
*/

// Internal modules
mod error;
mod engine;
mod math;
pub mod log;
pub mod animation;
pub mod camera;
pub mod renderer;
pub mod scene;
pub mod shape;
mod framework;

// Main cga namespace module
pub mod cga {
    // Error types
    pub use crate::error::{Error, Result};

    // Logging hub
    pub use crate::engine::Engine;

    // Application entry
    pub use crate::framework::{Application, Framework, FrameworkConfig};

    // Logging sub-module (types only; the cga_* macros live at the crate root)
    pub mod log {
        pub use crate::log::{format_entry, Logger, LogEntry, LogSeverity, DefaultLogger};
    }

    // Math helpers on top of glam
    pub mod math {
        pub use crate::math::*;
    }

    pub mod animation {
        pub use crate::animation::*;
    }

    pub mod camera {
        pub use crate::camera::*;
    }

    pub mod render {
        pub use crate::renderer::*;
    }

    pub mod scene {
        pub use crate::scene::*;
    }

    pub mod shape {
        pub use crate::shape::*;
    }
}

// Re-export math library at crate root
pub use glam;
