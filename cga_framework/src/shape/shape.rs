/// Shape trait - drawable scene graph leaves.

use glam::DMat4;
use crate::animation::Animation;
use crate::camera::Camera;
use crate::error::Result;
use crate::renderer::Renderer;

/// Drawable content of a scene graph node.
///
/// `render` only reads the shape, the camera and the transform; all
/// per-tick state lives in the shape's animation, which is advanced by the
/// `AnimationVisitor` through `animation_mut()`.
pub trait Shape: Send + Sync {
    /// Draw with `transform` (object → world) through `camera` into `renderer`.
    fn render(&self, transform: &DMat4, camera: &dyn Camera, renderer: &mut dyn Renderer) -> Result<()>;

    fn animation(&self) -> Option<&dyn Animation> {
        None
    }

    fn animation_mut(&mut self) -> Option<&mut dyn Animation> {
        None
    }

    fn has_animation(&self) -> bool {
        self.animation().is_some()
    }
}
