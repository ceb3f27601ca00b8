//! Shapes - the drawable leaves of the scene graph.

mod line;
mod point;
mod shape;

pub use line::{bresenham, clip_segment, draw_segment, Line2d, Line3d};
pub use point::Point3d;
pub use shape::Shape;
