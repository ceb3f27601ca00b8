//! Scene graph module - nodes, transformations and visitors.
//!
//! Nodes are shared through `Arc` and mutated through `&self`; each list a
//! node owns is guarded by its own `RwLock`. Animation takes the geometry
//! write lock, rendering the read lock.

mod node;
mod scene_graph;
mod transformation;
mod visitor;

pub use node::Node;
pub use scene_graph::SceneGraph;
pub use transformation::{shared, Rotation, Scale, SharedTransformation, Transformation, Translation};
pub use visitor::{AnimationVisitor, RenderVisitor, TransformationVisitor, Visitor};
