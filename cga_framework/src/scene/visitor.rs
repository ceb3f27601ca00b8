/// Visitors - actions run on every node of a scene graph traversal.
///
/// `SceneGraph::traverse` walks the graph depth-first and calls
/// `visit(node, parent)` with the composed matrix of all ancestors.

use glam::DMat4;
use crate::camera::Camera;
use crate::error::Result;
use crate::renderer::Renderer;
use super::node::Node;

const SOURCE: &str = "cga::Visitor";

pub trait Visitor {
    /// `parent` maps the node's local space to world space, without the
    /// node's own transformations.
    fn visit(&mut self, node: &Node, parent: &DMat4) -> Result<()>;
}

// ============================================================================
// AnimationVisitor
// ============================================================================

/// Advances every shape animation by one tick.
///
/// The geometry list of each node is write-locked for the whole iteration,
/// so a render pass never observes a half-advanced node and each animation
/// moves exactly once per visit, even with visits from several threads.
#[derive(Debug, Default)]
pub struct AnimationVisitor {
    advanced: usize,
}

impl AnimationVisitor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Animations advanced since creation.
    pub fn advanced(&self) -> usize {
        self.advanced
    }
}

impl Visitor for AnimationVisitor {
    fn visit(&mut self, node: &Node, _parent: &DMat4) -> Result<()> {
        let advanced = node.with_geometry_mut(|shapes| {
            let mut advanced = 0;
            for shape in shapes.iter_mut() {
                if let Some(animation) = shape.animation_mut() {
                    animation.animate();
                    advanced += 1;
                }
            }
            advanced
        })?;
        if advanced > 0 {
            crate::cga_trace!(SOURCE, "'{}': {} animations advanced", node.name(), advanced);
        }
        self.advanced += advanced;
        Ok(())
    }
}

// ============================================================================
// TransformationVisitor
// ============================================================================

/// Calls `update()` on every node transformation.
#[derive(Debug, Default)]
pub struct TransformationVisitor {
    updated: usize,
}

impl TransformationVisitor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn updated(&self) -> usize {
        self.updated
    }
}

impl Visitor for TransformationVisitor {
    fn visit(&mut self, node: &Node, _parent: &DMat4) -> Result<()> {
        self.updated += node.update_transformations()?;
        Ok(())
    }
}

// ============================================================================
// RenderVisitor
// ============================================================================

/// Renders every shape with `parent · node.local_matrix()`.
pub struct RenderVisitor<'a> {
    camera: &'a dyn Camera,
    renderer: &'a mut dyn Renderer,
    rendered: usize,
}

impl<'a> RenderVisitor<'a> {
    pub fn new(camera: &'a dyn Camera, renderer: &'a mut dyn Renderer) -> Self {
        Self { camera, renderer, rendered: 0 }
    }

    /// Shapes rendered so far.
    pub fn rendered(&self) -> usize {
        self.rendered
    }
}

impl Visitor for RenderVisitor<'_> {
    fn visit(&mut self, node: &Node, parent: &DMat4) -> Result<()> {
        let world = *parent * node.local_matrix()?;
        let camera = self.camera;
        let renderer = &mut *self.renderer;
        let rendered = node.with_geometry(|shapes| -> Result<usize> {
            for shape in shapes {
                shape.render(&world, camera, renderer)?;
            }
            Ok(shapes.len())
        })??;
        self.rendered += rendered;
        Ok(())
    }
}

#[cfg(test)]
#[path = "visitor_tests.rs"]
mod tests;
