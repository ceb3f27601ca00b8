/// SceneGraph - root node plus depth-first traversal.

use std::sync::Arc;
use glam::DMat4;
use crate::error::Result;
use crate::shape::Shape;
use super::node::Node;
use super::transformation::SharedTransformation;
use super::visitor::{AnimationVisitor, TransformationVisitor, Visitor};

/// Tree of nodes below a single root.
///
/// The graph is `Sync`: the render loop and an animation thread can hold it
/// in an `Arc` and traverse it concurrently. Node locks serialize the parts
/// that conflict.
#[derive(Debug)]
pub struct SceneGraph {
    root: Arc<Node>,
}

impl SceneGraph {
    pub fn new() -> Self {
        Self {
            root: Arc::new(Node::new("root")),
        }
    }

    pub fn root(&self) -> &Arc<Node> {
        &self.root
    }

    /// Add a shape to the root node.
    pub fn add<S: Shape + 'static>(&self, shape: S) -> Result<()> {
        self.root.add(shape)
    }

    /// Add a transformation to the root node.
    pub fn add_transformation(&self, transformation: SharedTransformation) -> Result<()> {
        self.root.add_transformation(transformation)
    }

    /// Attach a node below the root.
    pub fn add_child(&self, child: Arc<Node>) -> Result<()> {
        self.root.add_child(child)
    }

    /// Visit every node depth-first, parents before children, children in
    /// insertion order. Stops at the first error.
    pub fn traverse(&self, visitor: &mut dyn Visitor) -> Result<()> {
        Self::traverse_node(&self.root, &DMat4::IDENTITY, visitor)
    }

    fn traverse_node(node: &Node, parent: &DMat4, visitor: &mut dyn Visitor) -> Result<()> {
        visitor.visit(node, parent)?;
        let world = *parent * node.local_matrix()?;
        for child in node.children()? {
            Self::traverse_node(&child, &world, visitor)?;
        }
        Ok(())
    }

    /// One animation tick over the whole graph; returns the number of advanced animations.
    pub fn animate(&self) -> Result<usize> {
        let mut visitor = AnimationVisitor::new();
        self.traverse(&mut visitor)?;
        Ok(visitor.advanced())
    }

    /// One transformation tick over the whole graph; returns the number of updated transformations.
    pub fn update_transformations(&self) -> Result<usize> {
        let mut visitor = TransformationVisitor::new();
        self.traverse(&mut visitor)?;
        Ok(visitor.updated())
    }

    /// Number of nodes, root included.
    pub fn node_count(&self) -> Result<usize> {
        struct Counter(usize);
        impl Visitor for Counter {
            fn visit(&mut self, _node: &Node, _parent: &DMat4) -> Result<()> {
                self.0 += 1;
                Ok(())
            }
        }
        let mut counter = Counter(0);
        self.traverse(&mut counter)?;
        Ok(counter.0)
    }
}

impl Default for SceneGraph {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "scene_graph_tests.rs"]
mod tests;
