/// Node - one level of the scene graph.
///
/// A node owns an ordered geometry list, an ordered list of shared
/// transformations, and its children. Every list sits behind its own
/// `RwLock` so a node can be shared between the render loop and an
/// animation thread through `Arc<Node>`; all mutators take `&self`.

use std::fmt;
use std::sync::{Arc, Mutex, RwLock};
use glam::DMat4;
use crate::error::{Error, Result};
use crate::shape::Shape;
use super::transformation::SharedTransformation;

const SOURCE: &str = "cga::Node";

/// Serialises edge insertion so the cycle check and the insert are atomic
/// with respect to other `add_child` calls on any node.
static LINK_LOCK: Mutex<()> = Mutex::new(());

fn poisoned(node: &str, what: &str) -> Error {
    crate::cga_err!(SOURCE, Error::LockPoisoned(format!("node '{}' {}", node, what)))
}

pub struct Node {
    name: String,
    geometry: RwLock<Vec<Box<dyn Shape>>>,
    transformations: RwLock<Vec<SharedTransformation>>,
    children: RwLock<Vec<Arc<Node>>>,
}

impl Node {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            geometry: RwLock::new(Vec::new()),
            transformations: RwLock::new(Vec::new()),
            children: RwLock::new(Vec::new()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Append a shape to the geometry list.
    pub fn add<S: Shape + 'static>(&self, shape: S) -> Result<()> {
        self.geometry
            .write()
            .map_err(|_| poisoned(&self.name, "geometry"))?
            .push(Box::new(shape));
        Ok(())
    }

    /// Append a transformation; it is applied inside the ones added before it.
    pub fn add_transformation(&self, transformation: SharedTransformation) -> Result<()> {
        self.transformations
            .write()
            .map_err(|_| poisoned(&self.name, "transformations"))?
            .push(transformation);
        Ok(())
    }

    /// Attach a child node. Fails with `InvalidParameter` if `child` already
    /// reaches this node, which would make the graph cyclic.
    pub fn add_child(&self, child: Arc<Node>) -> Result<()> {
        let _link = LINK_LOCK
            .lock()
            .map_err(|_| poisoned(&self.name, "link lock"))?;
        if child.reaches(self)? {
            return Err(crate::cga_err!(
                SOURCE,
                Error::InvalidParameter(format!(
                    "adding '{}' below '{}' would create a cycle",
                    child.name, self.name
                ))
            ));
        }
        self.children
            .write()
            .map_err(|_| poisoned(&self.name, "children"))?
            .push(child);
        Ok(())
    }

    /// True if `target` is this node or one of its descendants.
    fn reaches(&self, target: &Node) -> Result<bool> {
        if std::ptr::eq(self, target) {
            return Ok(true);
        }
        for child in self.children()? {
            if child.reaches(target)? {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Snapshot of the children; the lock is released on return.
    pub fn children(&self) -> Result<Vec<Arc<Node>>> {
        Ok(self
            .children
            .read()
            .map_err(|_| poisoned(&self.name, "children"))?
            .clone())
    }

    pub fn geometry_len(&self) -> Result<usize> {
        Ok(self
            .geometry
            .read()
            .map_err(|_| poisoned(&self.name, "geometry"))?
            .len())
    }

    pub fn transformation_count(&self) -> Result<usize> {
        Ok(self
            .transformations
            .read()
            .map_err(|_| poisoned(&self.name, "transformations"))?
            .len())
    }

    /// Product of the transformations in insertion order (first added is outermost).
    pub fn local_matrix(&self) -> Result<DMat4> {
        let transformations = self
            .transformations
            .read()
            .map_err(|_| poisoned(&self.name, "transformations"))?;
        let mut matrix = DMat4::IDENTITY;
        for transformation in transformations.iter() {
            let transformation = transformation
                .read()
                .map_err(|_| poisoned(&self.name, "transformation"))?;
            matrix *= transformation.transform_matrix();
        }
        Ok(matrix)
    }

    /// Run `update()` on every transformation; returns how many were updated.
    pub fn update_transformations(&self) -> Result<usize> {
        let transformations = self
            .transformations
            .read()
            .map_err(|_| poisoned(&self.name, "transformations"))?;
        for transformation in transformations.iter() {
            transformation
                .write()
                .map_err(|_| poisoned(&self.name, "transformation"))?
                .update();
        }
        Ok(transformations.len())
    }

    /// Run `f` on the geometry list under the shared (read) lock.
    pub fn with_geometry<R>(&self, f: impl FnOnce(&[Box<dyn Shape>]) -> R) -> Result<R> {
        let geometry = self
            .geometry
            .read()
            .map_err(|_| poisoned(&self.name, "geometry"))?;
        Ok(f(&geometry))
    }

    /// Run `f` on the geometry list under the exclusive (write) lock.
    pub fn with_geometry_mut<R>(&self, f: impl FnOnce(&mut Vec<Box<dyn Shape>>) -> R) -> Result<R> {
        let mut geometry = self
            .geometry
            .write()
            .map_err(|_| poisoned(&self.name, "geometry"))?;
        Ok(f(&mut geometry))
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let count = |len: std::result::Result<usize, Error>| len.unwrap_or(0);
        f.debug_struct("Node")
            .field("name", &self.name)
            .field("geometry", &count(self.geometry_len()))
            .field("transformations", &count(self.transformation_count()))
            .field("children", &count(self.children().map(|c| c.len())))
            .finish()
    }
}

#[cfg(test)]
#[path = "node_tests.rs"]
mod tests;
