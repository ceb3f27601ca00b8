/// Transformations attached to scene graph nodes.
///
/// Each transformation caches its matrix. `transform_matrix()` is a pure
/// read; the cache is recomputed by the `change_*` mutators and by
/// `update()`, which pulls the next value from every attached
/// interpolation. Axes without an interpolation are left alone, and an
/// exhausted interpolation keeps its axis at the last value.

use std::sync::{Arc, RwLock};
use glam::{DMat4, DVec3};
use crate::animation::Interpolation;
use crate::error::Result;
use crate::math;

/// Matrix-producing node transformation.
pub trait Transformation: Send + Sync {
    /// Cached matrix, object → parent space.
    fn transform_matrix(&self) -> DMat4;

    /// Per-tick hook.
    fn update(&mut self);
}

/// Transformation shared between the scene graph and the application.
pub type SharedTransformation = Arc<RwLock<dyn Transformation>>;

/// Wrap a transformation for sharing. Keep the typed `Arc` to mutate it later;
/// it coerces to `SharedTransformation` when added to a node.
pub fn shared<T: Transformation + 'static>(transformation: T) -> Arc<RwLock<T>> {
    Arc::new(RwLock::new(transformation))
}

type Axis = Option<Box<dyn Interpolation>>;

fn pull(axis: &mut Axis, value: &mut f64) {
    if let Some(interpolation) = axis.as_mut() {
        if let Some(next) = interpolation.next_value() {
            *value = next;
        }
    }
}

// ============================================================================
// Translation
// ============================================================================

/// Translation along x, y and z.
pub struct Translation {
    offset: DVec3,
    interpolation_x: Axis,
    interpolation_y: Axis,
    interpolation_z: Axis,
    matrix: DMat4,
}

impl Translation {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        let mut translation = Self {
            offset: DVec3::new(x, y, z),
            interpolation_x: None,
            interpolation_y: None,
            interpolation_z: None,
            matrix: DMat4::IDENTITY,
        };
        translation.update_matrix();
        translation
    }

    pub fn offset(&self) -> DVec3 {
        self.offset
    }

    pub fn set_offset(&mut self, offset: DVec3) {
        self.offset = offset;
        self.update_matrix();
    }

    pub fn change_x(&mut self, delta: f64) {
        self.offset.x += delta;
        self.update_matrix();
    }

    pub fn change_y(&mut self, delta: f64) {
        self.offset.y += delta;
        self.update_matrix();
    }

    pub fn change_z(&mut self, delta: f64) {
        self.offset.z += delta;
        self.update_matrix();
    }

    pub fn set_interpolation_x(&mut self, interpolation: Option<Box<dyn Interpolation>>) {
        self.interpolation_x = interpolation;
    }

    pub fn set_interpolation_y(&mut self, interpolation: Option<Box<dyn Interpolation>>) {
        self.interpolation_y = interpolation;
    }

    pub fn set_interpolation_z(&mut self, interpolation: Option<Box<dyn Interpolation>>) {
        self.interpolation_z = interpolation;
    }

    pub fn has_interpolation(&self) -> bool {
        self.interpolation_x.is_some() || self.interpolation_y.is_some() || self.interpolation_z.is_some()
    }

    fn update_matrix(&mut self) {
        let DVec3 { x, y, z } = self.offset;
        self.matrix = math::matrix_from_rows([
            [1.0, 0.0, 0.0, x],
            [0.0, 1.0, 0.0, y],
            [0.0, 0.0, 1.0, z],
            [0.0, 0.0, 0.0, 1.0],
        ]);
    }
}

impl Transformation for Translation {
    fn transform_matrix(&self) -> DMat4 {
        self.matrix
    }

    fn update(&mut self) {
        pull(&mut self.interpolation_x, &mut self.offset.x);
        pull(&mut self.interpolation_y, &mut self.offset.y);
        pull(&mut self.interpolation_z, &mut self.offset.z);
        self.update_matrix();
    }
}

// ============================================================================
// Rotation
// ============================================================================

/// Rotation by an angle (radians) around a fixed axis through the origin.
pub struct Rotation {
    axis: DVec3,
    angle: f64,
    interpolation: Axis,
    matrix: DMat4,
}

impl Rotation {
    /// Fails with `DegenerateVector` for a zero-length axis.
    pub fn new(axis: DVec3, angle: f64) -> Result<Self> {
        let axis = math::normalize(axis, "rotation axis")?;
        Ok(Self {
            axis,
            angle,
            interpolation: None,
            matrix: DMat4::from_axis_angle(axis, angle),
        })
    }

    pub fn axis(&self) -> DVec3 {
        self.axis
    }

    pub fn angle(&self) -> f64 {
        self.angle
    }

    pub fn set_angle(&mut self, angle: f64) {
        self.angle = angle;
        self.update_matrix();
    }

    pub fn change_angle(&mut self, delta: f64) {
        self.angle += delta;
        self.update_matrix();
    }

    /// Interpolation driving the angle, in radians.
    pub fn set_interpolation(&mut self, interpolation: Option<Box<dyn Interpolation>>) {
        self.interpolation = interpolation;
    }

    fn update_matrix(&mut self) {
        self.matrix = DMat4::from_axis_angle(self.axis, self.angle);
    }
}

impl Transformation for Rotation {
    fn transform_matrix(&self) -> DMat4 {
        self.matrix
    }

    fn update(&mut self) {
        pull(&mut self.interpolation, &mut self.angle);
        self.update_matrix();
    }
}

// ============================================================================
// Scale
// ============================================================================

/// Non-uniform scale along x, y and z.
pub struct Scale {
    factors: DVec3,
    interpolation_x: Axis,
    interpolation_y: Axis,
    interpolation_z: Axis,
    matrix: DMat4,
}

impl Scale {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        let factors = DVec3::new(x, y, z);
        Self {
            factors,
            interpolation_x: None,
            interpolation_y: None,
            interpolation_z: None,
            matrix: DMat4::from_scale(factors),
        }
    }

    pub fn uniform(factor: f64) -> Self {
        Self::new(factor, factor, factor)
    }

    pub fn factors(&self) -> DVec3 {
        self.factors
    }

    pub fn change_x(&mut self, delta: f64) {
        self.factors.x += delta;
        self.update_matrix();
    }

    pub fn change_y(&mut self, delta: f64) {
        self.factors.y += delta;
        self.update_matrix();
    }

    pub fn change_z(&mut self, delta: f64) {
        self.factors.z += delta;
        self.update_matrix();
    }

    pub fn set_interpolation_x(&mut self, interpolation: Option<Box<dyn Interpolation>>) {
        self.interpolation_x = interpolation;
    }

    pub fn set_interpolation_y(&mut self, interpolation: Option<Box<dyn Interpolation>>) {
        self.interpolation_y = interpolation;
    }

    pub fn set_interpolation_z(&mut self, interpolation: Option<Box<dyn Interpolation>>) {
        self.interpolation_z = interpolation;
    }

    fn update_matrix(&mut self) {
        self.matrix = DMat4::from_scale(self.factors);
    }
}

impl Transformation for Scale {
    fn transform_matrix(&self) -> DMat4 {
        self.matrix
    }

    fn update(&mut self) {
        pull(&mut self.interpolation_x, &mut self.factors.x);
        pull(&mut self.interpolation_y, &mut self.factors.y);
        pull(&mut self.interpolation_z, &mut self.factors.z);
        self.update_matrix();
    }
}

#[cfg(test)]
#[path = "transformation_tests.rs"]
mod tests;
