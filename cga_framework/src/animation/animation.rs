/// Animation - per-tick state owned by a shape.
///
/// The `AnimationVisitor` advances every animation exactly once per visit
/// while it holds the write lock of the owning node's geometry list.

use super::interpolation::Interpolation;

/// One step of time-varying shape state.
pub trait Animation: Send + Sync {
    /// Advance by one tick.
    fn animate(&mut self);

    /// True once the animation has nothing left to advance.
    fn is_finished(&self) -> bool {
        false
    }

    /// Return to the initial state.
    fn reset(&mut self);
}

/// Animation whose state is the latest value of an interpolation.
///
/// When the interpolation runs out, the last value is kept.
pub struct InterpolatedAnimation {
    interpolation: Box<dyn Interpolation>,
    initial: f64,
    value: f64,
    ticks: u64,
}

impl InterpolatedAnimation {
    /// `initial` is reported by `value()` until the first `animate()`.
    pub fn new(interpolation: Box<dyn Interpolation>, initial: f64) -> Self {
        Self {
            interpolation,
            initial,
            value: initial,
            ticks: 0,
        }
    }

    /// Current value.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Number of `animate()` calls since creation or the last `reset()`.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}

impl Animation for InterpolatedAnimation {
    fn animate(&mut self) {
        if let Some(value) = self.interpolation.next_value() {
            self.value = value;
        }
        self.ticks += 1;
    }

    fn is_finished(&self) -> bool {
        self.interpolation.is_exhausted()
    }

    fn reset(&mut self) {
        self.interpolation.restart();
        self.value = self.initial;
        self.ticks = 0;
    }
}

impl std::fmt::Debug for InterpolatedAnimation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InterpolatedAnimation")
            .field("value", &self.value)
            .field("ticks", &self.ticks)
            .field("finished", &self.is_finished())
            .finish()
    }
}

#[cfg(test)]
#[path = "animation_tests.rs"]
mod tests;
