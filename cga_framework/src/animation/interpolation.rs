//! Lazily pulled value sources driving animated offsets.
//!
//! An interpolation hands out one value per tick through `next_value()`.
//! Finite sources report exhaustion with `None`; consumers keep their last
//! value in that case. `restart()` rewinds a source to its first value.

use std::f64::consts::TAU;

/// A per-tick value source.
pub trait Interpolation: Send + Sync {
    /// Next value, or `None` once the source is exhausted.
    fn next_value(&mut self) -> Option<f64>;

    /// Rewind to the first value.
    fn restart(&mut self);

    /// True when the next call to `next_value()` will return `None`.
    fn is_exhausted(&self) -> bool;
}

/// What a finite interpolation does after its last step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RepeatMode {
    /// Stop after the last value
    #[default]
    Once,
    /// Jump back to the first value
    Loop,
    /// Run backwards to the first value, then forwards again
    PingPong,
}

// ============================================================================
// LinearInterpolation
// ============================================================================

/// Evenly spaced values from `from` to `to` (both inclusive) in `steps` steps.
#[derive(Debug, Clone)]
pub struct LinearInterpolation {
    from: f64,
    to: f64,
    steps: u32,
    mode: RepeatMode,
    /// Index of the next value, in [0, steps]
    cursor: u32,
    forward: bool,
    exhausted: bool,
}

impl LinearInterpolation {
    /// `steps` is the number of increments; `steps + 1` values are produced per pass.
    /// A `steps` of zero yields `from` once per pass.
    pub fn new(from: f64, to: f64, steps: u32, mode: RepeatMode) -> Self {
        Self {
            from,
            to,
            steps,
            mode,
            cursor: 0,
            forward: true,
            exhausted: false,
        }
    }

    pub fn mode(&self) -> RepeatMode {
        self.mode
    }

    fn value_at(&self, index: u32) -> f64 {
        if self.steps == 0 {
            return self.from;
        }
        self.from + (self.to - self.from) * index as f64 / self.steps as f64
    }

    fn advance(&mut self) {
        match (self.forward, self.mode) {
            (true, _) if self.cursor < self.steps => self.cursor += 1,
            (false, _) if self.cursor > 0 => self.cursor -= 1,
            (_, RepeatMode::Once) => self.exhausted = true,
            (_, RepeatMode::Loop) => self.cursor = 0,
            (true, RepeatMode::PingPong) => {
                self.forward = false;
                self.cursor = self.steps.saturating_sub(1);
            }
            (false, RepeatMode::PingPong) => {
                self.forward = true;
                self.cursor = 1.min(self.steps);
            }
        }
    }
}

impl Interpolation for LinearInterpolation {
    fn next_value(&mut self) -> Option<f64> {
        if self.exhausted {
            return None;
        }
        let value = self.value_at(self.cursor);
        self.advance();
        Some(value)
    }

    fn restart(&mut self) {
        self.cursor = 0;
        self.forward = true;
        self.exhausted = false;
    }

    fn is_exhausted(&self) -> bool {
        self.exhausted
    }
}

// ============================================================================
// SineInterpolation
// ============================================================================

/// Infinite `offset + amplitude * sin(frequency * phase)` with `phase`
/// advancing by `phase_step` per tick.
#[derive(Debug, Clone)]
pub struct SineInterpolation {
    amplitude: f64,
    frequency: f64,
    phase_step: f64,
    offset: f64,
    start_phase: f64,
    /// `frequency * phase`, kept in [0, TAU)
    angle: f64,
}

impl SineInterpolation {
    pub fn new(amplitude: f64, frequency: f64, phase_step: f64, offset: f64) -> Self {
        Self::with_start_phase(amplitude, frequency, phase_step, offset, 0.0)
    }

    pub fn with_start_phase(
        amplitude: f64,
        frequency: f64,
        phase_step: f64,
        offset: f64,
        start_phase: f64,
    ) -> Self {
        Self {
            amplitude,
            frequency,
            phase_step,
            offset,
            start_phase,
            angle: (frequency * start_phase).rem_euclid(TAU),
        }
    }

    pub fn amplitude(&self) -> f64 {
        self.amplitude
    }

    pub fn frequency(&self) -> f64 {
        self.frequency
    }
}

impl Interpolation for SineInterpolation {
    fn next_value(&mut self) -> Option<f64> {
        let value = self.offset + self.amplitude * self.angle.sin();
        // Bounded angle: long-running animations keep full precision
        self.angle = (self.angle + self.frequency * self.phase_step).rem_euclid(TAU);
        Some(value)
    }

    fn restart(&mut self) {
        self.angle = (self.frequency * self.start_phase).rem_euclid(TAU);
    }

    fn is_exhausted(&self) -> bool {
        false
    }
}

// ============================================================================
// SequenceInterpolation
// ============================================================================

/// Explicit list of values, played once or looped.
#[derive(Debug, Clone)]
pub struct SequenceInterpolation {
    values: Vec<f64>,
    looping: bool,
    cursor: usize,
}

impl SequenceInterpolation {
    pub fn new(values: Vec<f64>, looping: bool) -> Self {
        Self { values, looping, cursor: 0 }
    }
}

impl Interpolation for SequenceInterpolation {
    fn next_value(&mut self) -> Option<f64> {
        if self.values.is_empty() {
            return None;
        }
        if self.cursor >= self.values.len() {
            if !self.looping {
                return None;
            }
            self.cursor = 0;
        }
        let value = self.values[self.cursor];
        self.cursor += 1;
        Some(value)
    }

    fn restart(&mut self) {
        self.cursor = 0;
    }

    fn is_exhausted(&self) -> bool {
        self.values.is_empty() || (!self.looping && self.cursor >= self.values.len())
    }
}

#[cfg(test)]
#[path = "interpolation_tests.rs"]
mod tests;
