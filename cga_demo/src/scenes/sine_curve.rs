/// AnimatedSineCurve - sampled sine wave scrolling along x.

use std::f64::consts::TAU;
use std::sync::{Arc, RwLock};

use cga_framework::cga::animation::{Animation, InterpolatedAnimation, LinearInterpolation, RepeatMode};
use cga_framework::cga::camera::Camera;
use cga_framework::cga::render::{InputEvent, Key, Pixel, Renderer};
use cga_framework::cga::scene::{shared, SceneGraph, Translation};
use cga_framework::cga::shape::Shape;
use cga_framework::cga::{Application, Error, Result};
use cga_framework::glam::{DMat4, DVec3};

const AMPLITUDE: f64 = 150.0;
const PERIODS: f64 = 2.0;
/// Horizontal distance between samples in logical pixels.
const SAMPLE_SPACING: f64 = 0.4;
/// Ticks for the wave to move one full period.
const PHASE_TICKS: u32 = 120;
const KEY_STEP: f64 = 10.0;

pub struct AnimatedSineCurve {
    samples: usize,
    origin: DVec3,
    phase: InterpolatedAnimation,
}

impl AnimatedSineCurve {
    pub fn new(samples: usize, x: f64, y: f64) -> Self {
        Self {
            samples,
            origin: DVec3::new(x, y, 0.0),
            phase: InterpolatedAnimation::new(
                Box::new(LinearInterpolation::new(0.0, TAU, PHASE_TICKS, RepeatMode::Loop)),
                0.0,
            ),
        }
    }

    pub fn phase(&self) -> f64 {
        self.phase.value()
    }

    /// Object-space position of sample `i`.
    pub fn sample(&self, i: usize) -> DVec3 {
        let t = i as f64 / self.samples.max(1) as f64;
        self.origin
            + DVec3::new(
                i as f64 * SAMPLE_SPACING,
                AMPLITUDE * (t * PERIODS * TAU + self.phase.value()).sin(),
                0.0,
            )
    }
}

impl Shape for AnimatedSineCurve {
    fn render(&self, transform: &DMat4, _camera: &dyn Camera, renderer: &mut dyn Renderer) -> Result<()> {
        for i in 0..self.samples {
            let p = transform.transform_point3(self.sample(i));
            renderer.put_pixel(Pixel::new(p.x, p.y));
        }
        Ok(())
    }

    fn animation(&self) -> Option<&dyn Animation> {
        Some(&self.phase)
    }

    fn animation_mut(&mut self) -> Option<&mut dyn Animation> {
        Some(&mut self.phase)
    }
}

/// Sine curve under a translation moved with the arrow keys.
pub struct SineCurveApp {
    translation: Arc<RwLock<Translation>>,
}

impl SineCurveApp {
    pub fn new() -> Self {
        Self {
            translation: shared(Translation::new(-400.0, 0.0, 0.0)),
        }
    }

    /// Current offset of the curve's translation.
    pub fn offset(&self) -> Result<DVec3> {
        let translation = self
            .translation
            .read()
            .map_err(|_| Error::LockPoisoned("sine curve translation".to_string()))?;
        Ok(translation.offset())
    }
}

impl Default for SineCurveApp {
    fn default() -> Self {
        Self::new()
    }
}

impl Application for SineCurveApp {
    fn init_graph(&mut self, scene: &SceneGraph) -> Result<()> {
        scene.add_transformation(self.translation.clone())?;
        scene.add(AnimatedSineCurve::new(2000, 0.0, 0.0))
    }

    fn on_input(&mut self, event: &InputEvent, _scene: &SceneGraph) -> Result<()> {
        let InputEvent::KeyPressed(key) = event else {
            return Ok(());
        };
        let mut translation = self
            .translation
            .write()
            .map_err(|_| Error::LockPoisoned("sine curve translation".to_string()))?;
        match key {
            Key::Left => translation.change_x(-KEY_STEP),
            Key::Right => translation.change_x(KEY_STEP),
            Key::Up => translation.change_y(KEY_STEP),
            Key::Down => translation.change_y(-KEY_STEP),
            _ => return Ok(()),
        }
        log::debug!("sine curve moved to {:?}", translation.offset());
        Ok(())
    }
}
