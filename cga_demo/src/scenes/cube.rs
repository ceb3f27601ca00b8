/// WireCube - twelve `Line3d` edges spinning in front of the camera.

use std::f64::consts::TAU;
use std::sync::{Arc, RwLock};

use cga_framework::cga::animation::{LinearInterpolation, RepeatMode};
use cga_framework::cga::camera::Camera;
use cga_framework::cga::render::{Color, InputEvent, Key, Renderer};
use cga_framework::cga::scene::{shared, Node, Rotation, SceneGraph, Translation};
use cga_framework::cga::shape::{Line3d, Shape};
use cga_framework::cga::{Application, Result};
use cga_framework::glam::{DMat4, DVec3};

/// Ticks for one full turn.
const TURN_TICKS: u32 = 360;
const DISTANCE: f64 = 6.0;
/// Eye movement per arrow key press.
const ZOOM_STEP: f64 = 0.5;

pub struct WireCube {
    edges: Vec<Line3d>,
}

impl WireCube {
    /// Axis-aligned cube centred on the origin.
    pub fn new(half_size: f64, color: Color) -> Self {
        let corner = |i: usize| {
            DVec3::new(
                if i & 1 == 0 { -half_size } else { half_size },
                if i & 2 == 0 { -half_size } else { half_size },
                if i & 4 == 0 { -half_size } else { half_size },
            )
        };

        // Corners differing in exactly one bit share an edge
        let mut edges = Vec::with_capacity(12);
        for a in 0..8 {
            for bit in [1, 2, 4] {
                let b = a | bit;
                if b != a {
                    edges.push(Line3d::new(corner(a), corner(b)).with_color(color));
                }
            }
        }
        Self { edges }
    }

    pub fn edges(&self) -> &[Line3d] {
        &self.edges
    }
}

impl Shape for WireCube {
    fn render(&self, transform: &DMat4, camera: &dyn Camera, renderer: &mut dyn Renderer) -> Result<()> {
        for edge in &self.edges {
            edge.render(transform, camera, renderer)?;
        }
        Ok(())
    }
}

/// Spinning cube; Up/Down move the eye towards or away from it.
pub struct CubeApp {
    rotation: Arc<RwLock<Rotation>>,
    eye_z: f64,
    eye_moved: bool,
}

impl CubeApp {
    pub fn new() -> Result<Self> {
        let mut rotation = Rotation::new(DVec3::new(1.0, 1.0, 0.0), 0.0)?;
        rotation.set_interpolation(Some(Box::new(LinearInterpolation::new(
            0.0,
            TAU,
            TURN_TICKS,
            RepeatMode::Loop,
        ))));
        Ok(Self {
            rotation: shared(rotation),
            eye_z: 0.0,
            eye_moved: false,
        })
    }

    pub fn rotation(&self) -> &Arc<RwLock<Rotation>> {
        &self.rotation
    }
}

impl Application for CubeApp {
    fn init_graph(&mut self, scene: &SceneGraph) -> Result<()> {
        let cube = Node::new("cube");
        cube.add_transformation(shared(Translation::new(0.0, 0.0, -DISTANCE)))?;
        cube.add_transformation(self.rotation.clone())?;
        cube.add(WireCube::new(1.0, Color::BLUE))?;
        scene.add_child(Arc::new(cube))
    }

    fn on_input(&mut self, event: &InputEvent, _scene: &SceneGraph) -> Result<()> {
        match event {
            InputEvent::KeyPressed(Key::Up) => self.eye_z -= ZOOM_STEP,
            InputEvent::KeyPressed(Key::Down) => self.eye_z += ZOOM_STEP,
            _ => return Ok(()),
        }
        // Stay a unit in front of the cube's front face
        self.eye_z = self.eye_z.max(-DISTANCE + 2.0);
        self.eye_moved = true;
        Ok(())
    }

    fn update_camera(&mut self, camera: &mut dyn Camera) -> Result<()> {
        if !self.eye_moved {
            return Ok(());
        }
        self.eye_moved = false;
        log::debug!("cube eye at z = {}", self.eye_z);
        camera.look_at(DVec3::new(0.0, 0.0, self.eye_z), DVec3::new(0.0, 0.0, -DISTANCE))
    }
}
