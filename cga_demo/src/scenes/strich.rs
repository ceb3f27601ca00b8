/// Strich - a single 2D stroke between two points.

use cga_framework::cga::camera::Camera;
use cga_framework::cga::render::Renderer;
use cga_framework::cga::scene::SceneGraph;
use cga_framework::cga::shape::{Line2d, Shape};
use cga_framework::cga::{Application, Result};
use cga_framework::glam::DMat4;

/// Composite shape drawing one `Line2d`.
pub struct Strich {
    line: Line2d,
}

impl Strich {
    pub fn new(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        Self {
            line: Line2d::new(x1 as f64, y1 as f64, x2 as f64, y2 as f64),
        }
    }
}

impl Shape for Strich {
    fn render(&self, transform: &DMat4, camera: &dyn Camera, renderer: &mut dyn Renderer) -> Result<()> {
        self.line.render(transform, camera, renderer)
    }
}

pub struct StrichApp;

impl Application for StrichApp {
    fn init_graph(&mut self, scene: &SceneGraph) -> Result<()> {
        scene.add(Strich::new(-100, -100, 100, 100))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cga_framework::cga::render::{Color, HeadlessSurface};
    use cga_framework::cga::{Framework, FrameworkConfig};

    #[test]
    fn test_strich_draws_the_diagonal() {
        let config = FrameworkConfig::default().with_size(400, 400);
        let mut framework = Framework::new(config, HeadlessSurface::new(400, 400)).unwrap();
        framework.run_frames(&mut StrichApp, 1).unwrap();

        let frame = framework.renderer().surface().last_frame();
        let black = Color::BLACK.to_argb();
        // Logical (-100,-100)..(100,100) → surface (100,300)..(300,100)
        assert_eq!(frame[300 * 400 + 100], black);
        assert_eq!(frame[200 * 400 + 200], black);
        assert_eq!(frame[100 * 400 + 300], black);
        assert_eq!(frame.iter().filter(|&&p| p == black).count(), 201);
    }
}
