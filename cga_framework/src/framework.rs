/// Framework - application entry and frame loop.
///
/// Each frame runs, in order: transformation update, animation visit,
/// render visit, `show()`. With `animation_thread` enabled the animation
/// visit moves to a second thread ticking at the same rate against the
/// shared scene graph; node locks keep it from overlapping a render of the
/// same geometry.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use crate::camera::{Camera, PerspectiveCamera};
use crate::error::{Error, Result};
use crate::renderer::{Color, InputEvent, PresentationSurface, Renderer, SurfaceRenderer};
use crate::scene::{RenderVisitor, SceneGraph};

const SOURCE: &str = "cga::Framework";

// ============================================================================
// Configuration
// ============================================================================

/// Framework configuration
#[derive(Debug, Clone, PartialEq)]
pub struct FrameworkConfig {
    /// Surface width in pixels
    pub width: u32,
    /// Surface height in pixels
    pub height: u32,
    /// Window title
    pub title: String,
    /// Frames (and animation ticks) per second
    pub target_fps: u32,
    /// Colour the back buffer is cleared to
    pub background: Color,
    /// Clear the back buffer after presenting it
    pub clear_on_show: bool,
    /// Run the animation visitor on its own thread
    pub animation_thread: bool,
}

impl Default for FrameworkConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 800,
            title: "CGA Framework".to_string(),
            target_fps: 60,
            background: Color::WHITE,
            clear_on_show: true,
            animation_thread: false,
        }
    }
}

impl FrameworkConfig {
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_target_fps(mut self, target_fps: u32) -> Self {
        self.target_fps = target_fps;
        self
    }

    pub fn with_background(mut self, background: Color) -> Self {
        self.background = background;
        self
    }

    pub fn with_clear_on_show(mut self, clear_on_show: bool) -> Self {
        self.clear_on_show = clear_on_show;
        self
    }

    pub fn with_animation_thread(mut self, animation_thread: bool) -> Self {
        self.animation_thread = animation_thread;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(Error::InvalidParameter(format!(
                "surface size must be non-zero, got {}x{}",
                self.width, self.height
            )));
        }
        if self.target_fps == 0 {
            return Err(Error::InvalidParameter("target fps must be positive".to_string()));
        }
        Ok(())
    }

    /// Time budget of one frame.
    pub fn frame_duration(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.target_fps.max(1) as f64)
    }
}

// ============================================================================
// Application
// ============================================================================

/// User code plugged into the framework.
pub trait Application {
    /// Build the scene. Called once before the first frame.
    fn init_graph(&mut self, scene: &SceneGraph) -> Result<()>;

    /// Input delivered before the frame is drawn. `CloseRequested` is handled
    /// by the framework and not forwarded.
    fn on_input(&mut self, _event: &InputEvent, _scene: &SceneGraph) -> Result<()> {
        Ok(())
    }

    /// Called before each frame with the framework's camera. Pose changes
    /// made here (`Camera::look_at`) are applied before the frame is drawn.
    fn update_camera(&mut self, _camera: &mut dyn Camera) -> Result<()> {
        Ok(())
    }

    /// Called after each presented frame.
    fn on_frame(&mut self, _frame: u64) -> Result<()> {
        Ok(())
    }
}

// ============================================================================
// Framework
// ============================================================================

pub struct Framework<S: PresentationSurface> {
    config: FrameworkConfig,
    renderer: SurfaceRenderer<S>,
    camera: Box<dyn Camera>,
    scene: Arc<SceneGraph>,
    frame: u64,
    initialized: bool,
}

impl<S: PresentationSurface> Framework<S> {
    /// Framework drawing into `surface`, with a default `PerspectiveCamera`.
    ///
    /// The surface's own size wins over `config.width`/`config.height`.
    pub fn new(config: FrameworkConfig, surface: S) -> Result<Self> {
        config.validate().map_err(|e| crate::cga_err!(SOURCE, e))?;

        let (width, height) = surface.size();
        if (width, height) != (config.width, config.height) {
            crate::cga_warn!(
                SOURCE,
                "surface is {}x{}, configuration asked for {}x{}",
                width, height, config.width, config.height
            );
        }

        let mut renderer = SurfaceRenderer::new(surface, config.background)?;
        renderer.set_clear_on_show(config.clear_on_show);
        let camera = PerspectiveCamera::new(width, height).map_err(|e| crate::cga_err!(SOURCE, e))?;

        crate::cga_info!(SOURCE, "'{}' initialized ({}x{}, {} fps)", config.title, width, height, config.target_fps);

        Ok(Self {
            config,
            renderer,
            camera: Box::new(camera),
            scene: Arc::new(SceneGraph::new()),
            frame: 0,
            initialized: false,
        })
    }

    pub fn config(&self) -> &FrameworkConfig {
        &self.config
    }

    pub fn scene(&self) -> &Arc<SceneGraph> {
        &self.scene
    }

    pub fn camera(&self) -> &dyn Camera {
        self.camera.as_ref()
    }

    /// Mutable camera access. Changes are picked up at the start of the next frame.
    pub fn camera_mut(&mut self) -> &mut dyn Camera {
        self.camera.as_mut()
    }

    pub fn set_camera(&mut self, camera: Box<dyn Camera>) {
        self.camera = camera;
    }

    pub fn renderer(&self) -> &SurfaceRenderer<S> {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut SurfaceRenderer<S> {
        &mut self.renderer
    }

    /// Frames presented so far.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Draw one complete frame.
    pub fn step(&mut self) -> Result<()> {
        self.tick(true)
    }

    fn tick(&mut self, animate: bool) -> Result<()> {
        if !self.camera.is_up_to_date() {
            self.camera.update()?;
        }

        self.scene.update_transformations()?;
        if animate {
            self.scene.animate()?;
        }

        let mut visitor = RenderVisitor::new(self.camera.as_ref(), &mut self.renderer);
        self.scene.traverse(&mut visitor)?;
        let rendered = visitor.rendered();

        self.renderer.show()?;
        self.frame += 1;
        crate::cga_trace!(SOURCE, "frame {}: {} shapes", self.frame, rendered);
        Ok(())
    }

    /// Build the scene with `app` on the first run only; later runs keep
    /// drawing the scene that is already there.
    fn init_scene<A: Application>(&mut self, app: &mut A) -> Result<()> {
        if !self.initialized {
            app.init_graph(&self.scene)?;
            self.initialized = true;
        }
        Ok(())
    }

    /// Build the scene with `app` and run until the surface closes.
    pub fn start<A: Application>(&mut self, app: &mut A) -> Result<()> {
        self.init_scene(app)?;
        crate::cga_info!(SOURCE, "starting frame loop");

        let running = Arc::new(AtomicBool::new(true));
        let animator = if self.config.animation_thread {
            Some(spawn_animation_thread(
                self.scene.clone(),
                running.clone(),
                self.config.frame_duration(),
            )?)
        } else {
            None
        };

        let result = self.run_loop(app, animator.is_none(), None, true);

        running.store(false, Ordering::SeqCst);
        if let Some(handle) = animator {
            let animation_result = handle.join().map_err(|_| {
                crate::cga_err!(SOURCE, Error::BackendError("animation thread panicked".to_string()))
            })?;
            result?;
            animation_result?;
        } else {
            result?;
        }

        crate::cga_info!(SOURCE, "frame loop finished after {} frames", self.frame);
        Ok(())
    }

    /// Draw at most `frames` frames without pacing, building the scene first
    /// if no run has yet. Returns the number of frames drawn; fewer when the
    /// surface closes.
    pub fn run_frames<A: Application>(&mut self, app: &mut A, frames: u64) -> Result<u64> {
        self.init_scene(app)?;
        let before = self.frame;
        self.run_loop(app, true, Some(frames), false)?;
        Ok(self.frame - before)
    }

    fn run_loop<A: Application>(
        &mut self,
        app: &mut A,
        animate: bool,
        limit: Option<u64>,
        paced: bool,
    ) -> Result<()> {
        let frame_duration = self.config.frame_duration();
        let mut drawn = 0;

        while limit.map_or(true, |limit| drawn < limit) {
            let started = Instant::now();
            if !self.renderer.surface().is_open() {
                crate::cga_debug!(SOURCE, "surface closed");
                break;
            }

            let mut close = false;
            for event in self.renderer.surface_mut().poll_events() {
                match event {
                    InputEvent::CloseRequested => close = true,
                    event => app.on_input(&event, &self.scene)?,
                }
            }
            if close {
                crate::cga_debug!(SOURCE, "close requested");
                break;
            }

            app.update_camera(self.camera.as_mut())?;
            self.tick(animate)?;
            app.on_frame(self.frame)?;
            drawn += 1;

            if paced {
                if let Some(rest) = frame_duration.checked_sub(started.elapsed()) {
                    std::thread::sleep(rest);
                }
            }
        }
        Ok(())
    }
}

fn spawn_animation_thread(
    scene: Arc<SceneGraph>,
    running: Arc<AtomicBool>,
    tick: Duration,
) -> Result<JoinHandle<Result<()>>> {
    std::thread::Builder::new()
        .name("cga-animation".to_string())
        .spawn(move || {
            crate::cga_debug!(SOURCE, "animation thread started");
            while running.load(Ordering::SeqCst) {
                let started = Instant::now();
                scene.animate().map_err(|e| crate::cga_err!(SOURCE, e))?;
                if let Some(rest) = tick.checked_sub(started.elapsed()) {
                    std::thread::sleep(rest);
                }
            }
            crate::cga_debug!(SOURCE, "animation thread stopped");
            Ok(())
        })
        .map_err(|e| {
            crate::cga_err!(
                SOURCE,
                Error::InitializationFailed(format!("cannot spawn animation thread: {}", e))
            )
        })
}

#[cfg(test)]
#[path = "framework_tests.rs"]
mod tests;
