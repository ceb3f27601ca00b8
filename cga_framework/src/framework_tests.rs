use super::*;
use std::sync::atomic::AtomicU64;
use std::sync::RwLock;
use glam::{DMat4, DVec3};
use crate::animation::Animation;
use crate::camera::OrthographicCamera;
use crate::renderer::{HeadlessSurface, Key, Pixel};
use crate::scene::{shared, Translation};
use crate::shape::{Line2d, Shape};

// ============================================================================
// Helpers
// ============================================================================

fn framework(width: u32, height: u32) -> Framework<HeadlessSurface> {
    let config = FrameworkConfig::default().with_size(width, height).with_target_fps(1000);
    Framework::new(config, HeadlessSurface::new(width, height)).unwrap()
}

fn drawn(frame: &[u32]) -> usize {
    let white = Color::WHITE.to_argb();
    frame.iter().filter(|&&p| p != white).count()
}

/// Surface that closes itself after a number of presented frames.
struct Countdown {
    inner: HeadlessSurface,
    remaining: u32,
}

impl PresentationSurface for Countdown {
    fn size(&self) -> (u32, u32) {
        self.inner.size()
    }

    fn present(&mut self, pixels: &[u32]) -> Result<()> {
        self.inner.present(pixels)?;
        self.remaining = self.remaining.saturating_sub(1);
        Ok(())
    }

    fn is_open(&self) -> bool {
        self.remaining > 0
    }

    fn poll_events(&mut self) -> Vec<InputEvent> {
        self.inner.poll_events()
    }
}

struct Ticker(Arc<AtomicU64>);

impl Animation for Ticker {
    fn animate(&mut self) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }

    fn reset(&mut self) {
        self.0.store(0, Ordering::SeqCst);
    }
}

struct Animated(Ticker);

impl Shape for Animated {
    fn render(&self, _transform: &DMat4, _camera: &dyn Camera, renderer: &mut dyn Renderer) -> Result<()> {
        renderer.put_pixel(Pixel::new(0.0, 0.0));
        Ok(())
    }

    fn animation(&self) -> Option<&dyn Animation> {
        Some(&self.0)
    }

    fn animation_mut(&mut self) -> Option<&mut dyn Animation> {
        Some(&mut self.0)
    }
}

/// Horizontal line under a translation the arrow keys move.
struct LineApp {
    translation: Arc<RwLock<Translation>>,
    frames_seen: Vec<u64>,
}

impl LineApp {
    fn new() -> Self {
        Self {
            translation: shared(Translation::new(0.0, 0.0, 0.0)),
            frames_seen: Vec::new(),
        }
    }
}

impl Application for LineApp {
    fn init_graph(&mut self, scene: &SceneGraph) -> Result<()> {
        scene.add_transformation(self.translation.clone())?;
        scene.add(Line2d::new(-2.0, 0.0, 2.0, 0.0))
    }

    fn on_input(&mut self, event: &InputEvent, _scene: &SceneGraph) -> Result<()> {
        let mut translation = self.translation.write().map_err(|_| Error::LockPoisoned("translation".into()))?;
        match event {
            InputEvent::KeyPressed(Key::Left) => translation.change_x(-1.0),
            InputEvent::KeyPressed(Key::Right) => translation.change_x(1.0),
            _ => {}
        }
        Ok(())
    }

    fn on_frame(&mut self, frame: u64) -> Result<()> {
        self.frames_seen.push(frame);
        Ok(())
    }
}

// ============================================================================
// FrameworkConfig
// ============================================================================

#[test]
fn test_config_defaults() {
    let config = FrameworkConfig::default();
    assert_eq!((config.width, config.height), (800, 800));
    assert_eq!(config.title, "CGA Framework");
    assert_eq!(config.target_fps, 60);
    assert_eq!(config.background, Color::WHITE);
    assert!(config.clear_on_show);
    assert!(!config.animation_thread);
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_builder() {
    let config = FrameworkConfig::default()
        .with_size(320, 200)
        .with_title("demo")
        .with_target_fps(25)
        .with_background(Color::BLACK)
        .with_clear_on_show(false)
        .with_animation_thread(true);

    assert_eq!((config.width, config.height), (320, 200));
    assert_eq!(config.title, "demo");
    assert_eq!(config.frame_duration(), Duration::from_millis(40));
    assert_eq!(config.background, Color::BLACK);
    assert!(!config.clear_on_show);
    assert!(config.animation_thread);
}

#[test]
fn test_config_validation() {
    assert!(matches!(
        FrameworkConfig::default().with_size(0, 10).validate(),
        Err(Error::InvalidParameter(_))
    ));
    assert!(matches!(
        FrameworkConfig::default().with_target_fps(0).validate(),
        Err(Error::InvalidParameter(_))
    ));

    let result = Framework::new(FrameworkConfig::default().with_target_fps(0), HeadlessSurface::new(8, 8));
    assert!(result.is_err());
}

// ============================================================================
// Framework
// ============================================================================

#[test]
fn test_new_uses_surface_size_for_camera() {
    let framework = Framework::new(FrameworkConfig::default(), HeadlessSurface::new(64, 32)).unwrap();

    assert_eq!(framework.camera().resolution(), (64, 32));
    assert_eq!(framework.renderer().width(), 64);
    assert_eq!(framework.frame(), 0);
    assert_eq!(framework.config().target_fps, 60);
}

#[test]
fn test_run_frames_presents_each_frame() {
    let mut framework = framework(16, 16);
    let mut app = LineApp::new();

    let frames = framework.run_frames(&mut app, 3).unwrap();

    assert_eq!(frames, 3);
    assert_eq!(framework.frame(), 3);
    assert_eq!(app.frames_seen, vec![1, 2, 3]);
    assert_eq!(framework.renderer().surface().presented_frames(), 3);
    assert_eq!(drawn(framework.renderer().surface().last_frame()), 5);
    // show() cleared the back buffer
    assert!(framework.renderer().frame_buffer().is_clear());
}

#[test]
fn test_step_runs_transformations_before_render() {
    let mut framework = framework(16, 16);
    let translation = shared(Translation::new(0.0, 0.0, 0.0));
    translation
        .write()
        .unwrap()
        .set_interpolation_x(Some(Box::new(crate::animation::SequenceInterpolation::new(vec![3.0], false))));
    framework.scene().add_transformation(translation).unwrap();
    framework.scene().add(Line2d::new(0.0, 0.0, 0.0, 0.0)).unwrap();

    framework.step().unwrap();

    // logical (3, 0) → surface (8 + 3, 8)
    let frame = framework.renderer().surface().last_frame();
    assert_eq!(frame[8 * 16 + 11], Color::BLACK.to_argb());
    assert_eq!(drawn(frame), 1);
}

#[test]
fn test_input_is_forwarded_before_drawing() {
    let mut framework = framework(16, 16);
    let mut app = LineApp::new();
    framework.renderer_mut().surface_mut().push_event(InputEvent::KeyPressed(Key::Right));
    framework.renderer_mut().surface_mut().push_event(InputEvent::KeyPressed(Key::Right));

    framework.run_frames(&mut app, 1).unwrap();

    assert_eq!(app.translation.read().unwrap().offset(), DVec3::new(2.0, 0.0, 0.0));
    let frame = framework.renderer().surface().last_frame();
    // line spans logical x 0..=4 on row 8
    assert_eq!(frame[8 * 16 + 8], Color::BLACK.to_argb());
    assert_eq!(frame[8 * 16 + 12], Color::BLACK.to_argb());
    assert_eq!(drawn(frame), 5);
}

#[test]
fn test_close_request_stops_before_drawing() {
    let mut framework = framework(16, 16);
    let mut app = LineApp::new();
    framework.renderer_mut().surface_mut().push_event(InputEvent::CloseRequested);

    let frames = framework.run_frames(&mut app, 10).unwrap();

    assert_eq!(frames, 0);
    assert_eq!(framework.renderer().surface().presented_frames(), 0);
    // init_graph still ran
    assert_eq!(framework.scene().root().geometry_len().unwrap(), 1);
}

#[test]
fn test_closed_surface_draws_nothing() {
    let mut framework = framework(16, 16);
    framework.renderer_mut().surface_mut().close();

    assert_eq!(framework.run_frames(&mut LineApp::new(), 5).unwrap(), 0);
}

#[test]
fn test_stale_camera_is_refreshed_at_frame_start() {
    let mut framework = framework(16, 16);
    framework.scene().add(Line2d::new(0.0, 0.0, 1.0, 0.0)).unwrap();

    let mut camera = PerspectiveCamera::new(16, 16).unwrap();
    camera.set_position(DVec3::new(0.0, 0.0, 1.0));
    framework.set_camera(Box::new(camera));
    assert!(!framework.camera().is_up_to_date());

    framework.step().unwrap();

    assert!(framework.camera().is_up_to_date());
}

#[test]
fn test_camera_can_be_replaced() {
    let mut framework = framework(16, 16);
    let ortho = OrthographicCamera::with_pose(DVec3::Z, DVec3::ZERO, DVec3::Y, 16.0, 16, 16).unwrap();
    framework.set_camera(Box::new(ortho));
    framework
        .scene()
        .add(crate::shape::Point3d::new(DVec3::new(2.0, 0.0, 0.0)))
        .unwrap();

    framework.step().unwrap();

    // 16 world units over 16 pixels: x = 2 → surface column 10
    let frame = framework.renderer().surface().last_frame();
    assert_eq!(frame[8 * 16 + 10], Color::BLACK.to_argb());
}

fn expected_view(position: DVec3, target: DVec3) -> DMat4 {
    PerspectiveCamera::with_pose(position, target, DVec3::Y, 1.0, 16, 16)
        .unwrap()
        .view()
        .unwrap()
}

#[test]
fn test_camera_mut_pose_change_applies_next_frame() {
    let mut framework = framework(16, 16);
    let eye = DVec3::new(1.0, 2.0, 8.0);
    framework.camera_mut().look_at(eye, DVec3::ZERO).unwrap();
    assert!(matches!(framework.camera().view(), Err(Error::CameraNotUpdated)));

    framework.step().unwrap();

    assert!(framework.camera().is_up_to_date());
    assert!(framework.camera().view().unwrap().abs_diff_eq(expected_view(eye, DVec3::ZERO), 1e-12));
}

#[test]
fn test_application_moves_camera_before_each_frame() {
    struct Dolly {
        z: f64,
    }
    impl Application for Dolly {
        fn init_graph(&mut self, scene: &SceneGraph) -> Result<()> {
            scene.add(Line2d::new(0.0, 0.0, 1.0, 0.0))
        }

        fn update_camera(&mut self, camera: &mut dyn Camera) -> Result<()> {
            self.z += 1.0;
            camera.look_at(DVec3::new(0.0, 0.0, self.z), DVec3::ZERO)
        }
    }

    let mut framework = framework(16, 16);
    let mut app = Dolly { z: 4.0 };
    assert_eq!(framework.run_frames(&mut app, 2).unwrap(), 2);

    // Each frame moved the eye one unit back and drew from the new pose
    let view = framework.camera().view().unwrap();
    assert!(view.abs_diff_eq(expected_view(DVec3::new(0.0, 0.0, 6.0), DVec3::ZERO), 1e-12));
}

#[test]
fn test_scene_is_built_once_across_runs() {
    let mut framework = framework(16, 16);
    let mut app = LineApp::new();

    framework.run_frames(&mut app, 1).unwrap();
    framework.run_frames(&mut app, 2).unwrap();

    let root = framework.scene().root();
    assert_eq!(root.geometry_len().unwrap(), 1);
    assert_eq!(root.transformation_count().unwrap(), 1);
    assert_eq!(framework.frame(), 3);
    assert_eq!(drawn(framework.renderer().surface().last_frame()), 5);
}

#[test]
fn test_start_animates_inline_once_per_frame() {
    let ticks = Arc::new(AtomicU64::new(0));
    let surface = Countdown { inner: HeadlessSurface::new(8, 8), remaining: 4 };
    let config = FrameworkConfig::default().with_size(8, 8).with_target_fps(1000);
    let mut framework = Framework::new(config, surface).unwrap();

    struct App(Arc<AtomicU64>);
    impl Application for App {
        fn init_graph(&mut self, scene: &SceneGraph) -> Result<()> {
            scene.add(Animated(Ticker(self.0.clone())))
        }
    }

    framework.start(&mut App(ticks.clone())).unwrap();

    assert_eq!(framework.frame(), 4);
    assert_eq!(ticks.load(Ordering::SeqCst), 4);
}

#[test]
fn test_start_with_animation_thread() {
    let ticks = Arc::new(AtomicU64::new(0));
    let surface = Countdown { inner: HeadlessSurface::new(8, 8), remaining: 20 };
    let config = FrameworkConfig::default()
        .with_size(8, 8)
        .with_target_fps(200)
        .with_animation_thread(true);
    let mut framework = Framework::new(config, surface).unwrap();

    struct App(Arc<AtomicU64>);
    impl Application for App {
        fn init_graph(&mut self, scene: &SceneGraph) -> Result<()> {
            scene.add(Animated(Ticker(self.0.clone())))
        }
    }

    framework.start(&mut App(ticks.clone())).unwrap();

    assert_eq!(framework.frame(), 20);
    // The thread is joined: the count no longer changes
    let after_join = ticks.load(Ordering::SeqCst);
    assert!(after_join >= 1);
    std::thread::sleep(Duration::from_millis(20));
    assert_eq!(ticks.load(Ordering::SeqCst), after_join);
}
