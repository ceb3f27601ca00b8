//! CGA framework demo scenes.
//!
//! ```text
//! cargo run -p cga_demo -- --scene sine
//! RUST_LOG=debug cargo run -p cga_demo -- --scene cube --width 640 --height 480
//! ```

mod log_bridge;
mod scenes;

use clap::{Parser, ValueEnum};
use cga_framework::cga::{Engine, Framework, FrameworkConfig};
use cga_framework_renderer_minifb::MinifbSurface;

use crate::log_bridge::LogBridge;
use crate::scenes::{CubeApp, SineCurveApp, StrichApp};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Scene {
    /// One diagonal stroke
    Strich,
    /// Scrolling sine wave, arrow keys move it
    Sine,
    /// Rotating wire cube
    Cube,
}

#[derive(Debug, Parser)]
#[command(version, about = "CGA framework demo scenes")]
struct Args {
    #[arg(long, value_enum, default_value_t = Scene::Sine)]
    scene: Scene,

    #[arg(long, default_value_t = 800)]
    width: u32,

    #[arg(long, default_value_t = 800)]
    height: u32,

    /// Frames per second
    #[arg(long, default_value_t = 60)]
    fps: u32,

    /// Animate on a separate thread
    #[arg(long)]
    animation_thread: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    Engine::set_logger(LogBridge);
    Engine::set_min_severity(log_bridge::severity_for(log::max_level()));

    let args = Args::parse();
    if let Err(e) = run(&args) {
        log::error!("demo failed: {}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> cga_framework::cga::Result<()> {
    let config = FrameworkConfig::default()
        .with_size(args.width, args.height)
        .with_title(format!("CGA Framework - {:?}", args.scene))
        .with_target_fps(args.fps)
        .with_animation_thread(args.animation_thread);

    let surface = MinifbSurface::new(config.width, config.height, &config.title)?;
    let mut framework = Framework::new(config, surface)?;

    match args.scene {
        Scene::Strich => framework.start(&mut StrichApp),
        Scene::Sine => framework.start(&mut SineCurveApp::new()),
        Scene::Cube => framework.start(&mut CubeApp::new()?),
    }
}
