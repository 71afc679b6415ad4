//! Earthquake-preparedness mini-scenes on `tremor-engine`.
//!
//! Runs headless by default (fixed-step clock, scripted player); `--window`
//! opens a winit window rendered with wgpu instead.

mod autopilot;
mod edges;
mod headless;
mod house;
mod menu;
mod palette;
mod rhythm;

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};

use tremor_engine::game::{Game, GameConfig, Level};
use tremor_engine::logging::{LoggingConfig, init_logging};
use tremor_engine::render::{FontSystem, GpuPresenter, GpuPresenterConfig};
use tremor_engine::window::{Runtime, RuntimeConfig};

use autopilot::Autopilot;
use headless::Headless;
use house::HouseLevel;
use menu::MenuLevel;
use rhythm::RhythmLevel;

#[derive(Debug, Copy, Clone, Eq, PartialEq, ValueEnum)]
enum Scene {
    Menu,
    House,
    Rhythm,
}

#[derive(Debug, Parser)]
#[command(version, about = "Earthquake safety mini-scenes", long_about = None)]
struct Cli {
    /// Scene to start in
    #[arg(short, long, value_enum, default_value_t = Scene::Menu)]
    scene: Scene,

    /// Open a window instead of running headless
    #[arg(short, long)]
    window: bool,

    /// Headless run length in game seconds
    #[arg(long, default_value_t = 30.0)]
    seconds: f32,

    /// Headless frame rate
    #[arg(long, default_value_t = 60, value_parser = clap::value_parser!(u32).range(1..=1000))]
    fps: u32,

    /// Seed for furniture layout and note lanes (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// TrueType/OpenType font for window mode (a system font is searched otherwise)
    #[arg(long, value_name = "FILE")]
    font: Option<PathBuf>,

    /// Log filter, `env_logger` syntax (overrides RUST_LOG)
    #[arg(long, value_name = "FILTER")]
    log: Option<String>,
}

fn first_level(scene: Scene, seed: u64) -> Box<dyn Level> {
    match scene {
        Scene::Menu => Box::new(MenuLevel::new(seed)),
        Scene::House => Box::new(HouseLevel::new(seed)),
        Scene::Rhythm => Box::new(RhythmLevel::new(seed)),
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::default();
    if let Some(filter) = &cli.log {
        logging = logging.with_filter(filter.clone());
    }
    init_logging(logging);
    log::info!("args: {cli:?}");

    let seed = cli.seed.unwrap_or_else(rand::random);
    log::info!("seed {seed}");

    let mut game = Game::new(GameConfig::default()).context("invalid game configuration")?;
    game.load_level(first_level(cli.scene, seed));

    if cli.window {
        let viewport = game.viewport();
        let config = RuntimeConfig {
            title: "tremor".to_string(),
            initial_size: winit::dpi::LogicalSize::new(f64::from(viewport.width), f64::from(viewport.height)),
            ..RuntimeConfig::default()
        };
        let fonts = match &cli.font {
            Some(path) => FontSystem::from_path(path)?,
            None => FontSystem::system(),
        };
        let presenter = GpuPresenter::new(
            GpuPresenterConfig {
                clear: palette::rgb(0x10_10_18),
                ..GpuPresenterConfig::default()
            },
            fonts,
        );
        return Runtime::run(config, game, presenter);
    }

    let mut runner = Headless::new(game, cli.fps);
    let summary = runner.run_with(&mut Autopilot::new(), cli.seconds);
    log::info!(
        "headless run finished: {} frames, {:.1}s, levels {:?}{}",
        summary.frames,
        summary.seconds,
        summary.levels,
        if summary.exit_requested { ", exit requested" } else { "" }
    );
    Ok(())
}
