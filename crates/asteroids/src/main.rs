//! Headless asteroids session driven by the autopilot

use std::path::PathBuf;

use anyhow::{Context, Result};
use asteroids::{AsteroidsApp, Autopilot, GameConfig};
use clap::{value_parser, Arg, ArgAction, Command};
use rust_engine::foundation::logging;
use rust_engine::render::RecordingRenderer;
use rust_engine::Engine;

const DEFAULT_FRAMES: u64 = 3600;
const FALLBACK_FPS: u32 = 60;

fn main() -> Result<()> {
    logging::init();

    let matches = Command::new("asteroids")
        .about("Runs a headless asteroids session flown by the autopilot")
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("Game configuration file (.toml or .ron)")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("seed")
                .short('s')
                .long("seed")
                .value_name("SEED")
                .help("Seed for asteroid generation")
                .value_parser(value_parser!(u64)),
        )
        .arg(
            Arg::new("frames")
                .short('f')
                .long("frames")
                .value_name("COUNT")
                .help("Frames to simulate before closing")
                .value_parser(value_parser!(u64)),
        )
        .arg(
            Arg::new("uncapped")
                .long("uncapped")
                .help("Run as fast as possible instead of at the target frame rate")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let config_path = matches.get_one::<PathBuf>("config");
    let mut config = GameConfig::load_or_default(config_path.map(PathBuf::as_path))
        .context("Invalid game configuration")?;

    if let Some(seed) = matches.get_one::<u64>("seed") {
        config.seed = Some(*seed);
    }
    if matches.get_flag("uncapped") {
        config.engine.target_fps = 0;
    }
    // Headless sessions have no wall-clock input, so step at the nominal rate
    if config.engine.fixed_timestep.is_none() {
        let fps = if config.engine.target_fps > 0 {
            config.engine.target_fps
        } else {
            FALLBACK_FPS
        };
        config.engine.fixed_timestep = Some(1.0 / fps as f32);
    }

    let frames = matches
        .get_one::<u64>("frames")
        .copied()
        .or(config.engine.max_frames)
        .unwrap_or(DEFAULT_FRAMES);

    log::info!(
        "Starting headless session: {frames} frames, seed {}",
        config.seed.map_or_else(|| "random".to_string(), |seed| seed.to_string())
    );

    let autopilot = Autopilot::new(config.controls.clone(), frames);
    let mut engine = Engine::new(
        config.engine.clone(),
        Box::new(RecordingRenderer::new()),
        Box::new(autopilot),
    )
    .context("Failed to create engine")?;

    let mut app = AsteroidsApp::new(config).context("Invalid game configuration")?;
    engine.run(&mut app).context("Session aborted")?;

    let state = app.game().state();
    let presented = engine
        .renderer()
        .as_any()
        .downcast_ref::<RecordingRenderer>()
        .map_or(0, RecordingRenderer::frames_presented);

    log::info!(
        "Frames: {} simulated, {presented} presented",
        app.frames()
    );
    log::info!(
        "Final match: score {}, lives {}, {} asteroids left{}",
        state.score,
        state.lives,
        state.asteroids.len(),
        if state.game_over { ", game over" } else { "" }
    );
    log::info!(
        "Session: {} matches, best score {}",
        app.matches_played(),
        app.best_score()
    );

    Ok(())
}
