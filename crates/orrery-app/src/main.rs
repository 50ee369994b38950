//! Orrery: interactive solar-system visualization, headless entry point.
//!
//! Loads configuration and the body catalog, assembles the simulation world
//! and camera, then runs the update loop: drain input commands, integrate
//! orbits, advance the camera fly-to, hand the frame to the renderer seam.
//!
//! Run with: `cargo run -p orrery-app -- --frames 600 --focus mars`

mod app;
mod frame_clock;
mod panel;
mod renderer;

use std::time::Duration;

use clap::Parser;
use tracing::{error, info};

use orrery_catalog::Catalog;
use orrery_config::{CliArgs, Config};
use orrery_input::Command;

use app::App;
use frame_clock::FrameClock;
use panel::TracePanel;
use renderer::TraceRenderer;

/// Headless pacing: roughly 60 frames per second.
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

fn main() {
    let args = CliArgs::parse();

    let config_dir = args.config.clone().or_else(Config::default_config_dir);
    let mut config = match &config_dir {
        Some(dir) => match Config::load_or_create(dir) {
            Ok(config) => config,
            Err(err) => {
                eprintln!("config error: {err}; falling back to defaults");
                Config::default()
            }
        },
        None => Config::default(),
    };
    config.apply_cli_overrides(&args);

    orrery_log::init_logging(None, cfg!(debug_assertions), Some(&config));

    let catalog = match Catalog::load_embedded() {
        Ok(catalog) => catalog,
        Err(err) => {
            error!("cannot load body catalog: {err}");
            return;
        }
    };

    let seed = config.sim.seed.unwrap_or_else(rand::random);
    info!("Orrery");
    info!(
        "Window: {}x{} | Bodies: {} | Seed: {seed}",
        config.window.width,
        config.window.height,
        catalog.len(),
    );

    let mut app = App::new(
        &config,
        &catalog,
        seed,
        Box::new(TraceRenderer::default()),
        Box::new(TracePanel),
    );

    if let Some(body) = &config.camera.initial_focus {
        app.sender().send(Command::FocusBody { id: body.clone() });
    }

    let mut clock = FrameClock::new();
    loop {
        let dt = clock.tick();
        app.step(dt, clock.now_ms());

        if args.frames.is_some_and(|n| clock.frame_count() >= n) {
            break;
        }
        std::thread::sleep(FRAME_INTERVAL);
    }

    info!("exiting after {} frames", clock.frame_count());
}
