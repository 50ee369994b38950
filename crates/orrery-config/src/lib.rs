//! Configuration system for the orrery.
//!
//! Runtime-configurable settings persisted to disk as RON, with CLI
//! overrides via clap, hot-reload detection, and forward/backward
//! compatible serialization.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{CameraConfig, Config, DebugConfig, SceneConfig, SimConfig, WindowConfig};
pub use error::ConfigError;
