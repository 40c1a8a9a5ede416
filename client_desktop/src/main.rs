//! Desktop Pong: human paddle on the left, computer on the right.
//!
//! Keys: arrows move, Space pauses, D toggles slow motion, Enter logs the
//! paddle, R resets the ball, F logs the last paddle contact, Escape quits.

mod app;
mod assets;
mod camera;
mod error;
mod input;
mod mesh;
mod renderer;

use std::path::{Path, PathBuf};

use app::App;
use assets::{Assets, ASSET_DIR};
use error::ClientError;
use game_core::Config;
use winit::event_loop::{ControlFlow, EventLoop};

/// Environment variable naming a JSON config file
const CONFIG_ENV: &str = "PONG_CONFIG";
/// Environment variable overriding the sprite directory
const ASSETS_ENV: &str = "PONG_ASSETS";

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run() {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), ClientError> {
    let config = match config_path() {
        Some(path) => load_config(&path)?,
        None => Config::new(),
    };
    config.validate()?;

    let asset_dir = std::env::var_os(ASSETS_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(ASSET_DIR));
    let assets = Assets::load(&asset_dir)?;

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(config, assets);
    event_loop.run_app(&mut app)?;

    match app.take_error() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

/// First CLI argument, else the environment
fn config_path() -> Option<PathBuf> {
    std::env::args_os()
        .nth(1)
        .or_else(|| std::env::var_os(CONFIG_ENV))
        .map(PathBuf::from)
}

fn load_config(path: &Path) -> Result<Config, ClientError> {
    let text = std::fs::read_to_string(path).map_err(|source| ClientError::ConfigIo {
        path: path.to_path_buf(),
        source,
    })?;
    let config = parse_config(&text).map_err(|source| ClientError::ConfigParse {
        path: path.to_path_buf(),
        source,
    })?;
    log::info!("Loaded config from {}", path.display());
    Ok(config)
}

fn parse_config(text: &str) -> Result<Config, serde_json::Error> {
    serde_json::from_str(text)
}
