//! Flappy entry point
//!
//! Loads assets, sets up the terminal and runs the frame loop.

use std::io;
use std::path::Path;
use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use flappy::assets::AssetSet;
use flappy::consts::TICK_RATE_HZ;
use flappy::driver::FrameDriver;
use flappy::platform::{SystemClock, TerminalEvents, TerminalGuard};
use flappy::renderer::TerminalRenderer;
use flappy::sim::Session;
use flappy::{GameError, Tuning};

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Flappy starting...");

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), GameError> {
    let tuning = Tuning::default();
    tuning.validate()?;

    // Images and font stay loaded for as long as the game runs
    let _assets = AssetSet::load(Path::new("."))?;

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default();
    log::info!("Game initialized with seed: {}", seed);

    let _guard = TerminalGuard::enter()?;
    let (cols, rows) = crossterm::terminal::size()?;

    let clock = SystemClock::new();
    let session = Session::new(tuning, seed, 0);
    let renderer = TerminalRenderer::new(io::stdout(), cols, rows);

    FrameDriver::new(session, TerminalEvents, renderer, clock)
        .with_tick_rate(TICK_RATE_HZ)
        .run()
}
