//! Flappy - a side-scrolling pipe-dodging arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (agent physics, pipes, collisions, session phases)
//! - `driver`: Frame loop tying input, simulation and rendering together
//! - `renderer`: Rendering seam plus a terminal implementation
//! - `platform`: Input events, clocks and terminal setup
//! - `assets`: Startup asset loading
//! - `tuning`: Data-driven game balance

pub mod assets;
pub mod driver;
pub mod error;
pub mod platform;
pub mod renderer;
pub mod sim;
pub mod tuning;

pub use error::GameError;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Logical display size
    pub const SCREEN_WIDTH: f32 = 1200.0;
    pub const SCREEN_HEIGHT: f32 = 600.0;

    /// Bird defaults - x stays fixed for the whole run
    pub const BIRD_X: f32 = SCREEN_WIDTH / 8.0;
    pub const BIRD_START_Y: f32 = SCREEN_HEIGHT / 2.0;
    pub const BIRD_WIDTH: f32 = 50.0;
    pub const BIRD_HEIGHT: f32 = 50.0;

    /// Downward acceleration per tick (pixels/tick²)
    pub const GRAVITY: f32 = 0.008;
    /// Velocity impulse per flap (negative = up)
    pub const LIFT: f32 = -2.0;
    /// Velocity bound applied after each integration step
    pub const TERMINAL_VELOCITY: f32 = 6.0;

    /// Pipe defaults
    pub const PIPE_GAP_HEIGHT: f32 = 250.0;
    pub const PIPE_WIDTH: f32 = 50.0;
    /// Horizontal distance every pipe moves per tick
    pub const PIPE_SCROLL_STEP: f32 = 1.0;
    /// Wall-clock time between pipe spawns
    pub const PIPE_SPAWN_INTERVAL_MS: u64 = 2000;

    /// Frame loop rate used by the terminal binary
    pub const TICK_RATE_HZ: u32 = 500;

    /// Asset locations, relative to the working directory
    pub const BIRD_SPRITE_PATH: &str = "assets/img/bird.png";
    pub const UPPER_PIPE_SPRITE_PATH: &str = "assets/img/pipeUpper.png";
    pub const LOWER_PIPE_SPRITE_PATH: &str = "assets/img/pipeUnder.png";
    pub const BACKGROUND_PATH: &str = "assets/img/bg.jpg";
    pub const FONT_PATH: &str = "font.ttf";
}
