//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed per-tick motion only
//! - Seeded RNG only
//! - Stable iteration order (pipes left to right)
//! - No rendering or platform dependencies

pub mod agent;
pub mod collision;
pub mod obstacle;
pub mod state;
pub mod tick;

pub use agent::Agent;
pub use collision::{Verdict, evaluate, hits_obstacle};
pub use obstacle::{Obstacle, ObstacleField, SpawnTimer};
pub use state::{Session, SessionPhase};
pub use tick::{TickInput, TickOutcome, tick};
