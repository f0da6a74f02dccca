//! Session state
//!
//! Everything a run mutates lives in one owned `Session`, handed by `&mut` to
//! each simulation step.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::agent::Agent;
use super::obstacle::{ObstacleField, SpawnTimer};
use crate::tuning::Tuning;

/// Current phase of the run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    /// Active gameplay
    Running,
    /// A pipe was hit this tick; the game-over overlay is shown once
    Collided,
    /// Frozen on the game-over screen until restart or quit
    AwaitingRestart,
    /// Clearing the field; never observed between ticks
    Resetting,
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    /// Seed the gap RNG was created from
    pub seed: u64,
    pub tuning: Tuning,
    pub agent: Agent,
    pub field: ObstacleField,
    /// Pipes cleared this run
    pub score: u32,
    pub spawn_timer: SpawnTimer,
    pub phase: SessionPhase,
    /// Running ticks since startup (not reset between runs)
    pub time_ticks: u64,
    /// Gap placement RNG
    pub(crate) rng: Pcg32,
}

impl Session {
    /// Create a session; the first pipe waits a full interval from `now_ms`
    pub fn new(tuning: Tuning, seed: u64, now_ms: u64) -> Self {
        Self {
            seed,
            agent: Agent::new(&tuning),
            field: ObstacleField::new(&tuning),
            score: 0,
            spawn_timer: SpawnTimer::new(now_ms, tuning.spawn_interval_ms),
            phase: SessionPhase::Running,
            time_ticks: 0,
            rng: Pcg32::seed_from_u64(seed),
            tuning,
        }
    }

    /// Go through `Resetting` back to `Running` with a fresh run.
    ///
    /// The spawn timer is left alone, so time spent on the game-over screen
    /// counts toward the next pipe.
    pub fn restart(&mut self) {
        self.phase = SessionPhase::Resetting;
        self.field.clear();
        self.score = 0;
        self.agent.reset(&self.tuning);
        self.phase = SessionPhase::Running;
        log::info!("Game reset");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::obstacle::Obstacle;

    #[test]
    fn test_new_session() {
        let session = Session::new(Tuning::default(), 1, 500);
        assert_eq!(session.phase, SessionPhase::Running);
        assert_eq!(session.score, 0);
        assert!(session.field.is_empty());
        assert_eq!(session.spawn_timer.last_spawn_ms, 500);
        assert_eq!(session.spawn_timer.interval_ms, 2000);
        assert!(!session.agent.colliding);
    }

    #[test]
    fn test_restart_clears_run() {
        let mut session = Session::new(Tuning::default(), 1, 0);
        session.field.push(Obstacle::new(100.0, 300.0));
        session.score = 7;
        session.agent.pos.y = 10.0;
        session.agent.velocity = 3.0;
        session.agent.colliding = true;
        session.phase = SessionPhase::AwaitingRestart;
        session.spawn_timer.last_spawn_ms = 1234;

        session.restart();

        assert_eq!(session.phase, SessionPhase::Running);
        assert_eq!(session.score, 0);
        assert!(session.field.is_empty());
        assert_eq!(session.agent, Agent::new(&session.tuning));
        assert_eq!(session.spawn_timer.last_spawn_ms, 1234);
    }
}
