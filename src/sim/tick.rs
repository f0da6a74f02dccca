//! Per-tick simulation step
//!
//! Advances the session by one frame and drives the phase machine:
//! Running -> Collided -> AwaitingRestart -> (Resetting) -> Running.

use super::collision::evaluate;
use super::state::{Session, SessionPhase};

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Flap impulses received this tick (mouse clicks and flap key presses)
    pub flaps: u32,
    /// Flap key pressed; restarts from the game-over screen
    pub restart: bool,
    /// Window closed / quit requested
    pub quit: bool,
}

/// What the caller should do after a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Continue,
    Quit,
}

/// Advance the session by one tick.
///
/// `now_ms` is the wall-clock time used only for the pipe spawn schedule;
/// all motion is a fixed amount per tick.
pub fn tick(session: &mut Session, input: &TickInput, now_ms: u64) -> TickOutcome {
    if input.quit {
        log::info!("Quit requested (score {})", session.score);
        return TickOutcome::Quit;
    }

    match session.phase {
        SessionPhase::Running => step_running(session, input, now_ms),
        SessionPhase::Collided => {
            // Overlay has been shown once; freeze until restart
            session.phase = SessionPhase::AwaitingRestart;
        }
        SessionPhase::AwaitingRestart => {
            if input.restart {
                session.restart();
            }
        }
        SessionPhase::Resetting => session.restart(),
    }

    TickOutcome::Continue
}

fn step_running(session: &mut Session, input: &TickInput, now_ms: u64) {
    session.time_ticks += 1;

    for _ in 0..input.flaps {
        session.agent.flap();
    }

    session
        .field
        .maybe_spawn(&mut session.spawn_timer, now_ms, &mut session.rng);
    session.field.advance();

    session.agent.integrate(session.tuning.screen_height);
    session.field.evict_offscreen();

    let verdict = evaluate(&session.agent, &mut session.field, &mut session.score);

    if verdict.collided && !session.agent.colliding {
        session.agent.colliding = true;
        session.phase = SessionPhase::Collided;
        log::info!("Game over! Final score: {}", session.score);
    } else if !verdict.collided {
        // Clears a flag left over from an overlap that never became a game over
        session.agent.colliding = false;
    }
}
