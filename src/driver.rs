//! Frame loop
//!
//! Each iteration polls input, advances the session one tick and hands the
//! result to the renderer. While waiting for a restart the last frame stays on
//! screen, so nothing is drawn.

use std::thread;
use std::time::{Duration, Instant};

use crate::error::GameError;
use crate::platform::{Clock, EventSource, InputEvent, tick_input};
use crate::renderer::{FrameView, Renderer};
use crate::sim::{Session, SessionPhase, TickOutcome, tick};

/// Owns the session and its collaborators for the lifetime of the game
pub struct FrameDriver<E, R, C> {
    session: Session,
    events: E,
    renderer: R,
    clock: C,
    /// Minimum wall time per iteration; `None` runs flat out
    tick_period: Option<Duration>,
}

impl<E: EventSource, R: Renderer, C: Clock> FrameDriver<E, R, C> {
    pub fn new(session: Session, events: E, renderer: R, clock: C) -> Self {
        Self {
            session,
            events,
            renderer,
            clock,
            tick_period: None,
        }
    }

    /// Sleep out the rest of each iteration so ticks happen at most `hz` times a second
    pub fn with_tick_rate(mut self, hz: u32) -> Self {
        self.tick_period = (hz > 0).then(|| Duration::from_secs(1) / hz);
        self
    }

    /// Run a single iteration
    pub fn step(&mut self) -> Result<TickOutcome, GameError> {
        let events = self.events.poll()?;
        for event in &events {
            if let InputEvent::Resize { cols, rows } = *event {
                self.renderer.resize(cols, rows)?;
            }
        }
        let input = tick_input(&events);

        let outcome = tick(&mut self.session, &input, self.clock.now_ms());
        if outcome == TickOutcome::Quit {
            return Ok(outcome);
        }

        if self.session.phase != SessionPhase::AwaitingRestart {
            self.renderer.render(&FrameView::capture(&self.session))?;
        }
        Ok(outcome)
    }

    /// Loop until a quit input arrives
    pub fn run(&mut self) -> Result<(), GameError> {
        log::info!("Frame loop started");
        loop {
            let started = Instant::now();
            if self.step()? == TickOutcome::Quit {
                log::info!("Frame loop stopped after {} ticks", self.session.time_ticks);
                return Ok(());
            }
            if let Some(period) = self.tick_period {
                if let Some(rest) = period.checked_sub(started.elapsed()) {
                    thread::sleep(rest);
                }
            }
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }
}
