//! Input events and their mapping onto simulation input

use std::collections::VecDeque;

use crate::error::GameError;
use crate::sim::TickInput;

/// Platform-neutral input events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// The flap key (space). Flaps while running, restarts after a game over.
    FlapKey,
    /// Mouse button pressed. Flaps while running only.
    MouseDown,
    /// Window closed / quit requested
    Quit,
    /// Output surface changed size; never reaches the simulation
    Resize { cols: u16, rows: u16 },
}

/// Anything that can be drained of pending input once per tick
pub trait EventSource {
    /// Return every event that arrived since the last poll, without blocking
    fn poll(&mut self) -> Result<Vec<InputEvent>, GameError>;
}

/// Fold one tick's events into a `TickInput`
pub fn tick_input(events: &[InputEvent]) -> TickInput {
    let mut input = TickInput::default();
    for event in events {
        match event {
            InputEvent::FlapKey => {
                input.flaps += 1;
                input.restart = true;
            }
            InputEvent::MouseDown => input.flaps += 1,
            InputEvent::Quit => input.quit = true,
            InputEvent::Resize { .. } => {}
        }
    }
    input
}

/// Replays a fixed script, one batch per poll; empty once exhausted
#[derive(Debug, Clone, Default)]
pub struct ScriptedEvents {
    frames: VecDeque<Vec<InputEvent>>,
}

impl ScriptedEvents {
    pub fn new(frames: impl IntoIterator<Item = Vec<InputEvent>>) -> Self {
        Self {
            frames: frames.into_iter().collect(),
        }
    }
}

impl EventSource for ScriptedEvents {
    fn poll(&mut self) -> Result<Vec<InputEvent>, GameError> {
        Ok(self.frames.pop_front().unwrap_or_default())
    }
}
