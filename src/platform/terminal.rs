//! Terminal setup and crossterm-backed input
//!
//! Space flaps (and restarts), any mouse button flaps, Esc / q / Ctrl-C quit.
//! Terminal resizes are passed through for the renderer.

use std::io::{self, Write};
use std::time::Duration;

use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
    KeyModifiers, MouseEventKind,
};
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{cursor, execute};

use super::input::{EventSource, InputEvent};
use crate::error::GameError;

/// Puts the terminal into game mode and restores it on drop
pub struct TerminalGuard {
    _private: (),
}

impl TerminalGuard {
    pub fn enter() -> Result<Self, GameError> {
        terminal::enable_raw_mode()?;
        let mut out = io::stdout();
        if let Err(e) = execute!(
            out,
            EnterAlternateScreen,
            EnableMouseCapture,
            cursor::Hide,
            terminal::DisableLineWrap,
        ) {
            let _ = terminal::disable_raw_mode();
            return Err(e.into());
        }
        Ok(Self { _private: () })
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let mut out = io::stdout();
        let _ = execute!(
            out,
            terminal::EnableLineWrap,
            cursor::Show,
            DisableMouseCapture,
            LeaveAlternateScreen,
        );
        let _ = out.flush();
        if let Err(e) = terminal::disable_raw_mode() {
            log::warn!("Failed to leave raw mode: {}", e);
        }
    }
}

/// Non-blocking crossterm event source
#[derive(Debug, Default)]
pub struct TerminalEvents;

impl EventSource for TerminalEvents {
    fn poll(&mut self) -> Result<Vec<InputEvent>, GameError> {
        let mut events = Vec::new();
        while event::poll(Duration::ZERO)? {
            if let Some(input) = map_event(&event::read()?) {
                events.push(input);
            }
        }
        Ok(events)
    }
}

/// Translate a raw terminal event into a game input, if it is one
pub fn map_event(event: &Event) -> Option<InputEvent> {
    match event {
        Event::Key(key) => map_key(key),
        Event::Mouse(mouse) => match mouse.kind {
            MouseEventKind::Down(_) => Some(InputEvent::MouseDown),
            _ => None,
        },
        Event::Resize(cols, rows) => Some(InputEvent::Resize {
            cols: *cols,
            rows: *rows,
        }),
        _ => None,
    }
}

fn map_key(key: &KeyEvent) -> Option<InputEvent> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    match key.code {
        KeyCode::Char(' ') => Some(InputEvent::FlapKey),
        KeyCode::Esc | KeyCode::Char('q') => Some(InputEvent::Quit),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(InputEvent::Quit)
        }
        _ => None,
    }
}
