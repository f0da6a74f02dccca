//! Platform abstraction layer
//!
//! Handles the parts of the outside world the simulation consumes:
//! - Input events
//! - Time/ticks
//! - Terminal setup and teardown

pub mod input;
pub mod terminal;
pub mod time;

pub use input::{EventSource, InputEvent, ScriptedEvents, tick_input};
pub use terminal::{TerminalEvents, TerminalGuard};
pub use time::{Clock, ManualClock, SystemClock};
