//! Rendering module
//!
//! The simulation hands each frame to a `Renderer` as a `FrameView`: sprite
//! blits, the score line and, on the tick a run ends, the game-over overlay.

pub mod shapes;
pub mod terminal;

pub use shapes::{DrawCommand, Rect, Sprite};
pub use terminal::TerminalRenderer;

use crate::error::GameError;
use crate::sim::{Session, SessionPhase};

/// Game-over text, drawn once when a run ends
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOverOverlay {
    pub final_score: u32,
}

impl GameOverOverlay {
    /// Title, score and restart prompt, top to bottom
    pub fn lines(&self) -> [String; 3] {
        [
            "Game Over!".to_string(),
            format!("Your Score: {}", self.final_score),
            "Press SPACE to play again".to_string(),
        ]
    }
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, PartialEq)]
pub struct FrameView {
    pub screen_width: f32,
    pub screen_height: f32,
    /// Back-to-front sprite blits
    pub commands: Vec<DrawCommand>,
    pub score: u32,
    pub overlay: Option<GameOverOverlay>,
}

impl FrameView {
    pub fn capture(session: &Session) -> Self {
        let overlay = (session.phase == SessionPhase::Collided).then(|| GameOverOverlay {
            final_score: session.score,
        });
        Self {
            screen_width: session.tuning.screen_width,
            screen_height: session.tuning.screen_height,
            commands: shapes::scene(session),
            score: session.score,
            overlay,
        }
    }

    pub fn score_text(&self) -> String {
        format!("Score: {}", self.score)
    }
}

/// Output backend
pub trait Renderer {
    fn render(&mut self, frame: &FrameView) -> Result<(), GameError>;

    /// The output surface changed size
    fn resize(&mut self, _cols: u16, _rows: u16) -> Result<(), GameError> {
        Ok(())
    }
}
