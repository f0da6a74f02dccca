//! Game balance values
//!
//! Every number the simulation reads lives here so tests can build odd
//! geometries without touching the constants.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::GameError;

/// Tunable simulation parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Screen ===
    pub screen_width: f32,
    pub screen_height: f32,

    // === Bird ===
    /// Fixed horizontal position of the bird's left edge
    pub bird_x: f32,
    /// Vertical position the bird starts (and restarts) at
    pub bird_start_y: f32,
    pub bird_width: f32,
    pub bird_height: f32,
    pub gravity: f32,
    pub lift: f32,
    pub terminal_velocity: f32,

    // === Pipes ===
    pub gap_height: f32,
    pub pipe_width: f32,
    pub scroll_step: f32,
    pub spawn_interval_ms: u64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,

            bird_x: BIRD_X,
            bird_start_y: BIRD_START_Y,
            bird_width: BIRD_WIDTH,
            bird_height: BIRD_HEIGHT,
            gravity: GRAVITY,
            lift: LIFT,
            terminal_velocity: TERMINAL_VELOCITY,

            gap_height: PIPE_GAP_HEIGHT,
            pipe_width: PIPE_WIDTH,
            scroll_step: PIPE_SCROLL_STEP,
            spawn_interval_ms: PIPE_SPAWN_INTERVAL_MS,
        }
    }
}

impl Tuning {
    /// Parse tuning from JSON; missing fields fall back to the defaults
    pub fn from_json(json: &str) -> Result<Self, GameError> {
        let tuning: Self = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Reject values that cannot produce a playable field
    pub fn validate(&self) -> Result<(), GameError> {
        if self.screen_width <= 0.0 || self.screen_height <= 0.0 {
            return Err(GameError::InvalidTuning(format!(
                "screen must have a positive size, got {}x{}",
                self.screen_width, self.screen_height
            )));
        }
        if self.bird_width <= 0.0 || self.bird_height <= 0.0 {
            return Err(GameError::InvalidTuning(
                "bird must have a positive size".to_string(),
            ));
        }
        if self.bird_height > self.screen_height {
            return Err(GameError::InvalidTuning(format!(
                "bird height {} does not fit a screen of height {}",
                self.bird_height, self.screen_height
            )));
        }
        if self.pipe_width <= 0.0 || self.gap_height <= 0.0 {
            return Err(GameError::InvalidTuning(
                "pipes must have a positive width and gap".to_string(),
            ));
        }
        // The gap center is drawn from [0, screen_height - gap_height), which must not be empty
        if self.screen_height - self.gap_height < 1.0 {
            return Err(GameError::InvalidTuning(format!(
                "gap height {} leaves no room on a screen of height {}",
                self.gap_height, self.screen_height
            )));
        }
        if self.terminal_velocity <= 0.0 {
            return Err(GameError::InvalidTuning(
                "terminal velocity must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_consts() {
        let tuning = Tuning::default();
        assert_eq!(tuning.screen_width, 1200.0);
        assert_eq!(tuning.screen_height, 600.0);
        assert_eq!(tuning.bird_x, 150.0);
        assert_eq!(tuning.bird_start_y, 300.0);
        assert_eq!(tuning.spawn_interval_ms, 2000);
        assert!(tuning.validate().is_ok());
    }

    #[test]
    fn test_from_json_partial() {
        let tuning = Tuning::from_json(r#"{ "gravity": 0.5, "gap_height": 100.0 }"#).unwrap();
        assert_eq!(tuning.gravity, 0.5);
        assert_eq!(tuning.gap_height, 100.0);
        // Untouched fields keep their defaults
        assert_eq!(tuning.lift, LIFT);
    }

    #[test]
    fn test_gap_taller_than_screen_rejected() {
        let result = Tuning::from_json(r#"{ "gap_height": 600.0 }"#);
        assert!(matches!(result, Err(GameError::InvalidTuning(_))));
    }

    #[test]
    fn test_bad_json_rejected() {
        let result = Tuning::from_json("{ not json");
        assert!(matches!(result, Err(GameError::TuningParse(_))));
    }
}
