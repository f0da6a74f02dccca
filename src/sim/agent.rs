//! Bird physics
//!
//! One explicit Euler step per tick under constant gravity. Motion is tied to
//! the tick count, not to elapsed time.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

/// The player-controlled bird
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Agent {
    /// Top-left corner; x never changes during a run
    pub pos: Vec2,
    /// Width and height of the bounding box
    pub size: Vec2,
    /// Vertical velocity in pixels/tick (positive = down)
    pub velocity: f32,
    pub gravity: f32,
    /// Impulse added per flap (negative)
    pub lift: f32,
    pub terminal_velocity: f32,
    /// Set while a pipe collision is being handled, cleared by reset
    pub colliding: bool,
}

impl Agent {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            pos: Vec2::new(tuning.bird_x, tuning.bird_start_y),
            size: Vec2::new(tuning.bird_width, tuning.bird_height),
            velocity: 0.0,
            gravity: tuning.gravity,
            lift: tuning.lift,
            terminal_velocity: tuning.terminal_velocity,
            colliding: false,
        }
    }

    /// Advance one tick: accelerate, move, then clamp velocity and position.
    ///
    /// Two quirks are kept on purpose: the velocity clamp always snaps to the
    /// positive bound (a fast climb turns into a fast fall), and only the
    /// ceiling absorbs momentum; resting on the floor keeps the velocity.
    pub fn integrate(&mut self, screen_height: f32) {
        self.velocity += self.gravity;
        self.pos.y += self.velocity;

        if self.velocity.abs() > self.terminal_velocity.abs() {
            self.velocity = self.terminal_velocity;
        }

        if self.pos.y < 0.0 {
            self.pos.y = 0.0;
            self.velocity = 0.0;
        } else if self.pos.y + self.size.y > screen_height {
            self.pos.y = screen_height - self.size.y;
        }
    }

    /// Apply one flap impulse. Clamping waits for the next `integrate`.
    #[inline]
    pub fn flap(&mut self) {
        self.velocity += self.lift;
    }

    /// Put the bird back at its starting position, at rest
    pub fn reset(&mut self, tuning: &Tuning) {
        self.pos = Vec2::new(tuning.bird_x, tuning.bird_start_y);
        self.velocity = 0.0;
        self.colliding = false;
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }
}
