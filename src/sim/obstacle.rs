//! Pipe field: spawning, scrolling and eviction
//!
//! Pipes enter at the right edge and all move left by the same step, so
//! insertion order is also left-to-right order. Eviction only ever looks at
//! the front of the queue.

use std::collections::VecDeque;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

/// A single pipe pair with a gap
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    /// Left edge
    pub x: f32,
    /// Vertical center of the gap, fixed at spawn
    pub gap_center: f32,
    /// Set once the bird has cleared this pipe
    pub passed: bool,
}

impl Obstacle {
    pub fn new(x: f32, gap_center: f32) -> Self {
        Self {
            x,
            gap_center,
            passed: false,
        }
    }

    /// Top edge of the gap
    #[inline]
    pub fn gap_top(&self, gap_height: f32) -> f32 {
        self.gap_center - gap_height / 2.0
    }

    /// Bottom edge of the gap
    #[inline]
    pub fn gap_bottom(&self, gap_height: f32) -> f32 {
        self.gap_center + gap_height / 2.0
    }

    /// Right edge of the pipe column
    #[inline]
    pub fn trailing_edge(&self, width: f32) -> f32 {
        self.x + width
    }
}

/// Wall-clock spawn schedule (milliseconds)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpawnTimer {
    pub last_spawn_ms: u64,
    pub interval_ms: u64,
}

impl SpawnTimer {
    pub fn new(now_ms: u64, interval_ms: u64) -> Self {
        Self {
            last_spawn_ms: now_ms,
            interval_ms,
        }
    }

    /// True once strictly more than one interval has elapsed
    #[inline]
    pub fn is_due(&self, now_ms: u64) -> bool {
        now_ms.saturating_sub(self.last_spawn_ms) > self.interval_ms
    }
}

/// Ordered collection of live pipes (leftmost first)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObstacleField {
    obstacles: VecDeque<Obstacle>,
    /// Height of every gap
    pub gap_height: f32,
    /// Width of every pipe
    pub width: f32,
    pub scroll_step: f32,
    screen_width: f32,
    screen_height: f32,
}

impl ObstacleField {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            obstacles: VecDeque::new(),
            gap_height: tuning.gap_height,
            width: tuning.pipe_width,
            scroll_step: tuning.scroll_step,
            screen_width: tuning.screen_width,
            screen_height: tuning.screen_height,
        }
    }

    /// Spawn a pipe at the right edge if the timer is due.
    ///
    /// The gap center is drawn from `[gap/2, screen_height - gap/2)` in whole
    /// pixels so the gap always fits on screen. Returns true when a pipe was added.
    pub fn maybe_spawn<R: Rng + ?Sized>(
        &mut self,
        timer: &mut SpawnTimer,
        now_ms: u64,
        rng: &mut R,
    ) -> bool {
        if !timer.is_due(now_ms) {
            return false;
        }

        let span = (self.screen_height - self.gap_height).max(1.0) as u32;
        let gap_center = rng.random_range(0..span) as f32 + self.gap_height / 2.0;
        self.push(Obstacle::new(self.screen_width, gap_center));
        timer.last_spawn_ms = now_ms;

        log::debug!("Spawned pipe with gap at {}", gap_center);
        true
    }

    /// Append a pipe at the back; callers must keep x ascending
    pub fn push(&mut self, obstacle: Obstacle) {
        debug_assert!(
            self.obstacles.back().is_none_or(|last| last.x <= obstacle.x),
            "pipes must be appended in ascending x order"
        );
        self.obstacles.push_back(obstacle);
    }

    /// Move every pipe left by one scroll step
    pub fn advance(&mut self) {
        for obstacle in &mut self.obstacles {
            obstacle.x -= self.scroll_step;
        }
    }

    /// Drop pipes whose trailing edge has left the screen. Returns how many went.
    pub fn evict_offscreen(&mut self) -> usize {
        let mut evicted = 0;
        while self
            .obstacles
            .front()
            .is_some_and(|front| front.trailing_edge(self.width) < 0.0)
        {
            self.obstacles.pop_front();
            evicted += 1;
        }
        evicted
    }

    /// Remove every pipe
    pub fn clear(&mut self) {
        self.obstacles.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &Obstacle> {
        self.obstacles.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Obstacle> {
        self.obstacles.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }
}
