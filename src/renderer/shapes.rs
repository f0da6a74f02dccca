//! Destination rectangles for every sprite in a frame

use serde::{Deserialize, Serialize};

use crate::sim::{Agent, Obstacle, ObstacleField, Session};

/// Axis-aligned rectangle in world pixels (top-left origin)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }
}

/// Which image a rectangle is filled with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sprite {
    Background,
    Bird,
    UpperPipe,
    LowerPipe,
}

/// One sprite blit
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DrawCommand {
    pub sprite: Sprite,
    pub rect: Rect,
}

/// Full-screen background
pub fn background(screen_width: f32, screen_height: f32) -> DrawCommand {
    DrawCommand {
        sprite: Sprite::Background,
        rect: Rect::new(0.0, 0.0, screen_width, screen_height),
    }
}

/// The bird's bounding box
pub fn bird(agent: &Agent) -> DrawCommand {
    DrawCommand {
        sprite: Sprite::Bird,
        rect: Rect::new(agent.pos.x, agent.pos.y, agent.size.x, agent.size.y),
    }
}

/// Upper column from the ceiling to the gap, lower column from the gap to the floor
pub fn pipe_pair(field: &ObstacleField, obstacle: &Obstacle, screen_height: f32) -> [DrawCommand; 2] {
    let gap_top = obstacle.gap_top(field.gap_height);
    let gap_bottom = obstacle.gap_bottom(field.gap_height);
    [
        DrawCommand {
            sprite: Sprite::UpperPipe,
            rect: Rect::new(obstacle.x, 0.0, field.width, gap_top),
        },
        DrawCommand {
            sprite: Sprite::LowerPipe,
            rect: Rect::new(obstacle.x, gap_bottom, field.width, screen_height - gap_bottom),
        },
    ]
}

/// Every blit for a session, back to front: background, bird, then pipes
pub fn scene(session: &Session) -> Vec<DrawCommand> {
    let tuning = &session.tuning;
    let mut commands = Vec::with_capacity(2 + session.field.len() * 2);
    commands.push(background(tuning.screen_width, tuning.screen_height));
    commands.push(bird(&session.agent));
    for obstacle in session.field.iter() {
        commands.extend(pipe_pair(&session.field, obstacle, tuning.screen_height));
    }
    commands
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuning::Tuning;

    #[test]
    fn test_pipe_pair_geometry() {
        let field = ObstacleField::new(&Tuning::default());
        let [upper, lower] = pipe_pair(&field, &Obstacle::new(300.0, 300.0), 600.0);

        assert_eq!(upper.sprite, Sprite::UpperPipe);
        assert_eq!(upper.rect, Rect::new(300.0, 0.0, 50.0, 175.0));
        assert_eq!(lower.sprite, Sprite::LowerPipe);
        assert_eq!(lower.rect, Rect::new(300.0, 425.0, 50.0, 175.0));
        assert_eq!(lower.rect.bottom(), 600.0);
    }

    #[test]
    fn test_scene_order() {
        let mut session = Session::new(Tuning::default(), 1, 0);
        session.field.push(Obstacle::new(400.0, 200.0));
        session.field.push(Obstacle::new(800.0, 300.0));

        let sprites: Vec<_> = scene(&session).iter().map(|c| c.sprite).collect();
        assert_eq!(
            sprites,
            vec![
                Sprite::Background,
                Sprite::Bird,
                Sprite::UpperPipe,
                Sprite::LowerPipe,
                Sprite::UpperPipe,
                Sprite::LowerPipe,
            ]
        );
    }

    #[test]
    fn test_bird_rect() {
        let agent = Agent::new(&Tuning::default());
        let cmd = bird(&agent);
        assert_eq!(cmd.rect, Rect::new(150.0, 300.0, 50.0, 50.0));
        assert_eq!(cmd.rect.right(), 200.0);
    }
}
