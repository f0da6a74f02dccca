//! Collision detection and scoring
//!
//! Axis-aligned boxes only: the bird box against each pipe column, where the
//! gap is the only safe part of the column. Screen edges never end a run.

use super::agent::Agent;
use super::obstacle::{Obstacle, ObstacleField};

/// Outcome of one evaluation pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Verdict {
    /// Whether the bird hit a pipe
    pub collided: bool,
    /// Pipes newly cleared during this pass
    pub scored: u32,
}

/// Check whether the bird's box hits the solid part of a pipe.
///
/// A hit needs horizontal overlap and the bird sticking out of the gap above
/// or below. Touching edges do not count.
pub fn hits_obstacle(agent: &Agent, obstacle: &Obstacle, width: f32, gap_height: f32) -> bool {
    let horizontal_overlap = agent.right() > obstacle.x && agent.left() < obstacle.trailing_edge(width);
    if !horizontal_overlap {
        return false;
    }

    agent.top() < obstacle.gap_top(gap_height) || agent.bottom() > obstacle.gap_bottom(gap_height)
}

/// Score newly cleared pipes and look for the first collision.
///
/// Pipes are visited left to right. Scoring is checked for each pipe before its
/// collision test, and the pass stops at the first pipe the bird hits.
pub fn evaluate(agent: &Agent, field: &mut ObstacleField, score: &mut u32) -> Verdict {
    let width = field.width;
    let gap_height = field.gap_height;
    let mut verdict = Verdict::default();

    for obstacle in field.iter_mut() {
        if !obstacle.passed && agent.left() > obstacle.trailing_edge(width) {
            obstacle.passed = true;
            *score += 1;
            verdict.scored += 1;
            log::info!("Score: {}", score);
        }

        if hits_obstacle(agent, obstacle, width, gap_height) {
            verdict.collided = true;
            break;
        }
    }

    verdict
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuning::Tuning;
    use proptest::prelude::*;

    fn setup(bird_y: f32) -> (Agent, ObstacleField) {
        let tuning = Tuning::default();
        let mut agent = Agent::new(&tuning);
        agent.pos.y = bird_y;
        (agent, ObstacleField::new(&tuning))
    }

    #[test]
    fn test_bird_above_gap_collides() {
        // Bird x in [150, 200], y in [100, 150]; gap is [175, 425]
        let (agent, mut field) = setup(100.0);
        field.push(Obstacle::new(150.0, 300.0));
        let mut score = 0;

        let verdict = evaluate(&agent, &mut field, &mut score);
        assert!(verdict.collided);
        assert_eq!(score, 0);
    }

    #[test]
    fn test_bird_inside_gap_is_safe() {
        let (agent, mut field) = setup(200.0);
        field.push(Obstacle::new(150.0, 300.0));
        let mut score = 0;

        assert!(!evaluate(&agent, &mut field, &mut score).collided);
    }

    #[test]
    fn test_bird_below_gap_collides() {
        let (agent, mut field) = setup(400.0);
        field.push(Obstacle::new(170.0, 300.0));
        let mut score = 0;

        assert!(evaluate(&agent, &mut field, &mut score).collided);
    }

    #[test]
    fn test_touching_edges_do_not_collide() {
        let (agent, field) = setup(0.0);
        // Pipe starts exactly at the bird's right edge
        assert!(!hits_obstacle(&agent, &Obstacle::new(200.0, 300.0), field.width, field.gap_height));
        // Pipe ends exactly at the bird's left edge
        assert!(!hits_obstacle(&agent, &Obstacle::new(100.0, 300.0), field.width, field.gap_height));
    }

    #[test]
    fn test_scores_once_per_pipe() {
        let (mut agent, mut field) = setup(300.0);
        agent.pos.x = 210.0;
        field.push(Obstacle::new(150.0, 300.0));
        let mut score = 0;

        let verdict = evaluate(&agent, &mut field, &mut score);
        assert_eq!(verdict.scored, 1);
        assert_eq!(score, 1);
        assert!(field.iter().all(|p| p.passed));

        let verdict = evaluate(&agent, &mut field, &mut score);
        assert_eq!(verdict.scored, 0);
        assert_eq!(score, 1);
    }

    #[test]
    fn test_wide_pipe_scores_on_its_own_trailing_edge() {
        let (agent, mut field) = setup(300.0);
        field.width = 100.0;
        // Trailing edge 160 is still right of the bird's left edge (150)
        field.push(Obstacle::new(60.0, 300.0));
        let mut score = 0;

        let verdict = evaluate(&agent, &mut field, &mut score);
        assert_eq!(verdict, Verdict::default());

        // x = 50 puts the trailing edge exactly on the bird's left edge
        for _ in 0..10 {
            field.advance();
        }
        assert_eq!(evaluate(&agent, &mut field, &mut score).scored, 0);
        field.advance();
        assert_eq!(evaluate(&agent, &mut field, &mut score).scored, 1);
    }

    #[test]
    fn test_scores_every_cleared_pipe() {
        let (mut agent, mut field) = setup(300.0);
        agent.pos.x = 500.0;
        field.push(Obstacle::new(100.0, 300.0));
        field.push(Obstacle::new(300.0, 300.0));
        field.push(Obstacle::new(460.0, 300.0));
        let mut score = 0;

        let verdict = evaluate(&agent, &mut field, &mut score);
        assert_eq!(verdict.scored, 2);
        assert_eq!(score, 2);
        assert!(!verdict.collided);
    }

    #[test]
    fn test_pipes_left_of_collision_still_score() {
        let (mut agent, mut field) = setup(0.0);
        agent.pos.x = 500.0;
        field.push(Obstacle::new(400.0, 300.0));
        field.push(Obstacle::new(480.0, 300.0));
        let mut score = 0;

        let verdict = evaluate(&agent, &mut field, &mut score);
        assert!(verdict.collided);
        assert_eq!(verdict.scored, 1);
        assert_eq!(score, 1);
        let passed: Vec<_> = field.iter().map(|p| p.passed).collect();
        assert_eq!(passed, vec![true, false]);
    }

    #[test]
    fn test_screen_edges_are_not_collisions() {
        let (agent, mut field) = setup(0.0);
        let mut score = 0;
        assert!(!evaluate(&agent, &mut field, &mut score).collided);

        let (agent, mut field) = setup(550.0);
        assert!(!evaluate(&agent, &mut field, &mut score).collided);
    }

    proptest! {
        #[test]
        fn prop_collision_matches_box_rule(
            bird_y in 0.0f32..550.0,
            pipe_x in -60.0f32..260.0,
            gap_center in 125.0f32..475.0,
        ) {
            let (agent, field) = setup(bird_y);
            let pipe = Obstacle::new(pipe_x, gap_center);

            let overlap = agent.right() > pipe_x && agent.left() < pipe_x + 50.0;
            let outside_gap = agent.top() < gap_center - 125.0 || agent.bottom() > gap_center + 125.0;
            prop_assert_eq!(
                hits_obstacle(&agent, &pipe, field.width, field.gap_height),
                overlap && outside_gap
            );
        }
    }
}
