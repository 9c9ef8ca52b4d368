//! Read-only view of the state for the host's renderer

use glam::Vec2;
use serde::Serialize;

use super::rect::Rect;
use super::state::{GamePhase, GameState};

/// Everything the host needs to draw one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub width: f32,
    pub height: f32,
    pub ball_pos: Vec2,
    pub ball_radius: f32,
    pub paddle: Rect,
    pub blocks: Vec<Rect>,
    pub score: u64,
    pub phase: GamePhase,
}

impl Snapshot {
    pub fn capture(state: &GameState) -> Self {
        Self {
            width: state.width,
            height: state.height,
            ball_pos: state.ball.pos,
            ball_radius: state.ball.radius,
            paddle: state.paddle.rect(state.height),
            blocks: state.blocks.iter().map(|b| b.rect).collect(),
            score: state.score,
            phase: state.phase(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::Block;
    use crate::tuning::Tuning;

    #[test]
    fn test_capture() {
        let mut state = GameState::new(Tuning::default(), 7);
        state.reset_layout(1000.0, 2000.0);
        state.blocks.push(Block {
            id: 1,
            rect: Rect::from_origin_size(10.0, 20.0, 100.0, 40.0),
        });
        state.score = 3;

        let snap = Snapshot::capture(&state);
        assert_eq!(snap.paddle, Rect::new(350.0, 1960.0, 650.0, 2000.0));
        assert_eq!(snap.ball_pos, Vec2::new(500.0, 1940.0));
        assert_eq!(snap.ball_radius, 20.0);
        assert_eq!(snap.blocks, vec![Rect::new(10.0, 20.0, 110.0, 60.0)]);
        assert_eq!(snap.score, 3);
        assert_eq!(snap.phase, GamePhase::Aiming);
    }

    #[test]
    fn test_serializes_to_json() {
        let mut state = GameState::new(Tuning::default(), 7);
        state.reset_layout(1000.0, 2000.0);
        let json = serde_json::to_string(&Snapshot::capture(&state)).unwrap();
        assert!(json.contains("\"phase\":\"Aiming\""));
        assert!(json.contains("\"score\":0"));
    }
}
