//! Game state and core simulation types
//!
//! Everything the simulation mutates lives in [`GameState`]. There is no
//! global state; the host owns one `GameState` (through `GameSimulation`).

use std::collections::VecDeque;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::tuning::Tuning;

/// Coarse phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Ball resting on paddle, waiting for a drag-and-release launch
    Aiming,
    /// Ball in flight
    InPlay,
    /// All blocks cleared (terminal)
    Won,
    /// Ball passed the paddle (terminal)
    Lost,
}

impl GamePhase {
    pub fn is_terminal(&self) -> bool {
        matches!(self, GamePhase::Won | GamePhase::Lost)
    }
}

/// Things that happened during a tick or input, for host audio/FX
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    Launched { vel: Vec2 },
    BlockDestroyed { id: u32 },
    WallBounce,
    CeilingBounce,
    PaddleBounce,
    Won,
    Lost,
}

/// Most events kept for the host; older ones are dropped if it never drains
pub const MAX_PENDING_EVENTS: usize = 256;

/// The ball
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// False until the first launch gesture is released
    pub launched: bool,
}

impl Ball {
    pub fn new(radius: f32) -> Self {
        Self {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            radius,
            launched: false,
        }
    }

    /// Place the ball on top of the paddle, horizontally centered
    pub fn rest_on(&mut self, paddle: &Paddle, field_height: f32) {
        self.pos = Vec2::new(
            paddle.center_x(),
            paddle.top(field_height) - self.radius,
        );
    }

    /// Keep x on the paddle center while aiming
    pub fn follow(&mut self, paddle: &Paddle) {
        self.pos.x = paddle.center_x();
    }

    /// Commit a launch velocity. Only the first call has any effect.
    pub fn launch(&mut self, vel: Vec2) -> bool {
        if self.launched {
            return false;
        }
        self.vel = vel;
        self.launched = true;
        true
    }
}

/// The player's paddle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    /// Current left edge
    pub x: f32,
    /// Left edge the paddle is easing toward (unclamped)
    pub target_x: f32,
    pub width: f32,
    pub height: f32,
}

impl Paddle {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            x: 0.0,
            target_x: 0.0,
            width,
            height,
        }
    }

    /// Snap both current and target so the paddle is centered in the field
    pub fn center_in(&mut self, field_width: f32) {
        self.x = (field_width - self.width) / 2.0;
        self.target_x = self.x;
    }

    #[inline]
    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }

    /// Top edge; the paddle sits flush with the bottom of the field
    #[inline]
    pub fn top(&self, field_height: f32) -> f32 {
        field_height - self.height
    }

    pub fn rect(&self, field_height: f32) -> Rect {
        Rect::new(self.x, self.top(field_height), self.x + self.width, field_height)
    }

    /// Record the desired left edge. Not clamped to the field.
    pub fn set_target(&mut self, x: f32) {
        self.target_x = x;
    }

    /// Move a fixed fraction of the remaining distance toward the target
    pub fn relax(&mut self, smoothing: f32) {
        self.x += (self.target_x - self.x) * smoothing;
    }
}

/// A destructible block
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Block {
    pub id: u32,
    pub rect: Rect,
}

/// Complete game state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducible block fields
    pub seed: u64,
    /// Number of block fields generated so far (mixed into the field seed)
    pub generation: u32,
    pub tuning: Tuning,
    /// Field bounds
    pub width: f32,
    pub height: f32,
    pub ball: Ball,
    pub paddle: Paddle,
    /// Remaining blocks (order irrelevant)
    pub blocks: Vec<Block>,
    pub score: u64,
    /// Terminal flag; set on win or loss, never cleared except by a new layout
    pub game_over: bool,
    /// Press position of the gesture in progress
    #[serde(skip)]
    pub gesture_origin: Option<Vec2>,
    /// Pending events for the host, oldest first, at most [`MAX_PENDING_EVENTS`]
    #[serde(skip)]
    pub events: VecDeque<GameEvent>,
}

impl GameState {
    /// Create an empty, zero-sized state. Call [`GameState::reset_layout`] before ticking.
    pub fn new(tuning: Tuning, seed: u64) -> Self {
        let ball = Ball::new(tuning.ball_radius);
        let paddle = Paddle::new(tuning.paddle_width, tuning.paddle_height);
        Self {
            seed,
            generation: 0,
            tuning,
            width: 0.0,
            height: 0.0,
            ball,
            paddle,
            blocks: Vec::new(),
            score: 0,
            game_over: false,
            gesture_origin: None,
            events: VecDeque::with_capacity(MAX_PENDING_EVENTS),
        }
    }

    /// Start a fresh game in a field of the given size: paddle centered,
    /// ball resting on it, no blocks, score zero.
    pub fn reset_layout(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
        self.paddle = Paddle::new(self.tuning.paddle_width, self.tuning.paddle_height);
        self.paddle.center_in(width);
        self.ball = Ball::new(self.tuning.ball_radius);
        self.ball.rest_on(&self.paddle, height);
        self.blocks.clear();
        self.score = 0;
        self.game_over = false;
        self.gesture_origin = None;
        self.events.clear();
    }

    /// Current phase, derived from the launch and terminal flags
    pub fn phase(&self) -> GamePhase {
        if self.game_over {
            if self.blocks.is_empty() {
                GamePhase::Won
            } else {
                GamePhase::Lost
            }
        } else if self.ball.launched {
            GamePhase::InPlay
        } else {
            GamePhase::Aiming
        }
    }

    pub fn push_event(&mut self, event: GameEvent) {
        if self.events.len() == MAX_PENDING_EVENTS {
            self.events.pop_front();
        }
        self.events.push_back(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reset_layout_centers_paddle_and_ball() {
        let mut state = GameState::new(Tuning::default(), 1);
        state.reset_layout(1000.0, 2000.0);

        assert_eq!(state.paddle.x, 350.0);
        assert_eq!(state.paddle.target_x, 350.0);
        assert_eq!(state.ball.pos, Vec2::new(500.0, 2000.0 - 40.0 - 20.0));
        assert!(!state.ball.launched);
        assert_eq!(state.phase(), GamePhase::Aiming);
    }

    #[test]
    fn test_paddle_relax_quarter_step() {
        let mut paddle = Paddle::new(300.0, 40.0);
        paddle.set_target(100.0);
        paddle.relax(0.25);
        assert!((paddle.x - 25.0).abs() < 1e-5);
        paddle.relax(0.25);
        assert!((paddle.x - 43.75).abs() < 1e-5);
    }

    #[test]
    fn test_ball_launch_only_once() {
        let mut ball = Ball::new(20.0);
        assert!(ball.launch(Vec2::new(3.0, -4.0)));
        assert!(!ball.launch(Vec2::new(10.0, 10.0)));
        assert_eq!(ball.vel, Vec2::new(3.0, -4.0));
    }

    #[test]
    fn test_event_queue_is_bounded() {
        let mut state = GameState::new(Tuning::default(), 1);
        for _ in 0..MAX_PENDING_EVENTS {
            state.push_event(GameEvent::WallBounce);
        }
        state.push_event(GameEvent::Lost);

        assert_eq!(state.events.len(), MAX_PENDING_EVENTS);
        assert_eq!(state.events.back(), Some(&GameEvent::Lost));
    }

    #[test]
    fn test_phase_derivation() {
        let mut state = GameState::new(Tuning::default(), 1);
        state.reset_layout(1000.0, 2000.0);
        state.blocks.push(Block {
            id: 1,
            rect: Rect::from_origin_size(0.0, 0.0, 100.0, 40.0),
        });

        state.ball.launched = true;
        assert_eq!(state.phase(), GamePhase::InPlay);

        state.game_over = true;
        assert_eq!(state.phase(), GamePhase::Lost);

        state.blocks.clear();
        assert_eq!(state.phase(), GamePhase::Won);
        assert!(state.phase().is_terminal());
    }
}
