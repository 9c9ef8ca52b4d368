//! Pointer input: paddle targeting and pull-and-release launching
//!
//! Events arrive already normalized to field coordinates.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::{GameEvent, GameState};
use crate::tuning::Tuning;

/// A normalized pointer event
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum InputEvent {
    PressStart { x: f32, y: f32 },
    PressMove { x: f32, y: f32 },
    PressEnd { x: f32, y: f32 },
}

/// Launch velocity for a drag from `press` to `release`, clamped into
/// `[min_launch_speed, max_launch_speed]`. A zero-length drag stays zero.
pub fn launch_vector(press: Vec2, release: Vec2, tuning: &Tuning) -> Vec2 {
    let delta_y = press.y - release.y;
    let delta_x = release.x - press.x;
    let raw = Vec2::new(
        delta_x / tuning.launch_drag_divisor,
        -delta_y / tuning.launch_drag_divisor,
    );

    let magnitude = raw.length();
    if magnitude > tuning.max_launch_speed {
        raw * (tuning.max_launch_speed / magnitude)
    } else if magnitude > 0.0 && magnitude < tuning.min_launch_speed {
        raw * (tuning.min_launch_speed / magnitude)
    } else {
        raw
    }
}

/// Apply one input event to the state
pub fn handle_input(state: &mut GameState, event: InputEvent) {
    if state.game_over {
        return;
    }

    match event {
        InputEvent::PressStart { x, y } => {
            state.gesture_origin = Some(Vec2::new(x, y));
        }
        InputEvent::PressMove { x, .. } => {
            if state.ball.launched {
                state.paddle.set_target(x - state.paddle.width / 2.0);
            } else {
                state.ball.follow(&state.paddle);
            }
        }
        InputEvent::PressEnd { x, y } => {
            let Some(origin) = state.gesture_origin.take() else {
                log::debug!("Release at ({x}, {y}) without a press, ignored");
                return;
            };
            if state.ball.launched {
                return;
            }

            let vel = launch_vector(origin, Vec2::new(x, y), &state.tuning);
            if state.ball.launch(vel) {
                log::info!("Ball launched with velocity ({:.2}, {:.2})", vel.x, vel.y);
                state.push_event(GameEvent::Launched { vel });
            }
        }
    }
}
