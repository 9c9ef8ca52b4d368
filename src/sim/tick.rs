//! Fixed-step simulation tick
//!
//! One call is one simulated step: velocities are in units per tick and there
//! is no wall-clock scaling. Order within a tick:
//! paddle easing, ball motion, block hits, side walls, vertical chain, win check.

use super::collision::{
    VerticalContact, ball_hits_block, reflect_off_wall, side_wall_contact, vertical_contact,
};
use super::state::{GameEvent, GamePhase, GameState};

/// Advance the game state by one step. No-op once the game is over.
pub fn advance(state: &mut GameState) {
    if state.game_over {
        return;
    }

    let radius = state.ball.radius;

    state.paddle.relax(state.tuning.paddle_smoothing);

    if state.ball.launched {
        state.ball.pos += state.ball.vel;
    } else {
        // Ball rests on the paddle until launched
        state.ball.follow(&state.paddle);
    }

    // Block hits: every overlapping block goes this tick, each one flips vy
    let ball_pos = state.ball.pos;
    let mut destroyed = Vec::new();
    state.blocks.retain(|block| {
        let hit = ball_hits_block(ball_pos, radius, &block.rect);
        if hit {
            destroyed.push(block.id);
        }
        !hit
    });
    for id in destroyed {
        state.ball.vel.y = -state.ball.vel.y;
        state.score += 1;
        log::debug!("Block {} destroyed, score {}", id, state.score);
        state.push_event(GameEvent::BlockDestroyed { id });
    }

    if let Some(wall) = side_wall_contact(state.ball.pos, radius, state.width) {
        state.ball.vel.x = reflect_off_wall(state.ball.vel.x, wall);
        log::debug!("{:?} wall bounce at x {:.1}", wall, state.ball.pos.x);
        state.push_event(GameEvent::WallBounce);
    }

    let mut over = false;
    match vertical_contact(
        state.ball.pos,
        radius,
        state.height,
        state.paddle.x,
        state.paddle.width,
        state.paddle.height,
    ) {
        VerticalContact::Ceiling => {
            state.ball.vel.y = -state.ball.vel.y;
            log::debug!("Ceiling bounce at x {:.1}", state.ball.pos.x);
            state.push_event(GameEvent::CeilingBounce);
        }
        VerticalContact::Paddle => {
            state.ball.vel.y = -state.ball.vel.y;
            log::debug!(
                "Paddle bounce at x {:.1} (paddle {:.1})",
                state.ball.pos.x,
                state.paddle.x
            );
            state.push_event(GameEvent::PaddleBounce);
        }
        VerticalContact::Floor => over = true,
        VerticalContact::None => {}
    }

    // Checked after the vertical chain: clearing the last block wins even if
    // the ball also reached the floor this tick
    if state.blocks.is_empty() {
        over = true;
    }

    if over {
        state.game_over = true;
        match state.phase() {
            GamePhase::Won => {
                log::info!("All blocks cleared! Final score: {}", state.score);
                state.push_event(GameEvent::Won);
            }
            _ => {
                log::info!(
                    "Ball lost with {} blocks left. Final score: {}",
                    state.blocks.len(),
                    state.score
                );
                state.push_event(GameEvent::Lost);
            }
        }
    }
}
