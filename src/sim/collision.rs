//! Collision tests for the ball against blocks, walls and paddle
//!
//! The block test is deliberately loose: it only bounds the ball's upward
//! reach by the block's bottom edge and has no check against the block's top.
//! A ball anywhere above a block's bottom, within its horizontal span, hits it.

use glam::Vec2;

use super::rect::Rect;

/// Outcome of the vertical resolution chain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerticalContact {
    None,
    Ceiling,
    Paddle,
    /// Ball went past the paddle and reached the bottom edge
    Floor,
}

/// Loose ball-vs-block test
///
/// Horizontal overlap uses the ball's full reach on both sides; vertically only
/// `top of ball < block bottom` is checked.
#[inline]
pub fn ball_hits_block(ball_pos: Vec2, radius: f32, block: &Rect) -> bool {
    ball_pos.x + radius > block.left
        && ball_pos.x - radius < block.right
        && ball_pos.y - radius < block.bottom
}

/// Which side wall the ball is touching
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SideWall {
    Left,
    Right,
}

/// Side wall the ball overlaps, if any
#[inline]
pub fn side_wall_contact(ball_pos: Vec2, radius: f32, field_width: f32) -> Option<SideWall> {
    if ball_pos.x < radius {
        Some(SideWall::Left)
    } else if ball_pos.x > field_width - radius {
        Some(SideWall::Right)
    } else {
        None
    }
}

/// Horizontal velocity after touching a wall: always points back into the
/// field, so a ball embedded in the wall can't flip back and forth in place.
#[inline]
pub fn reflect_off_wall(vx: f32, wall: SideWall) -> f32 {
    match wall {
        SideWall::Left => vx.abs(),
        SideWall::Right => -vx.abs(),
    }
}

/// Resolve the vertical contact, first match wins:
/// ceiling, then paddle, then floor.
pub fn vertical_contact(
    ball_pos: Vec2,
    radius: f32,
    field_height: f32,
    paddle_x: f32,
    paddle_width: f32,
    paddle_height: f32,
) -> VerticalContact {
    if ball_pos.y < radius {
        VerticalContact::Ceiling
    } else if ball_pos.y > field_height - paddle_height - radius
        && ball_pos.x > paddle_x
        && ball_pos.x < paddle_x + paddle_width
    {
        VerticalContact::Paddle
    } else if ball_pos.y > field_height - radius {
        VerticalContact::Floor
    } else {
        VerticalContact::None
    }
}
