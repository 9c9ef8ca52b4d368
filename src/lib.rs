//! Drag Pong - A pull-and-release breakout/pong simulation
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, game state)
//! - `game`: Host-facing facade (resize, advance, input, snapshot)
//! - `tuning`: Data-driven game balance
//! - `error`: Layout and tuning errors
//!
//! Drawing and raw device input belong to the host. The core consumes
//! normalized [`sim::InputEvent`]s and hands back a [`sim::Snapshot`].

pub mod error;
pub mod game;
pub mod sim;
pub mod tuning;

pub use error::{LayoutError, TuningError};
pub use game::GameSimulation;
pub use tuning::Tuning;

/// Game configuration constants (defaults for [`Tuning`])
pub mod consts {
    /// Ball defaults
    pub const BALL_RADIUS: f32 = 20.0;

    /// Paddle defaults - paddle sits flush with the bottom edge
    pub const PADDLE_WIDTH: f32 = 300.0;
    pub const PADDLE_HEIGHT: f32 = 40.0;
    /// Fraction of the remaining distance to target covered per tick
    pub const PADDLE_SMOOTHING: f32 = 0.25;

    /// Block defaults
    pub const BLOCK_WIDTH: f32 = 100.0;
    pub const BLOCK_HEIGHT: f32 = 40.0;
    pub const BLOCK_COUNT: usize = 10;
    /// Block tops are drawn from the band [0, BLOCK_HEIGHT * BLOCK_ROWS]
    pub const BLOCK_ROWS: u32 = 10;
    /// Candidate draws before falling back to grid tiling
    pub const MAX_PLACEMENT_ATTEMPTS: u32 = 10_000;

    /// Launch speed clamp (units per tick)
    pub const MIN_LAUNCH_SPEED: f32 = 15.0;
    pub const MAX_LAUNCH_SPEED: f32 = 20.0;
    /// Drag distance is divided by this to get the raw launch velocity
    pub const LAUNCH_DRAG_DIVISOR: f32 = 10.0;
}
