//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed step only (one `advance` = one step)
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod field;
pub mod input;
pub mod rect;
pub mod snapshot;
pub mod state;
pub mod tick;

pub use collision::{SideWall, VerticalContact, ball_hits_block, side_wall_contact, vertical_contact};
pub use field::{field_capacity, field_seed, generate_field};
pub use input::{InputEvent, handle_input, launch_vector};
pub use rect::Rect;
pub use snapshot::Snapshot;
pub use state::{Ball, Block, GameEvent, GamePhase, GameState, Paddle};
pub use tick::advance;
