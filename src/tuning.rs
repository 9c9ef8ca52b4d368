//! Game tuning
//!
//! Every gameplay constant lives here so hosts can override balance from a
//! JSON file without recompiling. Missing fields fall back to [`crate::consts`].

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::TuningError;

/// Data-driven gameplay constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Ball ===
    pub ball_radius: f32,

    // === Paddle ===
    pub paddle_width: f32,
    pub paddle_height: f32,
    /// Per-tick fractional approach toward the paddle target (0, 1]
    pub paddle_smoothing: f32,

    // === Blocks ===
    pub block_width: f32,
    pub block_height: f32,
    pub block_count: usize,
    pub block_rows: u32,
    pub max_placement_attempts: u32,

    // === Launch ===
    pub min_launch_speed: f32,
    pub max_launch_speed: f32,
    pub launch_drag_divisor: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            ball_radius: BALL_RADIUS,

            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_smoothing: PADDLE_SMOOTHING,

            block_width: BLOCK_WIDTH,
            block_height: BLOCK_HEIGHT,
            block_count: BLOCK_COUNT,
            block_rows: BLOCK_ROWS,
            max_placement_attempts: MAX_PLACEMENT_ATTEMPTS,

            min_launch_speed: MIN_LAUNCH_SPEED,
            max_launch_speed: MAX_LAUNCH_SPEED,
            launch_drag_divisor: LAUNCH_DRAG_DIVISOR,
        }
    }
}

impl Tuning {
    /// Parse and validate tuning from JSON
    pub fn from_json_str(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        log::info!("Loaded tuning overrides");
        Ok(tuning)
    }

    /// Serialize to pretty JSON (for writing a template file)
    pub fn to_json_string(&self) -> Result<String, TuningError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check every value is in a range the simulation can run with
    pub fn validate(&self) -> Result<(), TuningError> {
        let positive = [
            ("ball_radius", self.ball_radius),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("block_width", self.block_width),
            ("block_height", self.block_height),
            ("min_launch_speed", self.min_launch_speed),
            ("max_launch_speed", self.max_launch_speed),
            ("launch_drag_divisor", self.launch_drag_divisor),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(TuningError::Invalid(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }

        if self.min_launch_speed > self.max_launch_speed {
            return Err(TuningError::Invalid(format!(
                "min_launch_speed {} exceeds max_launch_speed {}",
                self.min_launch_speed, self.max_launch_speed
            )));
        }
        if !(self.paddle_smoothing > 0.0 && self.paddle_smoothing <= 1.0) {
            return Err(TuningError::Invalid(format!(
                "paddle_smoothing must be in (0, 1], got {}",
                self.paddle_smoothing
            )));
        }
        if self.block_count == 0 {
            return Err(TuningError::Invalid("block_count must be at least 1".into()));
        }

        Ok(())
    }
}
