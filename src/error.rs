//! Error types surfaced to the host

use thiserror::Error;

/// Errors from laying out the playfield.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    /// Field size is non-finite, non-positive, or narrower than one block.
    #[error("invalid layout: {width}x{height}")]
    InvalidLayout { width: f32, height: f32 },
    /// The block band cannot hold the requested number of blocks.
    #[error("block band holds at most {capacity} blocks, {requested} requested")]
    FieldTooDense { requested: usize, capacity: usize },
    /// `restart` was called before any successful `resize`.
    #[error("no layout yet")]
    NotLaidOut,
}

/// Errors from loading or validating a [`crate::Tuning`].
#[derive(Debug, Error)]
pub enum TuningError {
    /// The tuning JSON could not be parsed.
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),
    /// A tuning value is out of range.
    #[error("invalid tuning: {0}")]
    Invalid(String),
}
