//! Block field generation
//!
//! Blocks are scattered by rejection sampling: draw a candidate uniformly in
//! the top band, keep it if it overlaps nothing already placed. The number of
//! draws is capped; when the cap runs out the band is tiled on a grid instead,
//! in a seeded shuffled order, so generation always terminates.

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::rect::Rect;
use super::state::Block;
use crate::error::LayoutError;
use crate::tuning::Tuning;

/// Derive the seed for one field generation from the run seed
pub fn field_seed(run_seed: u64, generation: u32) -> u64 {
    (generation as u64)
        .wrapping_mul(2654435761)
        .wrapping_add(run_seed)
}

/// Grid dimensions (columns, rows) of the block band
fn grid_dims(width: f32, tuning: &Tuning) -> (usize, usize) {
    let cols = (width / tuning.block_width).floor().max(0.0) as usize;
    // Tops may sit anywhere in [0, block_height * rows], which fits rows + 1 blocks
    let rows = tuning.block_rows as usize + 1;
    (cols, rows)
}

/// Most blocks the band can hold without overlap
pub fn field_capacity(width: f32, tuning: &Tuning) -> usize {
    let (cols, rows) = grid_dims(width, tuning);
    cols.saturating_mul(rows)
}

/// Generate `tuning.block_count` non-overlapping blocks for a field of the
/// given width. Block ids start at `first_id`.
pub fn generate_field(
    width: f32,
    tuning: &Tuning,
    seed: u64,
    first_id: u32,
) -> Result<Vec<Block>, LayoutError> {
    let requested = tuning.block_count;
    let capacity = field_capacity(width, tuning);
    if requested > capacity {
        return Err(LayoutError::FieldTooDense {
            requested,
            capacity,
        });
    }

    let mut rng = Pcg32::seed_from_u64(seed);
    let rects = match scatter(&mut rng, width, tuning) {
        Some(rects) => rects,
        None => {
            log::warn!(
                "Block placement gave up after {} draws, tiling {} blocks",
                tuning.max_placement_attempts,
                requested
            );
            tile(&mut rng, width, tuning)
        }
    };

    Ok(rects
        .into_iter()
        .zip(first_id..)
        .map(|(rect, id)| Block { id, rect })
        .collect())
}

/// Rejection sampling. Returns None if the draw cap is hit first.
fn scatter(rng: &mut Pcg32, width: f32, tuning: &Tuning) -> Option<Vec<Rect>> {
    let x_range = width - tuning.block_width;
    let y_range = tuning.block_height * tuning.block_rows as f32;
    let mut placed: Vec<Rect> = Vec::with_capacity(tuning.block_count);

    for _ in 0..tuning.max_placement_attempts {
        if placed.len() == tuning.block_count {
            break;
        }
        let x = rng.random::<f32>() * x_range;
        let y = rng.random::<f32>() * y_range;
        let candidate =
            Rect::from_origin_size(x, y, tuning.block_width, tuning.block_height);

        if !placed.iter().any(|r| r.intersects(&candidate)) {
            placed.push(candidate);
        }
    }

    (placed.len() == tuning.block_count).then_some(placed)
}

/// Deterministic fallback: fill grid cells in shuffled order
fn tile(rng: &mut Pcg32, width: f32, tuning: &Tuning) -> Vec<Rect> {
    let (cols, rows) = grid_dims(width, tuning);
    // More columns than blocks can never be needed
    let cols = cols.min(tuning.block_count);
    let mut cells: Vec<(usize, usize)> = (0..rows)
        .flat_map(|r| (0..cols).map(move |c| (c, r)))
        .collect();
    cells.shuffle(rng);

    let bw = tuning.block_width;
    let bh = tuning.block_height;
    cells
        .into_iter()
        .take(tuning.block_count)
        // Right/bottom edges are the neighbour's left/top so rounding never overlaps cells
        .map(|(c, r)| {
            Rect::new(
                c as f32 * bw,
                r as f32 * bh,
                (c + 1) as f32 * bw,
                (r + 1) as f32 * bh,
            )
        })
        .collect()
}
