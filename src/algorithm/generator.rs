//! Random puzzle generation by cutting a bitmap into edge-sharing tiles
//!
//! A random picture of `k * (S - 1) + 1` cells per side is cut into `k * k`
//! tiles of side `S`, where neighbouring tiles share their touching row or
//! column. Pictures whose edges could be matched in more than one way are
//! redrawn, so every generated set has exactly one assembly up to the 8
//! symmetries of the whole grid. Tiles are then individually reoriented and
//! shuffled.

use std::collections::HashMap;

use log::debug;
use ndarray::{Array2, s};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::algorithm::compositor::{Picture, compose};
use crate::algorithm::layout::TileGrid;
use crate::io::configuration::{
    DEFAULT_FILL_RATIO, DEFAULT_SEED, DEFAULT_TILE_SIZE, DEFAULT_TILES_PER_SIDE,
    GENERATED_ID_BASE, MAX_GENERATION_ATTEMPTS, MAX_TILE_SIZE, MAX_TILES_PER_SIDE,
    MIN_TILE_SIZE,
};
use crate::io::error::{Result, invalid_parameter};
use crate::spatial::grid::Grid2D;
use crate::spatial::orientation::{ORIENTATION_COUNT, Orientation};
use crate::spatial::tiles::{Edge, Side, Tile, TileId};

/// Parameters for puzzle generation
#[derive(Clone, Copy, Debug)]
pub struct GeneratorConfig {
    /// Number of tiles along each side of the square arrangement
    pub tiles_per_side: usize,
    /// Side length of every tile in cells
    pub tile_size: usize,
    /// Probability that a picture cell is active
    pub fill_ratio: f64,
    /// Seed for reproducible generation
    pub seed: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            tiles_per_side: DEFAULT_TILES_PER_SIDE,
            tile_size: DEFAULT_TILE_SIZE,
            fill_ratio: DEFAULT_FILL_RATIO,
            seed: DEFAULT_SEED,
        }
    }
}

impl GeneratorConfig {
    /// Check parameter ranges
    ///
    /// # Errors
    ///
    /// Returns an invalid parameter error for out-of-range values
    pub fn validate(&self) -> Result<()> {
        if self.tiles_per_side == 0 || self.tiles_per_side > MAX_TILES_PER_SIDE {
            return Err(invalid_parameter(
                "tiles_per_side",
                &self.tiles_per_side,
                &format!("must be between 1 and {MAX_TILES_PER_SIDE}"),
            ));
        }
        if !(MIN_TILE_SIZE..=MAX_TILE_SIZE).contains(&self.tile_size) {
            return Err(invalid_parameter(
                "tile_size",
                &self.tile_size,
                &format!("must be between {MIN_TILE_SIZE} and {MAX_TILE_SIZE}"),
            ));
        }
        if !(0.0..=1.0).contains(&self.fill_ratio) {
            return Err(invalid_parameter(
                "fill_ratio",
                &self.fill_ratio,
                &"must lie within [0, 1]",
            ));
        }
        Ok(())
    }
}

/// A generated tile set together with its ground truth
#[derive(Debug, Clone)]
pub struct GeneratedPuzzle {
    /// Reoriented, shuffled tiles ready for assembly
    pub tiles: Vec<Tile>,
    /// Tile identifiers in their true arrangement
    pub layout: Array2<TileId>,
    /// Picture composed from the true arrangement
    pub picture: Picture,
}

impl GeneratedPuzzle {
    /// Tile blocks in the `Tile <id>:` text format, separated by blank lines
    pub fn to_text(&self) -> String {
        self.tiles
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Generate a puzzle with a unique assembly
///
/// # Errors
///
/// Returns an invalid parameter error if the configuration is out of range
/// or no picture with unambiguous edges was found within
/// [`MAX_GENERATION_ATTEMPTS`] draws
pub fn generate_puzzle(config: &GeneratorConfig) -> Result<GeneratedPuzzle> {
    config.validate()?;
    let mut rng = StdRng::seed_from_u64(config.seed);
    let k = config.tiles_per_side;
    let side = k
        .checked_mul(config.tile_size - 1)
        .and_then(|span| span.checked_add(1))
        .ok_or_else(|| {
            invalid_parameter("tile_size", &config.tile_size, &"picture side overflows")
        })?;

    for attempt in 1..=MAX_GENERATION_ATTEMPTS {
        let source = Array2::from_shape_fn((side, side), |_| rng.random_bool(config.fill_ratio));
        let slots = cut_tiles(&source, k, config.tile_size)?;
        if !edges_are_unambiguous(&slots, k) {
            continue;
        }
        debug!("drew unambiguous {side}x{side} picture after {attempt} attempts");

        let layout = slots.map(|tile| tile.as_ref().map_or(0, Tile::id));
        let mut tiles: Vec<Tile> = slots
            .iter()
            .flatten()
            .map(|tile| {
                let index = rng.random_range(0..ORIENTATION_COUNT);
                let orientation = Orientation::ALL
                    .get(index)
                    .copied()
                    .unwrap_or(Orientation::IDENTITY);
                tile.oriented(orientation)
            })
            .collect();
        tiles.shuffle(&mut rng);
        let picture = compose(&TileGrid::from_slots(slots))?;

        return Ok(GeneratedPuzzle {
            tiles,
            layout,
            picture,
        });
    }

    Err(invalid_parameter(
        "seed",
        &config.seed,
        &format!("no picture with unambiguous edges in {MAX_GENERATION_ATTEMPTS} attempts"),
    ))
}

/// Cut a picture into `k * k` tiles whose neighbours share one row or column
fn cut_tiles(source: &Array2<bool>, k: usize, tile_size: usize) -> Result<Array2<Option<Tile>>> {
    let stride = tile_size - 1;
    let mut slots = Array2::from_elem((k, k), None);
    for ((row, col), slot) in slots.indexed_iter_mut() {
        let top = row * stride;
        let left = col * stride;
        let cells = source
            .slice(s![top..top + tile_size, left..left + tile_size])
            .to_owned();
        let id = GENERATED_ID_BASE + (row * k + col) as TileId;
        *slot = Some(Tile::new(id, Grid2D::from_array(cells)?)?);
    }
    Ok(slots)
}

/// Whether every edge can only be matched with its true partner
///
/// Rejects palindromic edges (ambiguous under a flip along the edge) and any
/// edge whose sequence, read either way, occurs more often than the layout
/// itself requires: once on the outer border, twice between neighbours.
fn edges_are_unambiguous(slots: &Array2<Option<Tile>>, k: usize) -> bool {
    let mut counts: HashMap<Edge, usize> = HashMap::new();
    let mut expected = Vec::new();

    for ((row, col), slot) in slots.indexed_iter() {
        let Some(tile) = slot else {
            return false;
        };
        for side in Side::ALL {
            let edge = tile.edge(side);
            let reversed: Edge = edge.iter().rev().copied().collect();
            if edge == reversed {
                return false;
            }
            let key = edge.min(reversed);
            *counts.entry(key.clone()).or_default() += 1;

            let on_border = match side {
                Side::Top => row == 0,
                Side::Bottom => row + 1 == k,
                Side::Left => col == 0,
                Side::Right => col + 1 == k,
            };
            expected.push((key, if on_border { 1 } else { 2 }));
        }
    }

    expected
        .iter()
        .all(|(key, required)| counts.get(key) == Some(required))
}
