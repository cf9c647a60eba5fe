//! Edge-matching assembly of tiles into a dense square
//!
//! Tiles wait in a queue. Each pass takes every queued tile once and tries
//! all 8 orientations against every open slot of the growing grid; the first
//! slot whose placed neighbours all share an identical edge wins. Tiles that
//! fit nowhere go to the back of the queue. A pass that places nothing means
//! no further progress is possible and the set is reported as unsolvable.
//!
//! Trial orientations are computed as fresh copies and only moved into the
//! grid once validated, so a failed attempt leaves the queued tile as it was.

use std::collections::{HashSet, VecDeque};

use log::{debug, trace};

use crate::algorithm::layout::{Neighbors, TileGrid};
use crate::io::error::{Result, StitchError, invalid_parameter, shape_error};
use crate::spatial::orientation::Orientation;
use crate::spatial::tiles::{Side, Tile};

/// Whether `tile` can occupy a slot with the given neighbours
///
/// Every present neighbour must share an exactly equal edge with the tile.
/// A slot with no neighbours at all is never a valid target.
pub fn check_insertion(tile: &Tile, neighbors: &Neighbors<'_>) -> bool {
    if neighbors.is_empty() {
        return false;
    }
    Side::ALL.into_iter().all(|side| {
        neighbors
            .get(side)
            .is_none_or(|neighbor| neighbor.edge(side.opposite()) == tile.edge(side))
    })
}

/// A validated position and orientation for one tile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    /// World coordinates of the slot
    pub coordinates: [i32; 2],
    /// Orientation the tile is frozen in
    pub orientation: Orientation,
}

/// Find the first orientation and open slot where `tile` fits
///
/// Orientations are tried in [`Orientation::ALL`] order, and for each one
/// the open slots in [`TileGrid::open_slots`] order.
pub fn find_placement(grid: &TileGrid, tile: &Tile) -> Option<(Placement, Tile)> {
    let open_slots = grid.open_slots();
    tile.orientations().find_map(|(orientation, candidate)| {
        let coordinates = open_slots
            .iter()
            .copied()
            .find(|&coordinates| check_insertion(&candidate, &grid.neighbors(coordinates)))?;
        Some((
            Placement {
                coordinates,
                orientation,
            },
            candidate,
        ))
    })
}

/// Outcome of one pass over the pending queue
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PassSummary {
    /// 1-based pass number
    pub pass: usize,
    /// Tiles placed during this pass
    pub placed: usize,
    /// Tiles still queued after this pass
    pub pending: usize,
}

/// Incremental assembly state
///
/// Drive it with [`Assembler::execute_pass`] until [`Assembler::is_complete`],
/// then call [`Assembler::finish`]; [`assemble`] does all of this at once.
#[derive(Debug, Clone)]
pub struct Assembler {
    grid: TileGrid,
    pending: VecDeque<Tile>,
    total: usize,
    passes: usize,
}

impl Assembler {
    /// Validate a tile set and seed the grid with its first tile
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The set is empty
    /// - Tiles differ in side length
    /// - Two tiles share an identifier
    pub fn new(tiles: Vec<Tile>) -> Result<Self> {
        let mut pending = VecDeque::from(tiles);
        let total = pending.len();
        let seed = pending
            .pop_front()
            .ok_or_else(|| invalid_parameter("tiles", &0, &"at least one tile is required"))?;

        let size = seed.size();
        if let Some(odd) = pending.iter().find(|tile| tile.size() != size) {
            return Err(shape_error(&format!(
                "tile {} has side {}, expected {size} like tile {}",
                odd.id(),
                odd.size(),
                seed.id()
            )));
        }

        let mut seen = HashSet::with_capacity(total);
        for id in std::iter::once(seed.id()).chain(pending.iter().map(Tile::id)) {
            if !seen.insert(id) {
                return Err(StitchError::DuplicateTile { id });
            }
        }

        debug!("seeding grid with tile {} ({total} tiles of side {size})", seed.id());

        Ok(Self {
            grid: TileGrid::seeded(seed),
            pending,
            total,
            passes: 0,
        })
    }

    /// Grid of tiles placed so far
    pub const fn grid(&self) -> &TileGrid {
        &self.grid
    }

    /// Number of tiles in the set
    pub const fn total(&self) -> usize {
        self.total
    }

    /// Number of tiles still queued
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Number of tiles placed so far
    pub fn placed(&self) -> usize {
        self.total - self.pending.len()
    }

    /// Number of passes executed so far
    pub const fn passes(&self) -> usize {
        self.passes
    }

    /// Whether every tile has been placed
    pub fn is_complete(&self) -> bool {
        self.pending.is_empty()
    }

    /// Run one pass over the queue
    ///
    /// Every tile queued at the start of the pass gets exactly one attempt.
    ///
    /// # Errors
    ///
    /// Returns an unsolvable error if tiles were queued but none could be
    /// placed
    pub fn execute_pass(&mut self) -> Result<PassSummary> {
        self.passes += 1;
        let attempts = self.pending.len();
        let mut placed = 0;

        for _ in 0..attempts {
            let Some(tile) = self.pending.pop_front() else {
                break;
            };
            match find_placement(&self.grid, &tile) {
                Some((placement, oriented)) => {
                    trace!(
                        "placed tile {} at {:?} ({})",
                        oriented.id(),
                        placement.coordinates,
                        placement.orientation
                    );
                    self.grid.insert(placement.coordinates, oriented)?;
                    placed += 1;
                }
                None => self.pending.push_back(tile),
            }
        }

        debug!(
            "pass {}: placed {placed}, {} pending, grid {:?}",
            self.passes,
            self.pending.len(),
            self.grid.dimensions()
        );

        if attempts > 0 && placed == 0 {
            return Err(self.unsolvable());
        }

        Ok(PassSummary {
            pass: self.passes,
            placed,
            pending: self.pending.len(),
        })
    }

    /// Check the terminal invariant and hand over the grid
    ///
    /// # Errors
    ///
    /// Returns an unsolvable error if tiles are still queued or the placed
    /// tiles do not form a dense square
    pub fn finish(self) -> Result<TileGrid> {
        let (rows, cols) = self.grid.dimensions();
        let is_full_square = rows == cols && rows * cols == self.total;
        if !self.is_complete() || !self.grid.is_dense() || !is_full_square {
            return Err(self.unsolvable());
        }
        Ok(self.grid)
    }

    fn unsolvable(&self) -> StitchError {
        StitchError::Unsolvable {
            placed: self.placed(),
            pending: self.pending(),
            dimensions: self.grid.dimensions(),
        }
    }
}

/// Assemble a tile set into a dense square grid
///
/// # Errors
///
/// Returns an error if the set is empty or inconsistent, or if no
/// arrangement satisfies every border constraint
pub fn assemble(tiles: Vec<Tile>) -> Result<TileGrid> {
    let mut assembler = Assembler::new(tiles)?;
    while !assembler.is_complete() {
        assembler.execute_pass()?;
    }
    assembler.finish()
}
