//! Stitching assembled tiles into one seamless picture
//!
//! Borders of neighbouring tiles are duplicates of each other once assembly
//! has matched them, so every tile contributes only its interior. Interiors
//! are copied block by block: tile-row by tile-row, and within a tile-row
//! left to right.

use std::fmt;

use ndarray::{Array2, s};

use crate::algorithm::layout::TileGrid;
use crate::io::error::{Result, StitchError, shape_error};
use crate::spatial::grid::Grid2D;
use crate::spatial::tiles::Tile;

/// Composite bitmap built from tile interiors
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Picture {
    cells: Grid2D<bool>,
}

impl Picture {
    /// Wrap a boolean grid as a picture
    pub const fn new(cells: Grid2D<bool>) -> Self {
        Self { cells }
    }

    /// Underlying cell grid
    pub const fn cells(&self) -> &Grid2D<bool> {
        &self.cells
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.cells.rows()
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.cells.cols()
    }

    /// Whether the cell at `(row, col)` is active; out of bounds is inactive
    pub fn is_active(&self, row: usize, col: usize) -> bool {
        self.cells.get(row, col).copied().unwrap_or(false)
    }

    /// Count of active cells
    pub fn active_count(&self) -> usize {
        self.cells.count_active()
    }
}

impl fmt::Display for Picture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.cells)
    }
}

/// Strip tile borders and concatenate interiors into one picture
///
/// # Errors
///
/// Returns an error if:
/// - A slot of the grid is empty (composition needs a dense grid)
/// - Tiles are smaller than 3x3 or differ in size
pub fn compose(grid: &TileGrid) -> Result<Picture> {
    if let Some((row, col)) = grid.first_gap() {
        return Err(StitchError::IncompleteGrid { row, col });
    }

    let tile_size = grid
        .slot(0, 0)
        .map(Tile::size)
        .ok_or(StitchError::IncompleteGrid { row: 0, col: 0 })?;
    let inner = tile_size.saturating_sub(2);
    let (rows, cols) = grid.dimensions();
    let mut cells = Array2::from_elem((rows * inner, cols * inner), false);

    for (tile_row, slots) in grid.iter_rows().enumerate() {
        for (tile_col, slot) in slots.iter().enumerate() {
            let tile = slot.as_ref().ok_or(StitchError::IncompleteGrid {
                row: tile_row,
                col: tile_col,
            })?;
            if tile.size() != tile_size {
                return Err(shape_error(&format!(
                    "tile {} has side {}, expected {tile_size}",
                    tile.id(),
                    tile.size()
                )));
            }

            let interior = tile.interior()?;
            let top = tile_row * inner;
            let left = tile_col * inner;
            cells
                .slice_mut(s![top..top + inner, left..left + inner])
                .assign(&interior.view());
        }
    }

    Ok(Picture::new(Grid2D::from_array(cells)?))
}
