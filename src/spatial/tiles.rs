//! Square bitmap tiles and their border signatures
//!
//! A tile is an identifier plus a square boolean grid. Its four edges are
//! read in a fixed direction (rows left to right, columns top to bottom) so
//! that "right edge of A equals left edge of B" means A and B can sit side by
//! side without further reversal.

use std::fmt;

use ndarray::s;

use crate::io::configuration::{ACTIVE_CHAR, INACTIVE_CHAR, MIN_TILE_SIZE};
use crate::io::error::{Result, StitchError, shape_error};
use crate::spatial::grid::Grid2D;
use crate::spatial::orientation::{self, Orientation};

/// Opaque tile identifier
pub type TileId = u64;

/// One border sequence of a tile
pub type Edge = Vec<bool>;

/// The side of a tile an edge belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// First row
    Top,
    /// Last column
    Right,
    /// Last row
    Bottom,
    /// First column
    Left,
}

impl Side {
    /// All sides in clockwise order starting at the top
    pub const ALL: [Self; 4] = [Self::Top, Self::Right, Self::Bottom, Self::Left];

    /// The side facing this one on an adjacent tile
    pub const fn opposite(self) -> Self {
        match self {
            Self::Top => Self::Bottom,
            Self::Right => Self::Left,
            Self::Bottom => Self::Top,
            Self::Left => Self::Right,
        }
    }

    /// Row and column step from a tile to its neighbour on this side
    pub const fn step(self) -> [i32; 2] {
        match self {
            Self::Top => [-1, 0],
            Self::Right => [0, 1],
            Self::Bottom => [1, 0],
            Self::Left => [0, -1],
        }
    }
}

/// A square boolean tile with a stable identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    id: TileId,
    cells: Grid2D<bool>,
}

impl Tile {
    /// Create a tile from a square grid
    ///
    /// # Errors
    ///
    /// Returns a shape error if the grid is not square
    pub fn new(id: TileId, cells: Grid2D<bool>) -> Result<Self> {
        if cells.rows() != cells.cols() {
            return Err(shape_error(&format!(
                "tile {id} is {}x{}, expected a square",
                cells.rows(),
                cells.cols()
            )));
        }
        Ok(Self { id, cells })
    }

    /// Create a tile from rows of booleans
    ///
    /// # Errors
    ///
    /// Returns a shape error for empty, ragged or non-square rows
    pub fn from_rows(id: TileId, rows: Vec<Vec<bool>>) -> Result<Self> {
        Self::new(id, Grid2D::square(rows)?)
    }

    /// Create a tile from `#`/`.` text lines
    ///
    /// `first_line` is the 1-based input line of `lines[0]`, used in error
    /// messages.
    ///
    /// # Errors
    ///
    /// Returns a parse error on any character other than `#` or `.`, and a
    /// shape error if the lines do not form a square
    pub fn from_lines(id: TileId, lines: &[&str], first_line: usize) -> Result<Self> {
        let mut rows = Vec::with_capacity(lines.len());
        for (offset, line) in lines.iter().enumerate() {
            let row = line
                .chars()
                .map(|symbol| match symbol {
                    ACTIVE_CHAR => Ok(true),
                    INACTIVE_CHAR => Ok(false),
                    other => Err(StitchError::Parse {
                        line: first_line + offset,
                        reason: format!("unexpected character {other:?} in tile {id}"),
                    }),
                })
                .collect::<Result<Vec<bool>>>()?;
            rows.push(row);
        }
        Self::from_rows(id, rows)
    }

    /// Tile identifier
    pub const fn id(&self) -> TileId {
        self.id
    }

    /// Side length in cells
    pub fn size(&self) -> usize {
        self.cells.rows()
    }

    /// Underlying cell grid
    pub const fn cells(&self) -> &Grid2D<bool> {
        &self.cells
    }

    /// First row, read left to right
    pub fn top(&self) -> Edge {
        self.cells.top()
    }

    /// Last row, read left to right
    pub fn bottom(&self) -> Edge {
        self.cells.bottom()
    }

    /// First column, read top to bottom
    pub fn left(&self) -> Edge {
        self.cells.left()
    }

    /// Last column, read top to bottom
    pub fn right(&self) -> Edge {
        self.cells.right()
    }

    /// Edge on the given side
    pub fn edge(&self, side: Side) -> Edge {
        match side {
            Side::Top => self.top(),
            Side::Right => self.right(),
            Side::Bottom => self.bottom(),
            Side::Left => self.left(),
        }
    }

    /// Rotate the tile a quarter turn clockwise in place
    pub fn rotate_clockwise(&mut self) {
        self.cells.rotate_clockwise();
    }

    /// Mirror the tile left to right in place
    pub fn flip_horizontal(&mut self) {
        self.cells.flip_horizontal();
    }

    /// Mirror the tile top to bottom in place
    pub fn flip_vertical(&mut self) {
        self.cells.flip_vertical();
    }

    /// Copy of this tile in the given orientation
    #[must_use]
    pub fn oriented(&self, orientation: Orientation) -> Self {
        Self {
            id: self.id,
            cells: orientation.apply(&self.cells),
        }
    }

    /// Every orientation of this tile as fresh copies, in [`Orientation::ALL`]
    /// order
    pub fn orientations(&self) -> impl Iterator<Item = (Orientation, Self)> + '_ {
        orientation::orientations(&self.cells)
            .map(|(orientation, cells)| (orientation, Self { id: self.id, cells }))
    }

    /// Cells with the one-cell border removed
    ///
    /// # Errors
    ///
    /// Returns a shape error if the tile is smaller than 3x3
    pub fn interior(&self) -> Result<Grid2D<bool>> {
        let size = self.size();
        if size < MIN_TILE_SIZE {
            return Err(shape_error(&format!(
                "tile {} has side {size}, too small to carry an interior",
                self.id
            )));
        }
        let view = self.cells.view();
        Grid2D::from_array(view.slice(s![1..size - 1, 1..size - 1]).to_owned())
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Tile {}:", self.id)?;
        write!(f, "{}", self.cells)
    }
}
