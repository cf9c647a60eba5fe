//! Fixed stencil patterns searched for inside a picture
//!
//! A motif is a small boolean grid where `true` cells must line up with
//! active picture cells and `false` cells are wildcards. Motifs differ only
//! by their pattern; the canonical one is the 3x20 sea monster.

use crate::io::configuration::{ACTIVE_CHAR, INACTIVE_CHAR, SEA_MONSTER, WILDCARD_CHAR};
use crate::io::error::{Result, StitchError, shape_error};
use crate::spatial::grid::Grid2D;
use crate::spatial::orientation::{self, Orientation};

/// A stencil of required cells with wildcards elsewhere
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Motif {
    cells: Grid2D<bool>,
}

impl Motif {
    /// Create a motif from a boolean grid
    ///
    /// # Errors
    ///
    /// Returns a shape error if the grid has no `true` cell, since such a
    /// motif would match everywhere
    pub fn new(cells: Grid2D<bool>) -> Result<Self> {
        if cells.count_active() == 0 {
            return Err(shape_error(&"motif needs at least one required cell"));
        }
        Ok(Self { cells })
    }

    /// Parse a motif from text rows
    ///
    /// `#` marks a required cell; spaces and `.` are wildcards. Shorter rows
    /// are padded with wildcards to the widest row, so trailing whitespace
    /// lost in transit does not change the pattern.
    ///
    /// # Errors
    ///
    /// Returns a parse error on any other character and a shape error for
    /// an empty or blank pattern
    pub fn from_pattern(lines: &[&str]) -> Result<Self> {
        let width = lines
            .iter()
            .map(|line| line.chars().count())
            .max()
            .unwrap_or(0);

        let mut rows = Vec::with_capacity(lines.len());
        for (index, line) in lines.iter().enumerate() {
            let mut row = line
                .chars()
                .map(|symbol| match symbol {
                    ACTIVE_CHAR => Ok(true),
                    WILDCARD_CHAR | INACTIVE_CHAR => Ok(false),
                    other => Err(StitchError::Parse {
                        line: index + 1,
                        reason: format!("unexpected character {other:?} in motif"),
                    }),
                })
                .collect::<Result<Vec<bool>>>()?;
            row.resize(width, false);
            rows.push(row);
        }

        Self::new(Grid2D::from_rows(rows)?)
    }

    /// The canonical sea monster
    ///
    /// # Errors
    ///
    /// Never fails for the built-in pattern; the signature matches
    /// [`Motif::from_pattern`]
    pub fn sea_monster() -> Result<Self> {
        Self::from_pattern(&SEA_MONSTER)
    }

    /// Underlying cell grid
    pub const fn cells(&self) -> &Grid2D<bool> {
        &self.cells
    }

    /// Height of the bounding box
    pub fn rows(&self) -> usize {
        self.cells.rows()
    }

    /// Width of the bounding box
    pub fn cols(&self) -> usize {
        self.cells.cols()
    }

    /// Number of required cells in one instance
    pub fn weight(&self) -> usize {
        self.cells.count_active()
    }

    /// Offsets of required cells relative to the top-left corner
    pub fn required_offsets(&self) -> Vec<[usize; 2]> {
        self.cells
            .view()
            .indexed_iter()
            .filter(|&(_, &cell)| cell)
            .map(|((row, col), _)| [row, col])
            .collect()
    }

    /// Every orientation of this motif, in [`Orientation::ALL`] order
    pub fn orientations(&self) -> impl Iterator<Item = (Orientation, Self)> + '_ {
        orientation::orientations(&self.cells)
            .map(|(orientation, cells)| (orientation, Self { cells }))
    }

    /// Copy of this motif in the given orientation
    #[must_use]
    pub fn oriented(&self, orientation: Orientation) -> Self {
        Self {
            cells: orientation.apply(&self.cells),
        }
    }
}
