//! Fixed-orientation 2D cell grid with rigid transforms and edge access
//!
//! `Grid2D` wraps an `ndarray::Array2` and exposes the geometric primitives
//! shared by tiles, motifs and pictures: clockwise rotation, horizontal and
//! vertical flips, and the four border sequences. Every transform is a pure
//! rearrangement of cells, so four rotations or two flips restore the input.

use std::fmt;

use ndarray::{Array2, ArrayView2, s};

use crate::io::error::{Result, shape_error};

/// Rectangular, non-empty grid of cells stored in row-major order
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid2D<T> {
    cells: Array2<T>,
}

impl<T: Clone> Grid2D<T> {
    /// Build a grid from row vectors
    ///
    /// # Errors
    ///
    /// Returns a shape error if there are no rows, a row is empty, or rows
    /// differ in length
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if height == 0 || width == 0 {
            return Err(shape_error(&"grid must contain at least one cell"));
        }
        if let Some((index, row)) = rows.iter().enumerate().find(|(_, row)| row.len() != width) {
            return Err(shape_error(&format!(
                "row {index} has {} cells, expected {width}",
                row.len()
            )));
        }

        let flat: Vec<T> = rows.into_iter().flatten().collect();
        let cells = Array2::from_shape_vec((height, width), flat)
            .map_err(|error| shape_error(&error))?;
        Ok(Self { cells })
    }

    /// Build a square grid from row vectors
    ///
    /// # Errors
    ///
    /// Returns a shape error for empty, ragged or non-square input
    pub fn square(rows: Vec<Vec<T>>) -> Result<Self> {
        let grid = Self::from_rows(rows)?;
        if grid.rows() != grid.cols() {
            return Err(shape_error(&format!(
                "grid is {}x{}, expected a square",
                grid.rows(),
                grid.cols()
            )));
        }
        Ok(grid)
    }

    /// Wrap an existing array
    ///
    /// # Errors
    ///
    /// Returns a shape error if the array has no cells
    pub fn from_array(cells: Array2<T>) -> Result<Self> {
        if cells.is_empty() {
            return Err(shape_error(&"grid must contain at least one cell"));
        }
        Ok(Self { cells })
    }

    /// Rotate the grid a quarter turn clockwise in place
    ///
    /// Cell `(r, c)` moves to `(c, rows - 1 - r)`: a transpose followed by
    /// reversing every row. Rectangular grids swap their dimensions.
    pub fn rotate_clockwise(&mut self) {
        let transformed = self
            .cells
            .t()
            .slice(s![.., ..;-1])
            .as_standard_layout()
            .into_owned();
        self.cells = transformed;
    }

    /// Mirror the grid left to right in place
    pub fn flip_horizontal(&mut self) {
        let transformed = self
            .cells
            .slice(s![.., ..;-1])
            .as_standard_layout()
            .into_owned();
        self.cells = transformed;
    }

    /// Mirror the grid top to bottom in place
    pub fn flip_vertical(&mut self) {
        let transformed = self
            .cells
            .slice(s![..;-1, ..])
            .as_standard_layout()
            .into_owned();
        self.cells = transformed;
    }

    /// First row, read left to right
    pub fn top(&self) -> Vec<T> {
        self.cells.row(0).to_vec()
    }

    /// Last row, read left to right
    pub fn bottom(&self) -> Vec<T> {
        self.cells.row(self.rows() - 1).to_vec()
    }

    /// First column, read top to bottom
    pub fn left(&self) -> Vec<T> {
        self.cells.column(0).to_vec()
    }

    /// Last column, read top to bottom
    pub fn right(&self) -> Vec<T> {
        self.cells.column(self.cols() - 1).to_vec()
    }
}

impl<T> Grid2D<T> {
    /// Number of rows
    pub fn rows(&self) -> usize {
        self.cells.nrows()
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.cells.ncols()
    }

    /// Cell at `(row, col)`, if in bounds
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        self.cells.get([row, col])
    }

    /// Read-only view over all cells
    pub fn view(&self) -> ArrayView2<'_, T> {
        self.cells.view()
    }

    /// Iterate over rows as ndarray views
    pub fn iter_rows(&self) -> impl Iterator<Item = ndarray::ArrayView1<'_, T>> {
        self.cells.rows().into_iter()
    }

    /// Iterate over all cells in row-major order
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.cells.iter()
    }

    /// Consume the grid and return the backing array
    pub fn into_array(self) -> Array2<T> {
        self.cells
    }
}

impl Grid2D<bool> {
    /// Count of `true` cells
    pub fn count_active(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell).count()
    }
}

impl fmt::Display for Grid2D<bool> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use crate::io::configuration::{ACTIVE_CHAR, INACTIVE_CHAR};

        for row in self.iter_rows() {
            for &cell in row {
                let symbol = if cell { ACTIVE_CHAR } else { INACTIVE_CHAR };
                write!(f, "{symbol}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
