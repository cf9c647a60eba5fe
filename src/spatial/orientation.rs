//! The eight rigid orientations of a 2D grid
//!
//! A square has 8 symmetries: 4 rotations, each with or without a mirror.
//! The enumeration order is fixed (identity, three clockwise quarter turns,
//! then the mirrored grid followed by the same three quarter turns) so that
//! searches over orientations are reproducible.

use std::fmt;

use crate::spatial::grid::Grid2D;

/// Number of distinct rigid orientations
pub const ORIENTATION_COUNT: usize = 8;

/// One rigid transform: an optional horizontal mirror followed by
/// `quarter_turns` clockwise rotations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Orientation {
    flipped: bool,
    quarter_turns: u8,
}

impl Orientation {
    /// The untransformed orientation
    pub const IDENTITY: Self = Self::new(false, 0);

    /// All orientations in enumeration order
    pub const ALL: [Self; ORIENTATION_COUNT] = [
        Self::new(false, 0),
        Self::new(false, 1),
        Self::new(false, 2),
        Self::new(false, 3),
        Self::new(true, 0),
        Self::new(true, 1),
        Self::new(true, 2),
        Self::new(true, 3),
    ];

    /// Create an orientation, reducing the turn count modulo 4
    pub const fn new(flipped: bool, quarter_turns: u8) -> Self {
        Self {
            flipped,
            quarter_turns: quarter_turns % 4,
        }
    }

    /// Whether the grid is mirrored before rotating
    pub const fn is_flipped(self) -> bool {
        self.flipped
    }

    /// Number of clockwise quarter turns applied after the mirror
    pub const fn quarter_turns(self) -> u8 {
        self.quarter_turns
    }

    /// Position of this orientation in [`Orientation::ALL`]
    pub const fn index(self) -> usize {
        (self.flipped as usize) * 4 + self.quarter_turns as usize
    }

    /// Apply this transform to a grid in place
    pub fn apply_in_place<T: Clone>(self, grid: &mut Grid2D<T>) {
        if self.flipped {
            grid.flip_horizontal();
        }
        for _ in 0..self.quarter_turns {
            grid.rotate_clockwise();
        }
    }

    /// Return a transformed copy, leaving the source untouched
    #[must_use]
    pub fn apply<T: Clone>(self, grid: &Grid2D<T>) -> Grid2D<T> {
        let mut transformed = grid.clone();
        self.apply_in_place(&mut transformed);
        transformed
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let degrees = u16::from(self.quarter_turns) * 90;
        if self.flipped {
            write!(f, "flip+rot{degrees}")
        } else {
            write!(f, "rot{degrees}")
        }
    }
}

/// Enumerate every orientation of a grid as fresh copies
///
/// Each item pairs the transform with its result. The source grid is never
/// mutated, so a failed trial needs no undo step.
pub fn orientations<T: Clone>(
    grid: &Grid2D<T>,
) -> impl Iterator<Item = (Orientation, Grid2D<T>)> + '_ {
    Orientation::ALL
        .into_iter()
        .map(move |orientation| (orientation, orientation.apply(grid)))
}
