//! Dynamic grid extension for slot grids that grow in every direction
//!
//! The assembly grid starts as a single slot and grows whenever a tile is
//! placed beyond its current bounds. World coordinates stay stable across
//! growth: a grid index is `coordinates + offset`, and extending at the top
//! or left shifts the offset instead of renumbering placed tiles.

use ndarray::Array2;

/// Types that can fill freshly added grid cells
pub trait Extendable {
    /// The value to use for padding new cells
    fn padding_value() -> Self;
}

impl<T> Extendable for Option<T> {
    fn padding_value() -> Self {
        None
    }
}

/// Extension information calculated from current bounds and target position
///
/// Stores the number of rows and columns to add on each side and the
/// updated coordinate system offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtensionInfo {
    /// Rows added above the current grid
    pub pad_top: usize,
    /// Rows added below the current grid
    pub pad_bottom: usize,
    /// Columns added left of the current grid
    pub pad_left: usize,
    /// Columns added right of the current grid
    pub pad_right: usize,
    /// Updated coordinate system offset after extension
    pub new_offset: [i32; 2],
    /// Whether extension is actually required
    pub needs_extension: bool,
}

/// Calculate the padding needed for a grid to contain `coordinates`
///
/// `current_dims` is `(rows, cols)`; `offset` maps world coordinates to grid
/// indices. Returns zero padding when the position is already in bounds.
pub fn calculate_extension(
    current_dims: [usize; 2],
    offset: [i32; 2],
    coordinates: [i32; 2],
) -> ExtensionInfo {
    let current_min = [-offset[0], -offset[1]];
    let current_max = [
        current_min[0] + current_dims[0] as i32 - 1,
        current_min[1] + current_dims[1] as i32 - 1,
    ];

    let pad_top = (current_min[0] - coordinates[0]).max(0) as usize;
    let pad_bottom = (coordinates[0] - current_max[0]).max(0) as usize;
    let pad_left = (current_min[1] - coordinates[1]).max(0) as usize;
    let pad_right = (coordinates[1] - current_max[1]).max(0) as usize;

    let needs_extension = pad_top + pad_bottom + pad_left + pad_right > 0;

    let new_offset = [offset[0] + pad_top as i32, offset[1] + pad_left as i32];

    ExtensionInfo {
        pad_top,
        pad_bottom,
        pad_left,
        pad_right,
        new_offset,
        needs_extension,
    }
}

/// Extend a 2D array with padding
///
/// Copies existing cells to their shifted position in the new array and
/// fills the added border with [`Extendable::padding_value`]. Returns the
/// input unchanged if no extension is needed.
pub fn extend_array_2d<T: Clone + Extendable>(array: Array2<T>, info: &ExtensionInfo) -> Array2<T> {
    if !info.needs_extension {
        return array;
    }

    let (old_rows, old_cols) = array.dim();
    let new_shape = (
        old_rows + info.pad_top + info.pad_bottom,
        old_cols + info.pad_left + info.pad_right,
    );

    // O(mn) copy preserves spatial relationships
    Array2::from_shape_fn(new_shape, |(row, col)| {
        row.checked_sub(info.pad_top)
            .zip(col.checked_sub(info.pad_left))
            .and_then(|(old_row, old_col)| array.get([old_row, old_col]))
            .cloned()
            .unwrap_or_else(T::padding_value)
    })
}
