//! Growing slot grid that holds placed tiles during and after assembly
//!
//! Slots are addressed by world coordinates `[row, col]`, with the seed tile
//! at the origin. The backing array only ever covers the bounding box of
//! placed tiles; placing a tile outside it extends the array through
//! `spatial::extension` and shifts the offset, so coordinates handed out
//! earlier stay valid.

use std::collections::HashSet;
use std::fmt::Write as _;

use ndarray::{Array2, ArrayView1};

use crate::io::error::{Result, StitchError, computation_error, invalid_parameter};
use crate::spatial::extension::{calculate_extension, extend_array_2d};
use crate::spatial::tiles::{Side, Tile, TileId};

/// Tiles adjacent to one slot, by side
#[derive(Debug, Clone, Copy, Default)]
pub struct Neighbors<'a> {
    /// Tile directly above
    pub top: Option<&'a Tile>,
    /// Tile directly to the right
    pub right: Option<&'a Tile>,
    /// Tile directly below
    pub bottom: Option<&'a Tile>,
    /// Tile directly to the left
    pub left: Option<&'a Tile>,
}

impl<'a> Neighbors<'a> {
    /// Neighbour on the given side
    pub const fn get(&self, side: Side) -> Option<&'a Tile> {
        match side {
            Side::Top => self.top,
            Side::Right => self.right,
            Side::Bottom => self.bottom,
            Side::Left => self.left,
        }
    }

    /// Whether no side has a neighbour
    pub const fn is_empty(&self) -> bool {
        self.top.is_none() && self.right.is_none() && self.bottom.is_none() && self.left.is_none()
    }
}

/// Sparse rectangular grid of tile slots
///
/// Owns every tile placed into it. Slot `(row, col)` of the backing array
/// holds world coordinates `[row - offset[0], col - offset[1]]`.
#[derive(Debug, Clone)]
pub struct TileGrid {
    slots: Array2<Option<Tile>>,
    offset: [i32; 2],
}

impl TileGrid {
    /// Create a one-slot grid holding `tile` at the origin
    pub fn seeded(tile: Tile) -> Self {
        Self {
            slots: Array2::from_elem((1, 1), Some(tile)),
            offset: [0, 0],
        }
    }

    /// Wrap a prepared slot array whose top-left slot is the origin
    pub const fn from_slots(slots: Array2<Option<Tile>>) -> Self {
        Self {
            slots,
            offset: [0, 0],
        }
    }

    /// Number of slot rows
    pub fn rows(&self) -> usize {
        self.slots.nrows()
    }

    /// Number of slot columns
    pub fn cols(&self) -> usize {
        self.slots.ncols()
    }

    /// Slot dimensions (rows, cols)
    pub fn dimensions(&self) -> (usize, usize) {
        self.slots.dim()
    }

    /// Offset that maps world coordinates to slot indices
    pub const fn offset(&self) -> [i32; 2] {
        self.offset
    }

    /// Number of slots holding a tile
    pub fn placed_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// Tile at slot index `(row, col)`
    pub fn slot(&self, row: usize, col: usize) -> Option<&Tile> {
        self.slots.get([row, col]).and_then(Option::as_ref)
    }

    /// Tile at world coordinates
    pub fn get(&self, coordinates: [i32; 2]) -> Option<&Tile> {
        let [row, col] = self.index_of(coordinates)?;
        self.slot(row, col)
    }

    /// Convert world coordinates to slot indices, if inside the grid
    pub fn index_of(&self, coordinates: [i32; 2]) -> Option<[usize; 2]> {
        let row = usize::try_from(coordinates[0] + self.offset[0]).ok()?;
        let col = usize::try_from(coordinates[1] + self.offset[1]).ok()?;
        (row < self.rows() && col < self.cols()).then_some([row, col])
    }

    /// Convert slot indices to world coordinates
    pub const fn coordinates_of(&self, row: usize, col: usize) -> [i32; 2] {
        [row as i32 - self.offset[0], col as i32 - self.offset[1]]
    }

    /// Placed tiles around world coordinates
    pub fn neighbors(&self, coordinates: [i32; 2]) -> Neighbors<'_> {
        let at = |side: Side| {
            let step = side.step();
            self.get([coordinates[0] + step[0], coordinates[1] + step[1]])
        };
        Neighbors {
            top: at(Side::Top),
            right: at(Side::Right),
            bottom: at(Side::Bottom),
            left: at(Side::Left),
        }
    }

    /// Empty slots adjacent to at least one placed tile
    ///
    /// Includes positions just outside the current bounds. Order is
    /// deterministic: placed tiles in row-major order, then sides clockwise
    /// from the top.
    pub fn open_slots(&self) -> Vec<[i32; 2]> {
        let mut seen = HashSet::new();
        let mut open = Vec::new();

        for ((row, col), slot) in self.slots.indexed_iter() {
            if slot.is_none() {
                continue;
            }
            let origin = self.coordinates_of(row, col);
            for side in Side::ALL {
                let step = side.step();
                let candidate = [origin[0] + step[0], origin[1] + step[1]];
                if self.get(candidate).is_none() && seen.insert(candidate) {
                    open.push(candidate);
                }
            }
        }

        open
    }

    /// Place a tile at world coordinates, growing the grid if needed
    ///
    /// # Errors
    ///
    /// Returns an invalid parameter error if the slot already holds a tile
    pub fn insert(&mut self, coordinates: [i32; 2], tile: Tile) -> Result<()> {
        if let Some(existing) = self.get(coordinates) {
            return Err(invalid_parameter(
                "coordinates",
                &format!("{coordinates:?}"),
                &format!("slot already holds tile {}", existing.id()),
            ));
        }

        let info = calculate_extension(
            [self.rows(), self.cols()],
            self.offset,
            coordinates,
        );
        if info.needs_extension {
            let slots = std::mem::take(&mut self.slots);
            self.slots = extend_array_2d(slots, &info);
            self.offset = info.new_offset;
        }

        let [row, col] = self
            .index_of(coordinates)
            .ok_or_else(|| computation_error("grid extension", &"slot outside extended grid"))?;
        if let Some(slot) = self.slots.get_mut([row, col]) {
            *slot = Some(tile);
        }
        Ok(())
    }

    /// First empty slot in row-major order
    pub fn first_gap(&self) -> Option<(usize, usize)> {
        self.slots
            .indexed_iter()
            .find(|(_, slot)| slot.is_none())
            .map(|(index, _)| index)
    }

    /// Whether every slot holds a tile
    pub fn is_dense(&self) -> bool {
        self.first_gap().is_none()
    }

    /// Iterate over slot rows, top to bottom
    pub fn iter_rows(&self) -> impl Iterator<Item = ArrayView1<'_, Option<Tile>>> {
        self.slots.rows().into_iter()
    }

    /// Iterate over placed tiles in row-major order
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.slots.iter().flatten()
    }

    /// Corner tiles: top-left, top-right, bottom-left, bottom-right
    ///
    /// # Errors
    ///
    /// Returns an incomplete grid error if a corner slot is empty
    pub fn corners(&self) -> Result<[&Tile; 4]> {
        let last_row = self.rows().saturating_sub(1);
        let last_col = self.cols().saturating_sub(1);
        let corner = |row: usize, col: usize| {
            self.slot(row, col)
                .ok_or(StitchError::IncompleteGrid { row, col })
        };
        Ok([
            corner(0, 0)?,
            corner(0, last_col)?,
            corner(last_row, 0)?,
            corner(last_row, last_col)?,
        ])
    }

    /// Product of the four corner tile identifiers
    ///
    /// # Errors
    ///
    /// Returns an incomplete grid error if a corner is empty and a
    /// computation error if the product overflows `u64`
    pub fn corner_product(&self) -> Result<TileId> {
        self.corners()?
            .iter()
            .try_fold(1, |product: TileId, tile| product.checked_mul(tile.id()))
            .ok_or_else(|| computation_error("corner product", &"product overflows u64"))
    }

    /// Tile identifiers laid out by row, `-` for empty slots
    pub fn id_layout(&self) -> String {
        let mut layout = String::new();
        for row in self.iter_rows() {
            let line: Vec<String> = row
                .iter()
                .map(|slot| {
                    slot.as_ref()
                        .map_or_else(|| "-".to_string(), |tile| tile.id().to_string())
                })
                .collect();
            let _ = writeln!(layout, "{}", line.join(" "));
        }
        layout
    }
}
