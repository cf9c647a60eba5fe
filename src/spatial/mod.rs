//! Spatial data structures and grid manipulation
//!
//! This module contains spatial-related functionality including:
//! - Generic 2D grids with rigid transforms
//! - Orientation enumeration
//! - Tiles and their border signatures
//! - Grid extension for slot grids that grow in every direction

/// Grid extension utilities
pub mod extension;
/// Generic 2D grid with rotation, reflection and edge access
pub mod grid;
/// The eight rigid orientations of a grid
pub mod orientation;
/// Square bitmap tiles and edge signatures
pub mod tiles;

pub use grid::Grid2D;
pub use orientation::Orientation;
pub use tiles::{Tile, TileId};
