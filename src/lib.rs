//! Edge-matching jigsaw assembly of square bitmap tiles and motif search
//!
//! Tiles are oriented and placed one by one until every touching pair of
//! borders agrees. The assembled tiles are stripped of their borders and
//! stitched into one picture, which is then searched for a motif in all
//! eight orientations to measure its roughness.

#![deny(unsafe_code)]

/// Assembly engine, slot grid, picture compositor and puzzle generator
pub mod algorithm;
/// Motif stencils and sliding-window matching
pub mod analysis;
/// Input/output operations and error handling
pub mod io;
/// Generic grids, orientations and tiles
pub mod spatial;

pub use io::error::{Result, StitchError};
