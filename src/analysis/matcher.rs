//! Sliding-window motif search and the roughness metric
//!
//! The motif is tried in all 8 orientations. For each orientation its
//! bounding box visits every top-left offset that keeps it inside the
//! picture, and an offset matches when every required motif cell lands on an
//! active picture cell. The orientation with the most matches is taken as the
//! picture's true orientation; ties go to the earlier orientation.
//!
//! Matches are counted as found, without removing overlaps. The union of
//! covered cells is tracked separately so overlapping instances can be
//! detected and reported.

use bitvec::prelude::*;
use log::{debug, warn};

use crate::algorithm::compositor::Picture;
use crate::analysis::motif::Motif;
use crate::io::configuration::{ACTIVE_CHAR, INACTIVE_CHAR, MOTIF_CHAR};
use crate::io::error::{Result, computation_error};
use crate::spatial::orientation::Orientation;

/// Result of searching a picture for a motif
#[derive(Debug, Clone)]
pub struct MatchReport {
    /// Number of matches under the best orientation
    pub count: usize,
    /// Required cells summed over all matches, overlaps counted repeatedly
    pub covered_cells: usize,
    /// Orientation of the motif that produced the most matches
    pub orientation: Orientation,
    /// Top-left offsets `[row, col]` of every match
    pub positions: Vec<[usize; 2]>,
    coverage: BitVec,
    picture_cols: usize,
}

impl MatchReport {
    /// Number of distinct picture cells covered by at least one match
    pub fn distinct_covered_cells(&self) -> usize {
        self.coverage.count_ones()
    }

    /// Whether any picture cell is covered by more than one match
    pub fn has_overlaps(&self) -> bool {
        self.distinct_covered_cells() < self.covered_cells
    }

    /// Whether a match covers the picture cell at `(row, col)`
    pub fn is_covered(&self, row: usize, col: usize) -> bool {
        if col >= self.picture_cols {
            return false;
        }
        self.coverage.get(row * self.picture_cols + col).as_deref() == Some(&true)
    }
}

/// Top-left offsets where every required motif cell hits an active cell
///
/// Returns no offsets if the motif is larger than the picture.
pub fn find_matches(picture: &Picture, motif: &Motif) -> Vec<[usize; 2]> {
    let (Some(last_row), Some(last_col)) = (
        picture.rows().checked_sub(motif.rows()),
        picture.cols().checked_sub(motif.cols()),
    ) else {
        return Vec::new();
    };

    let required = motif.required_offsets();
    let mut positions = Vec::new();
    for top in 0..=last_row {
        for left in 0..=last_col {
            if required
                .iter()
                .all(|&[row, col]| picture.is_active(top + row, left + col))
            {
                positions.push([top, left]);
            }
        }
    }
    positions
}

/// Search a picture for a motif in all 8 orientations
pub fn count_occurrences(picture: &Picture, motif: &Motif) -> MatchReport {
    let mut best: Option<(Orientation, Motif, Vec<[usize; 2]>)> = None;

    for (orientation, oriented) in motif.orientations() {
        let positions = find_matches(picture, &oriented);
        debug!("motif {orientation}: {} matches", positions.len());

        let improves = best
            .as_ref()
            .is_none_or(|(_, _, best_positions)| positions.len() > best_positions.len());
        if improves {
            best = Some((orientation, oriented, positions));
        }
    }

    let (orientation, oriented, positions) =
        best.unwrap_or_else(|| (Orientation::IDENTITY, motif.clone(), Vec::new()));

    let picture_cols = picture.cols();
    let mut coverage = bitvec![0; picture.rows() * picture_cols];
    let required = oriented.required_offsets();
    for &[top, left] in &positions {
        for &[row, col] in &required {
            coverage.set((top + row) * picture_cols + left + col, true);
        }
    }

    let report = MatchReport {
        count: positions.len(),
        covered_cells: positions.len() * oriented.weight(),
        orientation,
        positions,
        coverage,
        picture_cols,
    };

    if report.has_overlaps() {
        warn!(
            "{} motif matches overlap: {} cells counted, {} distinct",
            report.count,
            report.covered_cells,
            report.distinct_covered_cells()
        );
    }

    report
}

/// Active picture cells not covered by motif matches
///
/// Computed as `active cells - matches * motif weight`. A cell shared by two
/// overlapping matches is subtracted twice.
///
/// # Errors
///
/// Returns a computation error if overlapping matches account for more
/// cells than the picture has active
pub fn roughness(picture: &Picture, report: &MatchReport) -> Result<usize> {
    let active = picture.active_count();
    active.checked_sub(report.covered_cells).ok_or_else(|| {
        computation_error(
            "roughness",
            &format!(
                "{} covered cells exceed {active} active cells",
                report.covered_cells
            ),
        )
    })
}

/// Picture text with matched motif cells drawn as `O`
pub fn render_matches(picture: &Picture, report: &MatchReport) -> String {
    let mut rendered = String::with_capacity(picture.rows() * (picture.cols() + 1));
    for row in 0..picture.rows() {
        for col in 0..picture.cols() {
            let symbol = if report.is_covered(row, col) {
                MOTIF_CHAR
            } else if picture.is_active(row, col) {
                ACTIVE_CHAR
            } else {
                INACTIVE_CHAR
            };
            rendered.push(symbol);
        }
        rendered.push('\n');
    }
    rendered
}
