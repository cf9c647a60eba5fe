//! Text input for tile sets and motifs
//!
//! Tile sets are blocks opened by a `Tile <id>:` header and followed by
//! rows of `#` and `.`; blank lines between blocks are ignored. Motifs are
//! plain rows of `#` and spaces where leading whitespace is significant.

use std::path::Path;

use crate::analysis::motif::Motif;
use crate::io::configuration::TILE_HEADER_PREFIX;
use crate::io::error::{Result, StitchError};
use crate::spatial::tiles::{Tile, TileId};

/// Header line and cell rows of one tile block
struct TileBlock<'a> {
    id: TileId,
    first_line: usize,
    rows: Vec<&'a str>,
}

impl TileBlock<'_> {
    fn into_tile(self) -> Result<Tile> {
        Tile::from_lines(self.id, &self.rows, self.first_line)
    }
}

/// Parse every tile block in `text`
///
/// Each tile is fully validated before the next block is read, so no
/// malformed tile is ever returned.
///
/// # Errors
///
/// Returns an error if:
/// - A cell row appears before the first header
/// - A header carries no numeric identifier
/// - A block has an unexpected character or is not square
pub fn parse_tiles(text: &str) -> Result<Vec<Tile>> {
    let mut tiles = Vec::new();
    let mut current: Option<TileBlock<'_>> = None;

    for (index, raw_line) in text.lines().enumerate() {
        let line_number = index + 1;
        let line = raw_line.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(header) = line.strip_prefix(TILE_HEADER_PREFIX) {
            if let Some(block) = current.take() {
                tiles.push(block.into_tile()?);
            }
            current = Some(TileBlock {
                id: parse_tile_id(header, line_number)?,
                first_line: line_number + 1,
                rows: Vec::new(),
            });
            continue;
        }

        match current.as_mut() {
            Some(block) => block.rows.push(line),
            None => {
                return Err(StitchError::Parse {
                    line: line_number,
                    reason: format!("expected a '{TILE_HEADER_PREFIX} <id>:' header"),
                });
            }
        }
    }

    if let Some(block) = current {
        tiles.push(block.into_tile()?);
    }
    Ok(tiles)
}

fn parse_tile_id(header: &str, line: usize) -> Result<TileId> {
    let id_text = header.trim().trim_end_matches(':').trim();
    id_text.parse::<TileId>().map_err(|error| StitchError::Parse {
        line,
        reason: format!("invalid tile identifier {id_text:?}: {error}"),
    })
}

/// Parse a motif from text rows
///
/// Blank lines before and after the pattern are dropped; everything else,
/// including leading spaces, is kept.
///
/// # Errors
///
/// Returns a parse error on characters other than `#`, `.` or space, and a
/// shape error if the pattern is empty or has no `#`
pub fn parse_motif(text: &str) -> Result<Motif> {
    let lines: Vec<&str> = text.lines().map(|line| line.trim_end_matches('\r')).collect();
    let first = lines.iter().position(|line| !line.trim().is_empty());
    let last = lines.iter().rposition(|line| !line.trim().is_empty());
    let pattern: &[&str] = match (first, last) {
        (Some(first), Some(last)) => lines.get(first..=last).unwrap_or_default(),
        _ => &[],
    };
    Motif::from_pattern(pattern)
}

/// Read and parse a tile set file
///
/// # Errors
///
/// Returns a file system error if the file cannot be read, or any error of
/// [`parse_tiles`]
pub fn read_tiles(path: &Path) -> Result<Vec<Tile>> {
    parse_tiles(&read_text(path)?)
}

/// Read and parse a motif file
///
/// # Errors
///
/// Returns a file system error if the file cannot be read, or any error of
/// [`parse_motif`]
pub fn read_motif(path: &Path) -> Result<Motif> {
    parse_motif(&read_text(path)?)
}

fn read_text(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| StitchError::FileSystem {
        path: path.to_path_buf(),
        operation: "read",
        source,
    })
}
