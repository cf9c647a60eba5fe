//! Stitching constants and runtime configuration defaults

// Input alphabet
/// Character marking an active cell in tile and picture text
pub const ACTIVE_CHAR: char = '#';
/// Character marking an inactive cell in tile and picture text
pub const INACTIVE_CHAR: char = '.';
/// Character marking a don't-care cell in motif text
pub const WILDCARD_CHAR: char = ' ';
/// Character marking a picture cell covered by a motif match when rendering
pub const MOTIF_CHAR: char = 'O';
/// Prefix of the header line that opens every tile block
pub const TILE_HEADER_PREFIX: &str = "Tile";

/// Canonical 3x20 sea-monster motif
pub const SEA_MONSTER: [&str; 3] = [
    "                  # ",
    "#    ##    ##    ###",
    " #  #  #  #  #  #   ",
];

// A tile needs at least one interior cell once its border is stripped
/// Smallest tile side that still carries an interior
pub const MIN_TILE_SIZE: usize = 3;

/// Largest tile side accepted by the generator
pub const MAX_TILE_SIZE: usize = 64;

// Default values for configurable parameters
/// Fixed seed for reproducible puzzle generation
pub const DEFAULT_SEED: u64 = 42;
/// Default number of tiles along each side of a generated puzzle
pub const DEFAULT_TILES_PER_SIDE: usize = 3;
/// Default side length of generated tiles
pub const DEFAULT_TILE_SIZE: usize = 10;
/// Probability that a generated picture cell is active
pub const DEFAULT_FILL_RATIO: f64 = 0.5;

// Prevents generation from spinning on parameters that cannot yield unique edges
/// Maximum attempts at drawing a picture with unambiguous edges
pub const MAX_GENERATION_ATTEMPTS: usize = 10_000;
/// Largest supported number of tiles per side for generated puzzles
pub const MAX_TILES_PER_SIDE: usize = 32;
/// Lowest identifier handed to generated tiles
pub const GENERATED_ID_BASE: u64 = 1000;

// Output settings
/// Suffix added to exported picture filenames
pub const OUTPUT_SUFFIX: &str = "_picture";
/// Extension of puzzle input files picked up from a directory
pub const INPUT_EXTENSION: &str = "txt";
/// Pixel colour of active picture cells in exported images
pub const ACTIVE_COLOR: [u8; 4] = [0, 105, 148, 255];
/// Pixel colour of inactive picture cells in exported images
pub const INACTIVE_COLOR: [u8; 4] = [0, 0, 0, 0];
/// Pixel colour of motif-covered cells in exported images
pub const MOTIF_COLOR: [u8; 4] = [46, 139, 87, 255];

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;
