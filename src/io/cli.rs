//! Command-line interface for solving and generating tile puzzles

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use log::{LevelFilter, info};

use crate::algorithm::assembly::Assembler;
use crate::algorithm::compositor::compose;
use crate::algorithm::generator::{GeneratedPuzzle, GeneratorConfig, generate_puzzle};
use crate::analysis::matcher::{count_occurrences, render_matches, roughness};
use crate::analysis::motif::Motif;
use crate::io::configuration::{
    DEFAULT_FILL_RATIO, DEFAULT_SEED, DEFAULT_TILE_SIZE, DEFAULT_TILES_PER_SIDE, INPUT_EXTENSION,
    OUTPUT_SUFFIX,
};
use crate::io::error::{Result, StitchError, invalid_parameter};
use crate::io::image::export_picture_png;
use crate::io::input::{read_motif, read_tiles};
use crate::io::progress::ProgressManager;
use crate::spatial::tiles::TileId;

#[derive(Parser, Debug)]
#[command(name = "tilestitch")]
#[command(
    author,
    version,
    about = "Reassemble scrambled image tiles and search the picture for motifs"
)]
/// Command-line arguments
pub struct Cli {
    /// Operation to run
    #[command(subcommand)]
    pub command: Command,

    /// Suppress progress output and informational logs
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Log level selected by the global flags
    pub const fn log_level(&self) -> LevelFilter {
        if self.quiet {
            LevelFilter::Warn
        } else if self.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        }
    }
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Assemble puzzle files and report corner product and roughness
    Solve(SolveArgs),
    /// Write a random puzzle with a unique assembly
    Generate(GenerateArgs),
}

/// Arguments of `solve`
#[derive(Args, Debug, Clone)]
pub struct SolveArgs {
    /// Puzzle text file or directory of puzzles
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Motif pattern file (defaults to the sea monster)
    #[arg(short, long, value_name = "FILE")]
    pub motif: Option<PathBuf>,

    /// Write the picture as `<stem>_picture.png` next to each puzzle
    #[arg(short, long)]
    pub export: bool,

    /// Print the picture with motif cells marked
    #[arg(short, long)]
    pub render: bool,

    /// Process files even if the exported picture exists
    #[arg(short, long)]
    pub no_skip: bool,
}

impl SolveArgs {
    /// Check if files with an existing export should be skipped
    pub const fn skip_existing(&self) -> bool {
        self.export && !self.no_skip
    }
}

/// Arguments of `generate`
#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    /// Random seed for reproducible generation
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Tiles along each side of the arrangement
    #[arg(short, long, default_value_t = DEFAULT_TILES_PER_SIDE)]
    pub tiles_per_side: usize,

    /// Side length of each tile
    #[arg(short = 'z', long, default_value_t = DEFAULT_TILE_SIZE)]
    pub tile_size: usize,

    /// Probability that a cell is active
    #[arg(short, long, default_value_t = DEFAULT_FILL_RATIO)]
    pub fill_ratio: f64,

    /// Output file (prints to stdout when absent)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl GenerateArgs {
    /// Generator parameters from the arguments
    pub const fn config(&self) -> GeneratorConfig {
        GeneratorConfig {
            tiles_per_side: self.tiles_per_side,
            tile_size: self.tile_size,
            fill_ratio: self.fill_ratio,
            seed: self.seed,
        }
    }
}

/// Results of solving one puzzle file
#[derive(Debug, Clone)]
pub struct PuzzleReport {
    /// Input file
    pub path: PathBuf,
    /// Tile grid dimensions (rows, cols)
    pub dimensions: (usize, usize),
    /// Product of the four corner tile identifiers
    pub corner_product: TileId,
    /// Motif matches under the best orientation
    pub motif_count: usize,
    /// Active cells not covered by motif matches
    pub roughness: usize,
    /// Picture with matched cells marked, when rendering was requested
    pub rendered: Option<String>,
    /// Exported PNG, when export was requested
    pub exported: Option<PathBuf>,
}

/// Orchestrates batch solving of puzzle files with progress tracking
pub struct FileProcessor {
    args: SolveArgs,
    motif: Motif,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a processor, loading the motif up front
    ///
    /// # Errors
    ///
    /// Returns an error if the motif file cannot be read or parsed
    pub fn new(args: SolveArgs, show_progress: bool) -> Result<Self> {
        let motif = match &args.motif {
            Some(path) => read_motif(path)?,
            None => Motif::sea_monster()?,
        };
        let progress_manager = show_progress.then(ProgressManager::new);

        Ok(Self {
            args,
            motif,
            progress_manager,
        })
    }

    /// Solve every selected puzzle file in sorted order
    ///
    /// # Errors
    ///
    /// Returns an error if the target is invalid or any puzzle fails to
    /// parse, assemble or export
    pub fn process(&mut self) -> Result<Vec<PuzzleReport>> {
        let files = self.collect_files()?;
        if files.is_empty() {
            return Ok(Vec::new());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        let mut reports = Vec::with_capacity(files.len());
        for (index, file) in files.iter().enumerate() {
            reports.push(self.process_file(file, index)?);
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.finish();
        }

        Ok(reports)
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        let target = &self.args.target;
        if target.is_file() {
            if !has_input_extension(target) {
                return Err(invalid_parameter(
                    "target",
                    &target.display(),
                    &format!("puzzle files must have the .{INPUT_EXTENSION} extension"),
                ));
            }
            Ok(if self.should_process_file(target) {
                vec![target.clone()]
            } else {
                Vec::new()
            })
        } else if target.is_dir() {
            let entries = std::fs::read_dir(target).map_err(|source| StitchError::FileSystem {
                path: target.clone(),
                operation: "list directory",
                source,
            })?;
            let mut files = Vec::new();
            for entry in entries {
                let path = entry
                    .map_err(|source| StitchError::FileSystem {
                        path: target.clone(),
                        operation: "read directory entry",
                        source,
                    })?
                    .path();
                if path.is_file() && has_input_extension(&path) && self.should_process_file(&path)
                {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(invalid_parameter(
                "target",
                &target.display(),
                &"must be a puzzle file or directory",
            ))
        }
    }

    fn should_process_file(&self, input_path: &Path) -> bool {
        if !self.args.skip_existing() {
            return true;
        }
        let output_path = output_path(input_path);
        if output_path.exists() {
            info!("Skipping: {} (output exists)", input_path.display());
            false
        } else {
            true
        }
    }

    fn process_file(&mut self, input_path: &Path, index: usize) -> Result<PuzzleReport> {
        let tiles = read_tiles(input_path)?;
        let mut assembler = Assembler::new(tiles)?;

        if let Some(ref mut pm) = self.progress_manager {
            pm.start_file(index, input_path, assembler.total());
            pm.update_placed(index, assembler.placed());
        }

        while !assembler.is_complete() {
            assembler.execute_pass()?;
            if let Some(ref mut pm) = self.progress_manager {
                pm.update_placed(index, assembler.placed());
            }
        }

        let grid = assembler.finish()?;
        let corner_product = grid.corner_product()?;
        let picture = compose(&grid)?;
        let report = count_occurrences(&picture, &self.motif);
        let roughness = roughness(&picture, &report)?;

        let exported = if self.args.export {
            let path = output_path(input_path);
            export_picture_png(&picture, Some(&report), &path)?;
            Some(path)
        } else {
            None
        };

        if let Some(ref mut pm) = self.progress_manager {
            pm.complete_file(index);
        }

        Ok(PuzzleReport {
            path: input_path.to_path_buf(),
            dimensions: grid.dimensions(),
            corner_product,
            motif_count: report.count,
            roughness,
            rendered: self
                .args
                .render
                .then(|| render_matches(&picture, &report)),
            exported,
        })
    }
}

fn has_input_extension(path: &Path) -> bool {
    path.extension().and_then(|s| s.to_str()) == Some(INPUT_EXTENSION)
}

/// PNG path for a puzzle file: `<stem>_picture.png` in the same directory
pub fn output_path(input_path: &Path) -> PathBuf {
    let stem = input_path.file_stem().unwrap_or_default();
    let output_name = format!("{}{OUTPUT_SUFFIX}.png", stem.to_string_lossy());

    if let Some(parent) = input_path.parent() {
        parent.join(output_name)
    } else {
        PathBuf::from(output_name)
    }
}

/// Generate a puzzle and write it to the requested output
///
/// Returns the puzzle so callers can inspect the ground truth.
///
/// # Errors
///
/// Returns an error if the parameters are invalid or the output file cannot
/// be written
#[allow(clippy::print_stdout)]
pub fn generate(args: &GenerateArgs) -> Result<GeneratedPuzzle> {
    let puzzle = generate_puzzle(&args.config())?;
    let text = puzzle.to_text();

    match &args.output {
        Some(path) => {
            std::fs::write(path, text).map_err(|source| StitchError::FileSystem {
                path: path.clone(),
                operation: "write",
                source,
            })?;
            info!("wrote {} tiles to {}", puzzle.tiles.len(), path.display());
        }
        None => print!("{text}"),
    }

    Ok(puzzle)
}

/// Run the selected subcommand
///
/// # Errors
///
/// Returns the first error raised by the subcommand
// Results are the program's output
#[allow(clippy::print_stdout)]
pub fn run(cli: Cli) -> Result<()> {
    let show_progress = cli.should_show_progress();
    match cli.command {
        Command::Solve(args) => {
            let mut processor = FileProcessor::new(args, show_progress)?;
            for report in processor.process()? {
                let (rows, cols) = report.dimensions;
                println!(
                    "{}: {rows}x{cols} tiles, corner product {}, {} motifs, roughness {}",
                    report.path.display(),
                    report.corner_product,
                    report.motif_count,
                    report.roughness
                );
                if let Some(rendered) = &report.rendered {
                    print!("{rendered}");
                }
            }
        }
        Command::Generate(args) => {
            generate(&args)?;
        }
    }
    Ok(())
}
