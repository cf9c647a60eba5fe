//! Tests for command-line parsing and batch solving

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::{Path, PathBuf};

    use clap::Parser;
    use log::LevelFilter;
    use tempfile::TempDir;
    use tilestitch::StitchError;
    use tilestitch::io::cli::{
        Cli, Command, FileProcessor, GenerateArgs, SolveArgs, generate, output_path,
    };
    use tilestitch::io::configuration::{DEFAULT_SEED, DEFAULT_TILE_SIZE, SEA_MONSTER};
    use tilestitch::io::input::parse_tiles;

    const SAMPLE: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/data/sample.txt"));

    fn solve_args(target: &Path) -> SolveArgs {
        SolveArgs {
            target: target.to_path_buf(),
            motif: None,
            export: false,
            render: false,
            no_skip: false,
        }
    }

    fn sample_dir() -> (TempDir, PathBuf) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("sample.txt");
        fs::write(&path, SAMPLE).unwrap();
        (dir, path)
    }

    // Tests solve parsing with global flags after the subcommand
    // Verified by dropping `global = true` from the quiet flag
    #[test]
    fn test_cli_parse_solve() {
        let cli = Cli::parse_from(["tilestitch", "solve", "puzzles", "--render", "--quiet"]);
        assert!(cli.quiet);
        assert!(!cli.should_show_progress());
        assert_eq!(cli.log_level(), LevelFilter::Warn);

        assert!(matches!(
            &cli.command,
            Command::Solve(args)
                if args.target == Path::new("puzzles")
                    && args.render
                    && !args.export
                    && args.motif.is_none()
        ));
    }

    // Tests generate defaults
    #[test]
    fn test_cli_parse_generate_defaults() {
        let cli = Cli::parse_from(["tilestitch", "--verbose", "generate"]);
        assert_eq!(cli.log_level(), LevelFilter::Debug);

        assert!(matches!(
            &cli.command,
            Command::Generate(args)
                if args.seed == DEFAULT_SEED
                    && args.tile_size == DEFAULT_TILE_SIZE
                    && args.output.is_none()
                    && args.config().seed == DEFAULT_SEED
        ));
    }

    // Tests conflicting verbosity flags are refused
    #[test]
    fn test_cli_rejects_quiet_and_verbose() {
        assert!(Cli::try_parse_from(["tilestitch", "-q", "-v", "generate"]).is_err());
        assert!(Cli::try_parse_from(["tilestitch"]).is_err());
    }

    // Tests skipping only applies when exporting
    // Verified by inverting boolean logic in skip_existing
    #[test]
    fn test_skip_existing_logic() {
        let mut args = solve_args(Path::new("sample.txt"));
        assert!(!args.skip_existing());
        args.export = true;
        assert!(args.skip_existing());
        args.no_skip = true;
        assert!(!args.skip_existing());
    }

    // Tests export path naming
    #[test]
    fn test_output_path() {
        assert_eq!(
            output_path(Path::new("puzzles/day20.txt")),
            PathBuf::from("puzzles/day20_picture.png")
        );
    }

    // Tests the sample is solved end to end
    // Verified by skipping the motif search
    #[test]
    fn test_process_sample_file() {
        let (_dir, path) = sample_dir();
        let mut args = solve_args(&path);
        args.render = true;

        let reports = FileProcessor::new(args, false).unwrap().process().unwrap();
        assert_eq!(reports.len(), 1);

        let report = reports.first().unwrap();
        assert_eq!(report.dimensions, (3, 3));
        assert_eq!(report.corner_product, 20_899_048_083_289);
        assert_eq!(report.motif_count, 2);
        assert_eq!(report.roughness, 273);
        let rendered = report.rendered.as_deref().unwrap();
        assert_eq!(rendered.matches('O').count(), 30);
        assert!(report.exported.is_none());
    }

    // Tests a custom motif file replaces the sea monster
    #[test]
    fn test_process_with_motif_file() {
        let (dir, path) = sample_dir();
        let motif = dir.path().join("monster.pattern");
        fs::write(&motif, SEA_MONSTER.join("\n")).unwrap();

        let mut args = solve_args(&path);
        args.motif = Some(motif);
        let reports = FileProcessor::new(args, false).unwrap().process().unwrap();
        assert_eq!(reports.first().map(|report| report.motif_count), Some(2));
    }

    // Tests directories are processed in sorted order and other files ignored
    #[test]
    fn test_process_directory() {
        let (dir, _path) = sample_dir();
        fs::write(dir.path().join("a_copy.txt"), SAMPLE).unwrap();
        fs::write(dir.path().join("notes.md"), "not a puzzle").unwrap();

        let reports = FileProcessor::new(solve_args(dir.path()), false)
            .unwrap()
            .process()
            .unwrap();
        let names: Vec<String> = reports
            .iter()
            .filter_map(|report| report.path.file_name())
            .map(|name| name.to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["a_copy.txt", "sample.txt"]);
    }

    // Tests export writes a PNG and later runs skip it
    // Verified by ignoring existing outputs
    #[test]
    fn test_export_and_skip() {
        let (_dir, path) = sample_dir();
        let mut args = solve_args(&path);
        args.export = true;

        let reports = FileProcessor::new(args.clone(), false)
            .unwrap()
            .process()
            .unwrap();
        let exported = reports.first().and_then(|report| report.exported.clone()).unwrap();
        assert!(exported.exists());

        let skipped = FileProcessor::new(args.clone(), false)
            .unwrap()
            .process()
            .unwrap();
        assert!(skipped.is_empty());

        args.no_skip = true;
        let forced = FileProcessor::new(args, false).unwrap().process().unwrap();
        assert_eq!(forced.len(), 1);
    }

    // Tests invalid targets
    #[test]
    fn test_invalid_targets() {
        let dir = TempDir::new().unwrap();
        let wrong_extension = dir.path().join("puzzle.png");
        fs::write(&wrong_extension, "").unwrap();

        let result = FileProcessor::new(solve_args(&wrong_extension), false)
            .unwrap()
            .process();
        assert!(matches!(result, Err(StitchError::InvalidParameter { .. })));

        let missing = FileProcessor::new(solve_args(&dir.path().join("nothing")), false)
            .unwrap()
            .process();
        assert!(matches!(missing, Err(StitchError::InvalidParameter { .. })));
    }

    // Tests generated puzzles are written in the input format
    #[test]
    fn test_generate_writes_puzzle() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("generated.txt");
        let args = GenerateArgs {
            seed: 3,
            tiles_per_side: 2,
            tile_size: 8,
            fill_ratio: 0.5,
            output: Some(output.clone()),
        };

        let puzzle = generate(&args).unwrap();
        let parsed = parse_tiles(&fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(parsed, puzzle.tiles);
        assert_eq!(parsed.len(), 4);
    }
}
