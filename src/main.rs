//! CLI entry point for tile assembly and motif search

use clap::Parser;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};
use tilestitch::io::cli::{Cli, run};

fn main() -> tilestitch::Result<()> {
    let cli = Cli::parse();
    // A logger can only be installed once per process
    let _ = TermLogger::init(
        cli.log_level(),
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    );
    run(cli)
}
