//! readme-toc - Keep a README's Table of Contents in sync with a markdown collection
//!
//! readme-toc provides:
//! - Recursive collection of markdown files
//! - Second-level heading extraction with GitHub-style anchors
//! - Section grouping by top-level folder, ordered by a configured list
//! - In-place README regeneration from the Table of Contents marker onward

use clap::Parser;
use colored::Colorize;
use std::io::IsTerminal;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

mod backends;
mod cli;
mod config;
mod core;
mod exitcode;
mod toc;

use crate::core::model::TocError;

fn main() {
    let cli = cli::Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }
    setup_logging(cli.verbose, cli.quiet);

    let code = match cli::run(cli) {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("{:#}", e);
            eprintln!("{}", format!("Error: {:#}", e).red());
            e.downcast_ref::<TocError>()
                .map(TocError::exit_code)
                .unwrap_or(exitcode::SOFTWARE)
        }
    };

    std::process::exit(code);
}

fn setup_logging(verbosity: u8, quiet: bool) {
    let level = match (quiet, verbosity) {
        (true, _) => LevelFilter::ERROR,
        (false, 0) => LevelFilter::WARN,
        (false, 1) => LevelFilter::INFO,
        (false, 2) => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    // RUST_LOG wins when set
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .init();
}
