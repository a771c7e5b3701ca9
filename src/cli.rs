//! CLI module - Command-line interface definition and handler

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use std::path::PathBuf;

use crate::config::TocConfig;
use crate::exitcode;
use crate::toc::regenerate;

/// readme-toc - regenerate a README's Table of Contents from a markdown collection.
#[derive(Parser, Debug)]
#[command(name = "readme-toc")]
#[command(
    author,
    version,
    about,
    long_about = r###"readme-toc scans a collection of markdown files, extracts every second-level
heading, and rewrites README.md from its "## Table of Contents" marker onward:
a new Table of Contents, one section per collected file or folder with links to
each heading, then the Contributing and License blocks.

Everything before the marker is preserved verbatim. If the marker is missing the
README is left untouched and the command exits with status 2.

Settings are read from readme-toc.toml under ROOT when present.

Examples:
    readme-toc
    readme-toc --check
    readme-toc --collection docs --readme docs/README.md --dry-run
"###
)]
pub struct Cli {
    /// Root directory for all operations.
    #[arg(
        long,
        default_value = ".",
        value_name = "ROOT",
        long_help = "Root directory for all operations (defaults to the current directory).\n\n\
Relative collection, README and config paths are resolved against it."
    )]
    pub root: PathBuf,

    /// Markdown collection directory.
    #[arg(
        long,
        value_name = "DIR",
        long_help = "Directory scanned recursively for markdown files.\n\n\
Overrides `collection` from the config file (default: collection)."
    )]
    pub collection: Option<PathBuf>,

    /// README file to rewrite.
    #[arg(
        long,
        value_name = "FILE",
        long_help = "README file containing the Table of Contents marker.\n\n\
Overrides `readme` from the config file (default: README.md)."
    )]
    pub readme: Option<PathBuf>,

    /// Config file (TOML).
    #[arg(
        long,
        value_name = "FILE",
        long_help = "Load settings from this TOML file instead of ROOT/readme-toc.toml."
    )]
    pub config: Option<PathBuf>,

    /// Print the regenerated README instead of writing it.
    #[arg(long, conflicts_with = "check")]
    pub dry_run: bool,

    /// Exit with status 1 if the README is out of date.
    #[arg(
        long,
        long_help = "Regenerate in memory and compare with the README on disk without writing.\n\n\
Exits with status 1 when they differ. Intended for CI."
    )]
    pub check: bool,

    /// Disable colored output.
    #[arg(long)]
    pub no_color: bool,

    /// Quiet mode (errors only).
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Verbose mode (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Run the CLI with parsed arguments, returning the exit status
pub fn run(cli: Cli) -> Result<i32> {
    // Get absolute root path
    let root = cli.root.canonicalize().unwrap_or(cli.root);

    let mut config = TocConfig::load(&root, cli.config.as_deref())?;
    if let Some(collection) = cli.collection {
        config.collection = collection;
    }
    if let Some(readme) = cli.readme {
        config.readme = readme;
    }

    let regen = regenerate(&root, &config)?;
    let name = regen
        .readme
        .path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "README".to_string());

    if cli.dry_run {
        print!("{}", regen.updated);
        return Ok(exitcode::OK);
    }

    if cli.check {
        if regen.is_stale() {
            eprintln!(
                "{}",
                format!("{} is out of date; run readme-toc to regenerate it", name).yellow()
            );
            return Ok(exitcode::STALE);
        }
        if !cli.quiet {
            println!("{} is up to date", name);
        }
        return Ok(exitcode::OK);
    }

    regen.write()?;
    tracing::info!(sections = regen.sections, files = regen.files, "regenerated");
    if !cli.quiet {
        println!("{}", format!("{} updated successfully", name).green());
    }

    Ok(exitcode::OK)
}
