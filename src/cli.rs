//! Command-line interface definitions.

use clap::{Parser, Subcommand};

/// Top-level CLI entry point for the documentation build orchestrator.
#[derive(Parser, Debug)]
#[command(
    name = "docmake",
    about = "Documentation build orchestrator: clean, stamp, build, archive",
    version
)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Options shared across subcommands.
    #[command(flatten)]
    pub global: GlobalOpts,
}

/// Options shared across all subcommands.
#[derive(Parser, Debug, Clone)]
pub struct GlobalOpts {
    /// Override project root directory
    #[arg(long, global = true)]
    pub root: Option<std::path::PathBuf>,

    /// Override the configured project name
    #[arg(short, long, global = true)]
    pub project: Option<String>,

    /// Override the configured author name
    #[arg(short, long, global = true)]
    pub author: Option<String>,

    /// Preview changes without applying
    #[arg(short = 'd', long, global = true)]
    pub dry_run: bool,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Remove backup files, caches, generated documentation, and the archive
    Clean,
    /// Stamp metadata, then build HTML documentation
    Doc,
    /// Clean, then archive the project tree
    Archive,
    /// Stamp project/author metadata into the documentation configuration
    Author,
    /// Print version information
    Version,
}
