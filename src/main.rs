//! Binary entry point for the `docmake` CLI.

use anyhow::Result;
use clap::Parser;

use docmake::commands::{self, Context};
use docmake::logging::Logger;
use docmake::{cli, logging};

fn main() -> Result<()> {
    let _ = enable_ansi_support::enable_ansi_support();
    let args = cli::Cli::parse();
    logging::init_subscriber(args.verbose);
    let log = Logger;

    match args.command {
        cli::Command::Clean => commands::clean::run(&Context::init(&args.global, log)?),
        cli::Command::Doc => commands::doc::run(&Context::init(&args.global, log)?),
        cli::Command::Archive => commands::archive::run(&Context::init(&args.global, log)?),
        cli::Command::Author => commands::author::run(&Context::init(&args.global, log)?),
        cli::Command::Version => {
            let version = option_env!("DOCMAKE_VERSION").unwrap_or(env!("CARGO_PKG_VERSION"));
            println!("docmake {version}");
            Ok(())
        }
    }
}
