//! Command-line interface for the `sift` document analysis tool.

use std::{io, process::ExitCode};

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::args::{Cli, Commands};

mod cli;

fn main() -> ExitCode {
    init_logging();

    let cli = Cli::parse();
    match cli.command {
        Commands::Ls(args) => cli::commands::ls::run(&args),
        Commands::Filter(cmd) => cli::commands::filter::run(&cmd),
        Commands::Search(cmd) => cli::commands::search::run(&cmd),
        Commands::Entities(cmd) => cli::commands::entities::run(&cmd),
    }
}

/// Initializes stderr logging, honoring `RUST_LOG` and defaulting to
/// warnings so skipped-document messages are visible.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
