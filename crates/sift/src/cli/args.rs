//! Clap argument definitions for the `sift` CLI.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use sift_entity::EntityCategory;

#[derive(Parser)]
#[command(name = "sift")]
#[command(about = "Offline document search and entity extraction")]
/// Top-level CLI options.
pub struct Cli {
    #[command(subcommand)]
    /// Subcommand to execute.
    pub command: Commands,
}

#[derive(Subcommand)]
/// Supported `sift` subcommands.
pub enum Commands {
    /// List documents discovered under the root directory
    Ls(RootArgs),

    /// List documents whose content contains every query term
    Filter(FilterCommand),

    /// Scan documents for query terms and rank the matching snippets
    Search(SearchCommand),

    /// Extract named entities of one category from every document
    Entities(EntitiesCommand),
}

/// Options shared by every command that scans a document tree.
#[derive(Args)]
pub struct RootArgs {
    /// Directory to scan for documents (overrides the config file)
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Path to a configuration file (default: ./sift.toml if present)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// Arguments for `sift filter`.
#[derive(Args)]
pub struct FilterCommand {
    /// Query; a document matches when it contains every term
    pub query: String,

    #[command(flatten)]
    /// Document tree options.
    pub root: RootArgs,
}

/// Arguments for `sift search`.
#[derive(Args)]
pub struct SearchCommand {
    /// Search query; whitespace-separated terms are OR-ed together
    pub query: String,

    #[command(flatten)]
    /// Document tree options.
    pub root: RootArgs,

    /// Window length in characters (20-1500)
    #[arg(long)]
    pub chunk_size: Option<usize>,

    /// Overlap between consecutive windows, in characters
    #[arg(long)]
    pub overlap_size: Option<usize>,

    /// Maximum number of ranked results
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,

    #[command(flatten)]
    /// Output options.
    pub output: OutputArgs,
}

/// Arguments for `sift entities`.
#[derive(Args)]
pub struct EntitiesCommand {
    /// Entity category (SUBJECT, PLACE, NORP, FAC, LOC, PRODUCT, DATE,
    /// LAW, QUANTITY)
    pub category: EntityCategory,

    /// Path to the entity lexicon (TOML table of phrase = "LABEL")
    #[arg(long)]
    pub lexicon: PathBuf,

    #[command(flatten)]
    /// Document tree options.
    pub root: RootArgs,

    #[command(flatten)]
    /// Output options.
    pub output: OutputArgs,
}

/// Output selection shared by `search` and `entities`.
#[derive(Args)]
pub struct OutputArgs {
    /// Emit results as JSON on stdout instead of a table
    #[arg(long)]
    pub json: bool,

    /// Also write results to a CSV file
    #[arg(long, value_name = "FILE")]
    pub csv: Option<PathBuf>,
}
