//! Helpers shared by the commands.

use std::{path::Path, process::ExitCode};

use sift_config::{Config, ConfigError};
use sift_document::{DiscoveredDocument, discover_documents};

use crate::cli::args::RootArgs;

/// Resolves configuration from flags and the optional config file.
///
/// An explicit `--config` path must load; otherwise `./sift.toml` is used
/// when present and defaults apply when it is not. `--root` overrides the
/// configured document root.
pub fn resolve_config(args: &RootArgs) -> Result<Config, ConfigError> {
    let mut config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::discover(Path::new("."))?,
    };

    if let Some(root) = &args.root {
        config.root = root.clone();
    }

    Ok(config)
}

/// Discovers documents under `root`, reporting an unusable root inline.
pub fn documents(root: &Path) -> Result<Vec<DiscoveredDocument>, ExitCode> {
    if !root.is_dir() {
        eprintln!("error: document root is not a directory: {}", root.display());
        return Err(ExitCode::FAILURE);
    }

    Ok(discover_documents(root))
}
