//! Implementation of `sift ls`.

use std::process::ExitCode;

use super::shared;
use crate::cli::args::RootArgs;

/// Lists every discovered document, relative to the root.
pub fn run(args: &RootArgs) -> ExitCode {
    let config = match shared::resolve_config(args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let documents = match shared::documents(&config.root) {
        Ok(documents) => documents,
        Err(code) => return code,
    };

    if documents.is_empty() {
        println!("No documents found.");
        return ExitCode::SUCCESS;
    }

    for document in &documents {
        println!("{}", document.rel_path.display());
    }

    ExitCode::SUCCESS
}
