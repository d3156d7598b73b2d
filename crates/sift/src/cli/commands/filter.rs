//! Implementation of `sift filter`.

use std::{process::ExitCode, sync::Arc};

use sift_document::Loader;
use sift_scan::SearchQuery;
use tracing::warn;

use super::shared;
use crate::cli::args::FilterCommand;

/// Lists documents whose content contains every query term.
///
/// A blank query lists every document, mirroring a cleared filter. Terms
/// are matched case-insensitively as substrings, which is deliberately
/// looser than the scanner's whole-word matching.
pub fn run(cmd: &FilterCommand) -> ExitCode {
    let config = match shared::resolve_config(&cmd.root) {
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

    let query = SearchQuery::parse(&cmd.query);
    let loader = Arc::new(Loader::new());

    for document in &documents {
        if query.is_empty() {
            println!("{}", document.name());
            continue;
        }

        let content = match loader.load(&document.abs_path) {
            Ok(content) => content,
            Err(error) => {
                warn!(document = %document.abs_path.display(), %error,
                      "skipping unreadable document");
                continue;
            }
        };

        if query.matches_content(&content) {
            println!("{}", document.name());
        }
    }

    ExitCode::SUCCESS
}
