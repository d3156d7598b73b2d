//! Implementation of `sift search`.

use std::{process::ExitCode, sync::Arc};

use sift_document::Loader;
use sift_jobs::SearchWorker;
use sift_scan::{SearchQuery, rank};

use super::shared;
use crate::cli::{args::SearchCommand, output};

/// Runs the scan/rank pipeline through the search worker and renders the
/// ranked matches.
pub fn run(cmd: &SearchCommand) -> ExitCode {
    let mut config = match shared::resolve_config(&cmd.root) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    // Flag overrides are re-validated as a unit.
    if let Some(chunk_size) = cmd.chunk_size {
        config.scan.chunk_size = chunk_size;
    }
    if let Some(overlap_size) = cmd.overlap_size {
        config.scan.overlap_size = overlap_size;
    }
    if let Some(limit) = cmd.limit {
        config.scan.limit = limit;
    }
    if let Err(e) = config.scan.validate() {
        eprintln!("error: {e}");
        return ExitCode::FAILURE;
    }

    let query = SearchQuery::parse(&cmd.query);
    if query.is_empty() {
        eprintln!("error: search query is empty");
        return ExitCode::FAILURE;
    }

    let documents = match shared::documents(&config.root) {
        Ok(documents) => documents,
        Err(code) => return code,
    };

    let mut worker = SearchWorker::new();
    let receiver = match worker.start(
        documents,
        Arc::new(Loader::new()),
        query.clone(),
        config.scan.chunk_size,
        config.scan.overlap_size,
    ) {
        Ok(receiver) => receiver,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    // The worker delivers exactly one batch when the run completes.
    let batch = match receiver.recv() {
        Ok(batch) => batch,
        Err(_) => {
            eprintln!("error: search worker exited unexpectedly");
            worker.wait();
            return ExitCode::FAILURE;
        }
    };
    worker.wait();

    let ranked = rank(&batch.results, &query, config.scan.limit);
    output::search_results(&ranked, query.raw(), &cmd.output)
}
