//! Implementation of `sift entities`.

use std::{process::ExitCode, sync::Arc};

use sift_document::Loader;
use sift_entity::LexiconTagger;
use sift_jobs::{EntityReport, ExtractWorker};

use super::shared;
use crate::cli::{args::EntitiesCommand, output};

/// Runs entity extraction through the extraction worker and renders one
/// row per document.
pub fn run(cmd: &EntitiesCommand) -> ExitCode {
    let config = match shared::resolve_config(&cmd.root) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    // An unavailable lexicon is fatal to the extraction feature: report
    // it before any document is touched, and never retry.
    let tagger = match LexiconTagger::from_file(&cmd.lexicon) {
        Ok(tagger) => Arc::new(tagger),
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let documents = match shared::documents(&config.root) {
        Ok(documents) => documents,
        Err(code) => return code,
    };

    let mut worker = ExtractWorker::new();
    let receiver = worker.start(documents, Arc::new(Loader::new()), tagger, cmd.category);

    // One report arrives per document as it finishes; the channel
    // disconnects when the job is done.
    let reports: Vec<EntityReport> = receiver.iter().collect();
    worker.cancel_and_wait();

    output::entity_results(&reports, cmd.category, &cmd.output)
}
