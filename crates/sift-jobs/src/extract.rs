//! The extraction worker slot.

use std::{
    collections::{BTreeMap, BTreeSet},
    path::PathBuf,
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
        mpsc::{Receiver, channel},
    },
    thread::{self, JoinHandle},
};

use sift_document::{DiscoveredDocument, Loader};
use sift_entity::{EntityCategory, EntityTagger, extract_incremental};
use tracing::{debug, warn};

use crate::JobKind;

/// Entities extracted from one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityReport {
    /// Path of the tagged document.
    pub document: PathBuf,
    /// Entities not previously seen for this document in this job.
    pub entities: BTreeSet<String>,
}

/// Owns the single background slot for extraction jobs.
///
/// Unlike search, extraction supports hard cancellation: the flag is
/// checked between documents, and starting a new job cancels and joins
/// the previous one. Work cut off by cancellation is not reported.
pub struct ExtractWorker {
    /// Handle of the in-flight (or last finished) job.
    handle: Option<JoinHandle<()>>,
    /// Cancellation flag shared with the in-flight job.
    cancel: Arc<AtomicBool>,
}

impl Default for ExtractWorker {
    fn default() -> Self {
        Self::new()
    }
}

impl ExtractWorker {
    /// Creates an idle worker.
    pub fn new() -> Self {
        Self {
            handle: None,
            cancel: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Returns true while an extraction job is in flight.
    pub fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(|handle| !handle.is_finished())
    }

    /// Requests cancellation of the in-flight job without waiting.
    pub fn cancel(&self) {
        self.cancel.store(true, Ordering::Relaxed);
    }

    /// Cancels the in-flight job and waits for it to exit.
    pub fn cancel_and_wait(&mut self) {
        self.cancel();
        if let Some(handle) = self.handle.take()
            && handle.join().is_err()
        {
            warn!("extraction worker thread panicked");
        }
    }

    /// Starts extraction over `documents`, cancelling any prior job first.
    ///
    /// One [`EntityReport`] is delivered per document as it finishes; the
    /// channel disconnects when the job ends. The tagger must already be
    /// loaded: an unavailable model is surfaced when constructing it,
    /// before any job starts.
    pub fn start(
        &mut self,
        documents: Vec<DiscoveredDocument>,
        loader: Arc<Loader>,
        tagger: Arc<dyn EntityTagger>,
        category: EntityCategory,
    ) -> Receiver<EntityReport> {
        self.cancel_and_wait();

        let cancel = Arc::new(AtomicBool::new(false));
        self.cancel = Arc::clone(&cancel);

        let (sender, receiver) = channel();
        self.handle = Some(thread::spawn(move || {
            let mut seen: BTreeMap<PathBuf, BTreeSet<String>> = BTreeMap::new();

            for document in &documents {
                if cancel.load(Ordering::Relaxed) {
                    debug!(job = %JobKind::Extraction, "job cancelled");
                    return;
                }

                let content = match loader.load(&document.abs_path) {
                    Ok(content) => content,
                    Err(error) => {
                        warn!(document = %document.abs_path.display(), %error,
                              "skipping unreadable document");
                        continue;
                    }
                };

                let seen_for_document = seen.entry(document.abs_path.clone()).or_default();
                match extract_incremental(tagger.as_ref(), &content, category, seen_for_document) {
                    Ok(entities) => {
                        let report = EntityReport {
                            document: document.abs_path.clone(),
                            entities,
                        };
                        if sender.send(report).is_err() {
                            debug!("extraction receiver dropped, stopping job");
                            return;
                        }
                    }
                    Err(error) => {
                        warn!(document = %document.abs_path.display(), %error,
                              "skipping document that failed to tag");
                    }
                }
            }
        }));

        receiver
    }
}
