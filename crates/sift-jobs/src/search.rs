//! The search worker slot.

use std::{
    sync::{
        Arc,
        mpsc::{Receiver, channel},
    },
    thread::{self, JoinHandle},
};

use sift_document::{DiscoveredDocument, Loader};
use sift_scan::{DocumentMatches, SearchQuery, build_pattern, scan};
use tracing::warn;

use crate::{JobError, JobKind};

/// The completed results of one search run.
///
/// Only documents with at least one match appear in `results`; order
/// follows the order the documents were handed to the worker.
#[derive(Debug)]
pub struct SearchBatch {
    /// Per-document match lists.
    pub results: Vec<DocumentMatches>,
}

/// Owns the single background slot for search jobs.
///
/// Starting a search while one is running is rejected with
/// [`JobError::Busy`]; there is no cancellation primitive for this job
/// kind.
pub struct SearchWorker {
    /// Handle of the in-flight (or last finished) job.
    handle: Option<JoinHandle<()>>,
}

impl Default for SearchWorker {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchWorker {
    /// Creates an idle worker.
    pub fn new() -> Self {
        Self { handle: None }
    }

    /// Returns true while a search job is in flight.
    pub fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(|handle| !handle.is_finished())
    }

    /// Starts a search over `documents`.
    ///
    /// The query and window parameters are validated up front so a bad
    /// pattern is reported before any document is touched. On success the
    /// caller receives exactly one [`SearchBatch`] message, after which
    /// the channel disconnects.
    pub fn start(
        &mut self,
        documents: Vec<DiscoveredDocument>,
        loader: Arc<Loader>,
        query: SearchQuery,
        chunk_size: usize,
        overlap_size: usize,
    ) -> Result<Receiver<SearchBatch>, JobError> {
        if self.is_running() {
            return Err(JobError::Busy(JobKind::Search));
        }
        self.reap();

        // Fail fast on inputs the scanner would reject for every document.
        if overlap_size >= chunk_size {
            return Err(sift_scan::ScanError::InvalidStride {
                chunk_size,
                overlap_size,
            }
            .into());
        }
        if !query.is_empty() {
            build_pattern(query.terms())?;
        }

        let (sender, receiver) = channel();
        self.handle = Some(thread::spawn(move || {
            let mut results = Vec::new();

            for document in &documents {
                let content = match loader.load(&document.abs_path) {
                    Ok(content) => content,
                    Err(error) => {
                        warn!(document = %document.abs_path.display(), %error,
                              "skipping unreadable document");
                        continue;
                    }
                };

                match scan(&content, &query, chunk_size, overlap_size) {
                    Ok(matches) if !matches.is_empty() => results.push(DocumentMatches {
                        document: document.abs_path.clone(),
                        matches,
                    }),
                    Ok(_) => {}
                    Err(error) => {
                        warn!(document = %document.abs_path.display(), %error, "scan failed");
                    }
                }
            }

            if sender.send(SearchBatch { results }).is_err() {
                warn!("search receiver dropped before batch delivery");
            }
        }));

        Ok(receiver)
    }

    /// Waits for the in-flight job, if any, to finish.
    pub fn wait(&mut self) {
        if let Some(handle) = self.handle.take()
            && handle.join().is_err()
        {
            warn!("search worker thread panicked");
        }
    }

    /// Reaps a finished handle so the slot can be reused.
    fn reap(&mut self) {
        if self.handle.as_ref().is_some_and(JoinHandle::is_finished) {
            self.wait();
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{
        fs,
        path::Path,
        sync::{
            Mutex,
            mpsc::{Sender, channel},
        },
    };

    use sift_document::{LoadError, PageSource, ParagraphSource, discover_documents};
    use tempfile::TempDir;

    use super::*;

    fn start_defaults(
        worker: &mut SearchWorker,
        root: &Path,
        loader: Arc<Loader>,
        query: &str,
    ) -> Result<Receiver<SearchBatch>, JobError> {
        worker.start(
            discover_documents(root),
            loader,
            SearchQuery::parse(query),
            20,
            5,
        )
    }

    #[test]
    fn delivers_a_single_completed_batch() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("hit.txt"),
            "xxxx cat yyyyyyyyyyyyyyyyyyyyyyy",
        )
        .unwrap();
        fs::write(
            temp.path().join("miss.txt"),
            "nothing to see in this documentx",
        )
        .unwrap();

        let mut worker = SearchWorker::new();
        let receiver =
            start_defaults(&mut worker, temp.path(), Arc::new(Loader::new()), "cat").unwrap();

        let batches: Vec<SearchBatch> = receiver.iter().collect();
        worker.wait();

        assert_eq!(batches.len(), 1);
        let results = &batches[0].results;
        assert_eq!(results.len(), 1);
        assert!(results[0].document.ends_with("hit.txt"));
        assert_eq!(results[0].matches.len(), 1);
    }

    #[test]
    fn unreadable_documents_are_skipped_not_fatal() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("bad.txt"), [0xff, 0xfe]).unwrap();
        fs::write(
            temp.path().join("good.txt"),
            "xxxx cat yyyyyyyyyyyyyyyyyyyyyyy",
        )
        .unwrap();

        let mut worker = SearchWorker::new();
        let receiver =
            start_defaults(&mut worker, temp.path(), Arc::new(Loader::new()), "cat").unwrap();

        let batch = receiver.recv().unwrap();
        worker.wait();

        assert_eq!(batch.results.len(), 1);
        assert!(batch.results[0].document.ends_with("good.txt"));
    }

    #[test]
    fn empty_query_delivers_empty_batch() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("doc.txt"),
            "some content long enough to window",
        )
        .unwrap();

        let mut worker = SearchWorker::new();
        let receiver =
            start_defaults(&mut worker, temp.path(), Arc::new(Loader::new()), "  ").unwrap();

        let batch = receiver.recv().unwrap();
        worker.wait();
        assert!(batch.results.is_empty());
    }

    #[test]
    fn invalid_stride_is_rejected_before_starting() {
        let mut worker = SearchWorker::new();
        let result = worker.start(
            Vec::new(),
            Arc::new(Loader::new()),
            SearchQuery::parse("cat"),
            20,
            20,
        );
        assert!(matches!(result, Err(JobError::Scan(_))));
        assert!(!worker.is_running());
    }

    /// Paragraph source that signals entry and then blocks until released,
    /// pinning the worker in flight for deterministic busy tests.
    struct GatedParagraphs {
        /// Signals each `paragraphs` call.
        entered: Mutex<Sender<()>>,
        /// Released once per gated call.
        release: Mutex<std::sync::mpsc::Receiver<()>>,
    }

    impl ParagraphSource for GatedParagraphs {
        fn paragraphs(&self, _path: &Path) -> Result<Vec<String>, LoadError> {
            self.entered.lock().unwrap().send(()).ok();
            self.release.lock().unwrap().recv().ok();
            Ok(vec!["too short".to_string()])
        }
    }

    /// Page source that should never be called in these tests.
    struct NoPages;

    impl PageSource for NoPages {
        fn pages(&self, _path: &Path) -> Result<Vec<String>, LoadError> {
            Ok(Vec::new())
        }
    }

    #[test]
    fn second_start_while_running_is_busy() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("doc.docx"), "placeholder").unwrap();

        let (entered_tx, entered_rx) = channel();
        let (release_tx, release_rx) = channel();
        let loader = Arc::new(Loader::with_sources(
            Box::new(GatedParagraphs {
                entered: Mutex::new(entered_tx),
                release: Mutex::new(release_rx),
            }),
            Box::new(NoPages),
        ));

        let mut worker = SearchWorker::new();
        let receiver =
            start_defaults(&mut worker, temp.path(), Arc::clone(&loader), "cat").unwrap();

        // The worker is now blocked inside the paragraph source.
        entered_rx.recv().unwrap();
        assert!(worker.is_running());

        let second = start_defaults(&mut worker, temp.path(), loader, "cat");
        assert!(matches!(second, Err(JobError::Busy(JobKind::Search))));

        release_tx.send(()).unwrap();
        let batch = receiver.recv().unwrap();
        assert!(batch.results.is_empty());
        worker.wait();
        assert!(!worker.is_running());
    }
}
