//! Error types for the sift-jobs crate.

use std::fmt;

use thiserror::Error;

/// The two background job kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobKind {
    /// Chunked regex search.
    Search,
    /// Entity extraction.
    Extraction,
}

impl fmt::Display for JobKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Search => f.write_str("search"),
            Self::Extraction => f.write_str("extraction"),
        }
    }
}

/// Errors that can occur when starting a background job.
#[derive(Debug, Error)]
pub enum JobError {
    /// A job of this kind is already in flight.
    #[error("a {0} job is already running")]
    Busy(JobKind),

    /// The scan parameters or query were rejected before any work began.
    #[error(transparent)]
    Scan(#[from] sift_scan::ScanError),
}
