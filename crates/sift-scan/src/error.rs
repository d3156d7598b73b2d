//! Error types for the sift-scan crate.

use thiserror::Error;

/// Errors that can occur while scanning content.
#[derive(Debug, Error)]
pub enum ScanError {
    /// The query terms could not be compiled into a search pattern.
    #[error("invalid search pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    /// The overlap leaves no forward stride, so a scan would never
    /// terminate.
    #[error("overlap_size {overlap_size} must be smaller than chunk_size {chunk_size}")]
    InvalidStride {
        /// Configured window length.
        chunk_size: usize,
        /// Configured overlap.
        overlap_size: usize,
    },
}
