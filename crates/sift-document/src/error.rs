//! Error types for the sift-document crate.

use std::{
    fmt, io,
    path::{Path, PathBuf},
};

use thiserror::Error;

/// Errors that can occur while loading a document's text.
///
/// Load failures are per-document: batch drivers log them and move on to
/// the next document rather than aborting the run.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// Path of the unreadable file.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// A plain-text file was not valid UTF-8.
    #[error("{path} is not valid UTF-8")]
    InvalidUtf8 {
        /// Path of the offending file.
        path: PathBuf,
    },

    /// A docx/pdf container was present but its text could not be extracted.
    #[error("failed to extract text from {path}: {message}")]
    Extract {
        /// Path of the corrupt document.
        path: PathBuf,
        /// Extractor error message.
        message: String,
    },

    /// The file extension maps to no supported format.
    #[error("unsupported document format: {path}")]
    UnsupportedFormat {
        /// Path with the unrecognized extension.
        path: PathBuf,
    },
}

impl LoadError {
    /// Creates an `Io` error for `path`.
    pub(crate) fn io(path: &Path, source: io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Creates an `Extract` error for `path` from any displayable cause.
    pub(crate) fn extract(path: &Path, cause: impl fmt::Display) -> Self {
        Self::Extract {
            path: path.to_path_buf(),
            message: cause.to_string(),
        }
    }
}
