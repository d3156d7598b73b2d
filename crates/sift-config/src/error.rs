//! Error types for the sift-config crate.

use std::io;

use thiserror::Error;

/// Errors that can occur when loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read configuration file: {0}")]
    Io(#[from] io::Error),

    /// The configuration file is not valid TOML.
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// Chunk size is outside the supported range.
    #[error("chunk_size {value} is out of range ({min}-{max})")]
    ChunkSizeOutOfRange {
        /// The rejected value.
        value: usize,
        /// Smallest accepted chunk size.
        min: usize,
        /// Largest accepted chunk size.
        max: usize,
    },

    /// Overlap is too large for the configured chunk size.
    #[error("overlap_size {overlap_size} must be smaller than chunk_size {chunk_size}")]
    OverlapTooLarge {
        /// The rejected overlap.
        overlap_size: usize,
        /// The configured chunk size.
        chunk_size: usize,
    },

    /// The result limit must be at least one.
    #[error("limit must be at least 1")]
    ZeroLimit,
}
