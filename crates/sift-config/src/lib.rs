//! Configuration for the sift document analysis tool.
//!
//! Settings come from an optional `sift.toml` file in the working directory
//! (or an explicitly supplied path), with CLI flags layered on top by the
//! caller. A missing file simply means defaults. Validation is strict:
//! out-of-range scan settings are errors, not warnings, because the window
//! stride derived from them must stay positive for a scan to terminate.

mod error;
mod parse;
mod validate;

pub use error::ConfigError;
pub use parse::{Config, ScanSettings};
pub use validate::{MAX_CHUNK_SIZE, MIN_CHUNK_SIZE};

/// Name of the configuration file looked up in the working directory.
pub const CONFIG_FILENAME: &str = "sift.toml";
