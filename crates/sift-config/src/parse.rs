//! Configuration file parsing.
//!
//! Parses `sift.toml` into a [`Config`], filling defaults for anything the
//! file leaves out. All fields in the raw schema are optional so a file can
//! set just the values it cares about.

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::Deserialize;

use crate::{CONFIG_FILENAME, ConfigError};

/// Default chunk size in characters.
const DEFAULT_CHUNK_SIZE: usize = 200;
/// Default window overlap in characters.
const DEFAULT_OVERLAP_SIZE: usize = 20;
/// Default cap on ranked results.
const DEFAULT_LIMIT: usize = 5000;

/// Raw configuration as parsed directly from a TOML file.
///
/// Mirrors the TOML schema exactly; every field is optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct RawConfig {
    /// Directory scanned for documents.
    root: Option<PathBuf>,
    /// Scan settings section.
    scan: Option<RawScanSettings>,
}

/// Raw `[scan]` section from TOML.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct RawScanSettings {
    /// Window length in characters.
    chunk_size: Option<usize>,
    /// Shared region between consecutive windows, in characters.
    overlap_size: Option<usize>,
    /// Maximum number of ranked results returned.
    limit: Option<usize>,
}

/// Settings that drive the chunked scanner and ranker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanSettings {
    /// Window length in characters.
    pub chunk_size: usize,
    /// Shared region between consecutive windows, in characters.
    pub overlap_size: usize,
    /// Maximum number of ranked results returned.
    pub limit: usize,
}

impl Default for ScanSettings {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            overlap_size: DEFAULT_OVERLAP_SIZE,
            limit: DEFAULT_LIMIT,
        }
    }
}

/// Resolved configuration with defaults applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory scanned for documents.
    pub root: PathBuf,
    /// Scanner and ranker settings.
    pub scan: ScanSettings,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            scan: ScanSettings::default(),
        }
    }
}

impl Config {
    /// Loads configuration from an explicit file path.
    ///
    /// The file must exist; a parse failure or failed validation is an
    /// error.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path)?;
        Self::from_toml(&raw)
    }

    /// Loads `sift.toml` from `dir` if present, otherwise returns defaults.
    pub fn discover(dir: &Path) -> Result<Self, ConfigError> {
        let path = dir.join(CONFIG_FILENAME);
        if path.exists() {
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parses configuration from a TOML string and validates it.
    pub fn from_toml(raw: &str) -> Result<Self, ConfigError> {
        let parsed: RawConfig = toml::from_str(raw)?;
        let scan_raw = parsed.scan.unwrap_or_default();

        let config = Self {
            root: parsed.root.unwrap_or_else(|| PathBuf::from(".")),
            scan: ScanSettings {
                chunk_size: scan_raw.chunk_size.unwrap_or(DEFAULT_CHUNK_SIZE),
                overlap_size: scan_raw.overlap_size.unwrap_or(DEFAULT_OVERLAP_SIZE),
                limit: scan_raw.limit.unwrap_or(DEFAULT_LIMIT),
            },
        };

        config.scan.validate()?;
        Ok(config)
    }
}
