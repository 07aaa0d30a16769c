//! Contract configuration.
//!
//! Loaded from TOML. The only setting is the seed table; leaving out the
//! `[[seed]]` array keeps the built-in records.
//!
//! ```toml
//! [[seed]]
//! allowlist = "www.example.org"
//! blocklist = ""
//! attribute2 = 1
//! attribute1 = ""
//! webfilterlist = 100
//! ```

use std::path::{Path, PathBuf};

use filterledger_core::Record;
use serde::Deserialize;
use thiserror::Error;

use crate::seed::SeedTable;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read config {path}: {source}")]
    Io {
        /// Path that was read
        path: PathBuf,
        /// I/O failure
        #[source]
        source: std::io::Error,
    },

    /// The config is not valid TOML or does not match the schema.
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    /// A seed record cannot be written to the store.
    #[error("invalid seed record at index {index}: {reason}")]
    InvalidSeed {
        /// Position in the seed list
        index: usize,
        /// Why it was rejected
        reason: String,
    },
}

/// Contract configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ContractConfig {
    /// Seed records; `None` keeps the built-in table.
    #[serde(default, rename = "seed")]
    pub seeds: Option<Vec<Record>>,
}

impl ContractConfig {
    /// Parse a TOML document.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Read and parse a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// The validated seed table this config describes.
    pub fn seed_table(&self) -> Result<SeedTable, ConfigError> {
        match &self.seeds {
            Some(records) => SeedTable::new(records.clone()),
            None => Ok(SeedTable::default()),
        }
    }
}
