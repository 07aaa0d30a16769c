//! Seed records written by `initialize`.

use std::collections::HashSet;

use filterledger_core::Record;

use crate::config::ConfigError;

/// Records written unconditionally by
/// [`RecordContract::initialize`](crate::RecordContract::initialize).
///
/// Keys are guaranteed non-empty and unique.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedTable {
    records: Vec<Record>,
}

impl SeedTable {
    /// Build a seed table, rejecting empty and duplicate keys.
    pub fn new(records: Vec<Record>) -> Result<Self, ConfigError> {
        {
            let mut seen = HashSet::with_capacity(records.len());
            for (index, record) in records.iter().enumerate() {
                if record.key().is_empty() {
                    return Err(ConfigError::InvalidSeed {
                        index,
                        reason: "allowlist must not be empty".to_string(),
                    });
                }
                if !seen.insert(record.key()) {
                    return Err(ConfigError::InvalidSeed {
                        index,
                        reason: format!("duplicate allowlist {}", record.key()),
                    });
                }
            }
        }
        Ok(Self { records })
    }

    /// Seed records in write order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Number of seed records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Default for SeedTable {
    /// The six well-known records.
    ///
    /// Blocklist-only rows are keyed by the blocked host, since a record's
    /// key is its `allowlist` value and keys must be non-empty.
    fn default() -> Self {
        Self {
            records: vec![
                Record::new("www.google.com", "", 5, "", 300),
                Record::new("www.xxx.com", "www.xxx.com", 5, "", 400),
                Record::new("www.bbc.co.uk", "", 10, "", 500),
                Record::new("https://scholar.google.com/", "", 10, "", 600),
                Record::new("www.instagram.com", "www.instagram.com", 15, "", 700),
                Record::new("www.napier.ac.uk", "", 15, "", 800),
            ],
        }
    }
}
