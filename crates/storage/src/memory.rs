//! In-memory versioned world state
//!
//! Stands in for the ledger host in tests and embedded use. Committed state is
//! a `BTreeMap` from key to [`VersionedValue`]; every commit is stamped with a
//! new global version, and each key remembers the version of its last write.
//!
//! # Design
//!
//! - Reads and scans go through a `parking_lot::RwLock`
//! - Commits are serialized by a separate commit lock so validation and
//!   apply happen as one step
//! - Contract code never sees this type directly; it works against a
//!   [`Transaction`] opened with [`MemoryWorldState::begin`]

use std::collections::BTreeMap;
use std::ops::Bound;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Utc;
use parking_lot::{Mutex, MutexGuard, RwLock};

use crate::state::KeyValue;
use crate::transaction::Transaction;

/// A committed value with its write metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionedValue {
    /// Raw value bytes
    pub value: Vec<u8>,
    /// Version of the commit that wrote this value
    pub version: u64,
    /// Commit time, seconds since the Unix epoch
    pub timestamp: i64,
}

/// Committed key space of the in-memory host.
pub struct MemoryWorldState {
    data: RwLock<BTreeMap<String, VersionedValue>>,
    version: AtomicU64,
    commit_lock: Mutex<()>,
}

impl MemoryWorldState {
    /// Create an empty world state at version 0.
    pub fn new() -> Self {
        Self {
            data: RwLock::new(BTreeMap::new()),
            version: AtomicU64::new(0),
            commit_lock: Mutex::new(()),
        }
    }

    /// Open a transaction against the current committed state.
    pub fn begin(&self) -> Transaction<'_> {
        Transaction::new(self)
    }

    /// Current global version (the version of the last commit).
    #[inline]
    pub fn version(&self) -> u64 {
        self.version.load(Ordering::Acquire)
    }

    /// Number of committed keys.
    pub fn len(&self) -> usize {
        self.data.read().len()
    }

    /// Whether no keys are committed.
    pub fn is_empty(&self) -> bool {
        self.data.read().is_empty()
    }

    /// Committed value at `key`.
    pub fn get(&self, key: &str) -> Option<VersionedValue> {
        self.data.read().get(key).cloned()
    }

    /// Version of the last write to `key`, 0 if absent.
    pub fn version_of(&self, key: &str) -> u64 {
        self.data.read().get(key).map(|v| v.version).unwrap_or(0)
    }

    /// Committed entries in `[start, end)` in ascending key order, with the
    /// version of each.
    ///
    /// Empty bounds are unbounded.
    pub(crate) fn range(&self, start: &str, end: &str) -> Vec<(KeyValue, u64)> {
        let lower = if start.is_empty() {
            Bound::Unbounded
        } else {
            Bound::Included(start.to_string())
        };
        let upper = if end.is_empty() {
            Bound::Unbounded
        } else {
            Bound::Excluded(end.to_string())
        };
        if let (Bound::Included(s), Bound::Excluded(e)) = (&lower, &upper) {
            if s >= e {
                return Vec::new();
            }
        }

        self.data
            .read()
            .range((lower, upper))
            .map(|(k, v)| {
                (
                    KeyValue {
                        key: k.clone(),
                        value: v.value.clone(),
                    },
                    v.version,
                )
            })
            .collect()
    }

    /// Serialize commits. Held across validation and apply.
    pub(crate) fn lock_commits(&self) -> MutexGuard<'_, ()> {
        self.commit_lock.lock()
    }

    /// Increment version and return the new value.
    pub(crate) fn next_version(&self) -> u64 {
        self.version.fetch_add(1, Ordering::AcqRel) + 1
    }

    /// Apply a write batch under `version`.
    ///
    /// `None` values are deletes.
    pub(crate) fn apply_batch(&self, batch: BTreeMap<String, Option<Vec<u8>>>, version: u64) {
        let timestamp = Utc::now().timestamp();
        let mut data = self.data.write();
        for (key, value) in batch {
            match value {
                Some(value) => {
                    data.insert(
                        key,
                        VersionedValue {
                            value,
                            version,
                            timestamp,
                        },
                    );
                }
                None => {
                    data.remove(&key);
                }
            }
        }
    }
}

impl Default for MemoryWorldState {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for MemoryWorldState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryWorldState")
            .field("version", &self.version())
            .field("len", &self.len())
            .finish()
    }
}
