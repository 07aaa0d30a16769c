//! Commit-time validation for optimistic concurrency
//!
//! Rules:
//! - First committer wins, decided on the READ set
//! - Blind writes (write without read) do not conflict
//! - A scanned range must hold the same committed keys at commit
//! - Write skew is allowed

use std::collections::HashMap;

use crate::memory::MemoryWorldState;

/// A conflict found during validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConflictType {
    /// Key was read at one version but the committed version has since moved.
    ///
    /// A key that was absent when read is recorded at version 0.
    ReadWriteConflict {
        /// The conflicting key
        key: String,
        /// Version recorded in the read set
        read_version: u64,
        /// Committed version at validation time
        current_version: u64,
    },

    /// The set of committed keys in a scanned range changed.
    PhantomRead {
        /// Range start (inclusive, empty for unbounded)
        start: String,
        /// Range end (exclusive, empty for unbounded)
        end: String,
    },
}

/// A range scan recorded for validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeRead {
    /// Range start (inclusive, empty for unbounded)
    pub start: String,
    /// Range end (exclusive, empty for unbounded)
    pub end: String,
    /// Committed keys seen by the scan, ascending
    pub keys: Vec<String>,
}

/// Result of transaction validation
///
/// A transaction commits only if `is_valid()` returns true.
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    /// All conflicts detected during validation
    pub conflicts: Vec<ConflictType>,
}

impl ValidationResult {
    /// A result with no conflicts.
    pub fn ok() -> Self {
        ValidationResult {
            conflicts: Vec::new(),
        }
    }

    /// Whether validation passed.
    pub fn is_valid(&self) -> bool {
        self.conflicts.is_empty()
    }

    /// Number of conflicts.
    pub fn conflict_count(&self) -> usize {
        self.conflicts.len()
    }
}

/// Validate a read set against committed state.
///
/// Every key whose committed version differs from the version read is
/// reported as a [`ConflictType::ReadWriteConflict`].
pub fn validate_read_set(
    read_set: &HashMap<String, u64>,
    store: &MemoryWorldState,
) -> ValidationResult {
    let mut result = ValidationResult::ok();

    for (key, read_version) in read_set {
        let current_version = store.version_of(key);
        if current_version != *read_version {
            result.conflicts.push(ConflictType::ReadWriteConflict {
                key: key.clone(),
                read_version: *read_version,
                current_version,
            });
        }
    }

    result
}

/// Validate recorded range scans against committed state.
///
/// A range whose committed key set differs from the one scanned is reported
/// as a [`ConflictType::PhantomRead`]. Value changes to keys that were seen
/// are left to [`validate_read_set`].
pub fn validate_range_reads(ranges: &[RangeRead], store: &MemoryWorldState) -> ValidationResult {
    let mut result = ValidationResult::ok();

    for range in ranges {
        let current = store.range(&range.start, &range.end);
        let unchanged = current.len() == range.keys.len()
            && current
                .iter()
                .zip(&range.keys)
                .all(|((kv, _), seen)| kv.key == *seen);
        if !unchanged {
            result.conflicts.push(ConflictType::PhantomRead {
                start: range.start.clone(),
                end: range.end.clone(),
            });
        }
    }

    result
}
