//! Store error types.

use thiserror::Error;

use crate::validation::ValidationResult;

/// Result alias for world state calls.
pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Faults raised by a world state implementation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Hosts reject the empty string as a key.
    #[error("key must not be an empty string")]
    EmptyKey,

    /// A point read failed.
    #[error("get failed for key {key}: {reason}")]
    Get {
        /// Key being read
        key: String,
        /// Host-provided reason
        reason: String,
    },

    /// A write failed.
    #[error("put failed for key {key}: {reason}")]
    Put {
        /// Key being written
        key: String,
        /// Host-provided reason
        reason: String,
    },

    /// A delete failed.
    #[error("delete failed for key {key}: {reason}")]
    Delete {
        /// Key being deleted
        key: String,
        /// Host-provided reason
        reason: String,
    },

    /// A range scan could not be opened.
    #[error("range scan [{start:?}, {end:?}) could not be opened: {reason}")]
    RangeOpen {
        /// Inclusive start key, empty for unbounded
        start: String,
        /// Exclusive end key, empty for unbounded
        end: String,
        /// Host-provided reason
        reason: String,
    },

    /// A range scan could not advance.
    #[error("range scan failed to advance: {reason}")]
    RangeAdvance {
        /// Host-provided reason
        reason: String,
    },

    /// `next` was called on a closed or drained cursor.
    #[error("range scan has no more entries")]
    Exhausted,

    /// Releasing a cursor failed.
    #[error("range scan failed to close: {reason}")]
    RangeClose {
        /// Host-provided reason
        reason: String,
    },
}

/// Failure to commit a transaction.
#[derive(Debug, Clone, Error)]
pub enum CommitError {
    /// Validation found keys or scanned ranges changed since they were read.
    #[error("transaction {tx_id} aborted: {} conflicting read(s)", result.conflict_count())]
    Conflict {
        /// Transaction id
        tx_id: String,
        /// Conflicts found during validation
        result: ValidationResult,
    },
}
