//! Secondary public types.
//!
//! Types a host integration or test harness needs less often than the ones
//! re-exported at the crate root.

// ============================================================================
// World state plumbing
// ============================================================================

pub use filterledger_storage::{ConflictType, KeyValue, ValidationResult, VersionedValue};

// ============================================================================
// Results and executor errors
// ============================================================================

pub use filterledger_core::Result as ContractResult;
pub use filterledger_executor::Error as ExecutorError;
pub use filterledger_executor::Result as ExecutorResult;
pub use filterledger_storage::StoreResult;
