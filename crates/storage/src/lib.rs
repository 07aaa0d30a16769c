//! World state capability for filterledger
//!
//! The record contract never owns a store. It is handed a [`WorldState`] per
//! invocation and issues get/put/delete/range calls against it. This crate
//! defines that capability and ships the pieces needed to drive it outside a
//! real ledger peer:
//!
//! - [`WorldState`] / [`StateIterator`]: the narrow host interface
//! - [`RangeScan`]: scoped cursor that is closed on every exit path
//! - [`MemoryWorldState`] / [`Transaction`]: versioned in-memory host with
//!   read-set validation at commit (first-committer-wins)
//! - [`FaultyWorldState`]: wrapper that injects store faults for tests

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod faults;
pub mod memory;
pub mod state;
pub mod transaction;
pub mod validation;

pub use error::{CommitError, StoreError, StoreResult};
pub use faults::{FaultPlan, FaultyWorldState};
pub use memory::{MemoryWorldState, VersionedValue};
pub use state::{KeyValue, RangeScan, StateIterator, WorldState};
pub use transaction::Transaction;
pub use validation::{ConflictType, RangeRead, ValidationResult};
