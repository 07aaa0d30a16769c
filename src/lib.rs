//! filterledger: web-filter record contract over a transactional world state.
//!
//! This crate is the public face of the workspace. It re-exports the record
//! model, the contract, the invocation layer and the world state capability.
//!
//! ```ignore
//! use filterledger::{MemoryWorldState, RecordContract};
//!
//! let store = MemoryWorldState::new();
//! let contract = RecordContract::default();
//!
//! let mut tx = store.begin();
//! contract.initialize(&mut tx)?;
//! tx.commit()?;
//! ```

#![warn(missing_docs)]

pub mod types;

pub use filterledger_contract::{ConfigError, ContractConfig, RecordContract, SeedTable};
pub use filterledger_core::{ContractError, ErrorKind, Record};
pub use filterledger_executor::{Command, Executor, Output};
pub use filterledger_storage::{
    CommitError, FaultPlan, FaultyWorldState, MemoryWorldState, RangeScan, StateIterator,
    StoreError, Transaction, WorldState,
};
