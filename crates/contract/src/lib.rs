//! Record lifecycle contract for filterledger
//!
//! [`RecordContract`] implements the create/read/update/delete/transfer
//! operations over a [`WorldState`](filterledger_storage::WorldState) handed
//! in by the host for each invocation. The contract holds no store and no
//! mutable state; its only configuration is the [`SeedTable`] written by
//! [`RecordContract::initialize`].
//!
//! # Example
//!
//! ```ignore
//! let store = MemoryWorldState::new();
//! let contract = RecordContract::default();
//!
//! let mut tx = store.begin();
//! contract.create(&mut tx, "www.test.com", "", 5, "", 300)?;
//! tx.commit()?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod contract;
pub mod seed;

pub use config::{ConfigError, ContractConfig};
pub use contract::RecordContract;
pub use seed::SeedTable;
