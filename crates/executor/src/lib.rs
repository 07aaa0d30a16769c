//! Invocation layer for the filterledger contract
//!
//! Hosts call contracts by function name with string arguments. This crate
//! turns such an invocation into a typed [`Command`], runs it through the
//! [`RecordContract`](filterledger_contract::RecordContract), and hands back
//! an [`Output`] that can be rendered as a response payload.
//!
//! ```ignore
//! let executor = Executor::default();
//! let mut tx = store.begin();
//! let payload = executor.invoke(&mut tx, "ReadAsset", &["www.google.com"])?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod command;
pub mod convert;
pub mod error;
pub mod executor;
pub mod output;

pub use command::Command;
pub use error::{Error, Result};
pub use executor::Executor;
pub use output::Output;
