//! Core types for filterledger
//!
//! This crate defines the pieces every other layer agrees on:
//! - [`Record`]: the single entity kept in world state
//! - the canonical byte encoding of a record ([`Record::encode`] / [`Record::decode`])
//! - key validation ([`validate_key`])
//! - [`ContractError`]: the typed failures surfaced to the host
//!
//! Nothing here touches a store; storage is an injected capability
//! (see `filterledger-storage`).

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod key;
pub mod record;

pub use error::{ContractError, ErrorKind, Result};
pub use key::validate_key;
pub use record::Record;
