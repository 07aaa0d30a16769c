//! Executor error type.
//!
//! Unlike the contract's error, this type is `Clone + Serialize` so it can be
//! returned to a host as part of a response. Store fault sources are reduced
//! to their message.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result alias for executor calls.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned to the host.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum Error {
    /// No contract function has this name.
    #[error("unknown function: {name}")]
    UnknownFunction {
        /// Requested function
        name: String,
    },

    /// Wrong argument count or an unparseable argument.
    #[error("invalid argument: {reason}")]
    InvalidArgument {
        /// What was wrong
        reason: String,
    },

    /// The key cannot be used as a store key.
    #[error("invalid key: {reason}")]
    InvalidKey {
        /// Why the key was rejected
        reason: String,
    },

    /// The record does not exist.
    #[error("key not found: {key}")]
    KeyNotFound {
        /// Missing key
        key: String,
    },

    /// The record already exists.
    #[error("key already exists: {key}")]
    KeyExists {
        /// Existing key
        key: String,
    },

    /// A record could not be serialized.
    #[error("encoding error: {reason}")]
    Encoding {
        /// Serializer message
        reason: String,
    },

    /// Stored bytes are not a valid record.
    #[error("decoding error: {reason}")]
    Decoding {
        /// Deserializer message
        reason: String,
    },

    /// The world state could not be read.
    #[error("store read error: {reason}")]
    StoreRead {
        /// Store message
        reason: String,
    },

    /// The world state rejected a write.
    #[error("store write error: {reason}")]
    StoreWrite {
        /// Store message
        reason: String,
    },

    /// The executor produced something it cannot render.
    #[error("internal error: {reason}")]
    Internal {
        /// What went wrong
        reason: String,
    },
}
