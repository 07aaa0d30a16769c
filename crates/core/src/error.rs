//! Contract error type.
//!
//! Every failure of a contract operation is one of the kinds below. Errors are
//! surfaced to the host unchanged; the contract performs no recovery or retry.

use thiserror::Error;

/// Boxed error used to keep the original store fault as a source.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Result alias for contract operations.
pub type Result<T> = std::result::Result<T, ContractError>;

/// Errors returned by contract operations.
#[derive(Debug, Error)]
pub enum ContractError {
    /// A record could not be serialized.
    #[error("failed to encode record {key}: {source}")]
    Encoding {
        /// Key of the record being encoded
        key: String,
        /// Serializer failure
        #[source]
        source: serde_json::Error,
    },

    /// Stored bytes are malformed or do not match the record schema.
    #[error("failed to decode record {key}: {source}")]
    Decoding {
        /// Key the bytes were stored under
        key: String,
        /// Deserializer failure
        #[source]
        source: serde_json::Error,
    },

    /// The world state could not be read (get, range start, range advance).
    #[error("failed to read from world state: {message}")]
    StoreRead {
        /// Description of the failed read
        message: String,
        /// Underlying store fault
        #[source]
        source: Option<BoxError>,
    },

    /// The world state rejected a write or delete.
    #[error("failed to put to world state: {message}")]
    StoreWrite {
        /// Description of the failed write
        message: String,
        /// Underlying store fault
        #[source]
        source: Option<BoxError>,
    },

    /// The key is absent where existence is required.
    #[error("the record {key} does not exist")]
    NotFound {
        /// Missing key
        key: String,
    },

    /// The key is present where absence is required.
    #[error("the record {key} already exists")]
    DuplicateKey {
        /// Existing key
        key: String,
    },

    /// The key cannot be used as a store key.
    #[error("invalid key: {reason}")]
    InvalidKey {
        /// Why the key was rejected
        reason: String,
    },
}

/// Discriminant of a [`ContractError`], for matching without payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// See [`ContractError::Encoding`]
    Encoding,
    /// See [`ContractError::Decoding`]
    Decoding,
    /// See [`ContractError::StoreRead`]
    StoreRead,
    /// See [`ContractError::StoreWrite`]
    StoreWrite,
    /// See [`ContractError::NotFound`]
    NotFound,
    /// See [`ContractError::DuplicateKey`]
    DuplicateKey,
    /// See [`ContractError::InvalidKey`]
    InvalidKey,
}

impl ContractError {
    /// Wrap a store fault raised while reading.
    pub fn store_read<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        ContractError::StoreRead {
            message: err.to_string(),
            source: Some(Box::new(err)),
        }
    }

    /// Wrap a store fault raised while writing or deleting.
    pub fn store_write<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        ContractError::StoreWrite {
            message: err.to_string(),
            source: Some(Box::new(err)),
        }
    }

    /// Build a `NotFound` error for `key`.
    pub fn not_found(key: impl Into<String>) -> Self {
        ContractError::NotFound { key: key.into() }
    }

    /// Build a `DuplicateKey` error for `key`.
    pub fn duplicate_key(key: impl Into<String>) -> Self {
        ContractError::DuplicateKey { key: key.into() }
    }

    /// The kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ContractError::Encoding { .. } => ErrorKind::Encoding,
            ContractError::Decoding { .. } => ErrorKind::Decoding,
            ContractError::StoreRead { .. } => ErrorKind::StoreRead,
            ContractError::StoreWrite { .. } => ErrorKind::StoreWrite,
            ContractError::NotFound { .. } => ErrorKind::NotFound,
            ContractError::DuplicateKey { .. } => ErrorKind::DuplicateKey,
            ContractError::InvalidKey { .. } => ErrorKind::InvalidKey,
        }
    }
}
