//! Error conversion from the contract error type.

use filterledger_core::ContractError;

use crate::Error;

/// Convert a ContractError to an executor Error.
///
/// The error kind is preserved; store fault sources are reduced to their
/// message because `Error` must stay `Clone + Serialize`.
impl From<ContractError> for Error {
    fn from(err: ContractError) -> Self {
        match err {
            ContractError::NotFound { key } => Error::KeyNotFound { key },
            ContractError::DuplicateKey { key } => Error::KeyExists { key },
            ContractError::InvalidKey { reason } => Error::InvalidKey { reason },
            ContractError::Encoding { key, source } => Error::Encoding {
                reason: format!("{}: {}", key, source),
            },
            ContractError::Decoding { key, source } => Error::Decoding {
                reason: format!("{}: {}", key, source),
            },
            ContractError::StoreRead { message, .. } => Error::StoreRead { reason: message },
            ContractError::StoreWrite { message, .. } => Error::StoreWrite { reason: message },
        }
    }
}
