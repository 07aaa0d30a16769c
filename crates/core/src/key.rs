//! Key validation.

use crate::error::{ContractError, Result};

/// Validate a record key before it reaches the store.
///
/// The store key space is flat and a record's key is its `allowlist` value
/// verbatim, so the only rule is that the key is non-empty.
pub fn validate_key(key: &str) -> Result<()> {
    if key.is_empty() {
        return Err(ContractError::InvalidKey {
            reason: "key must not be empty".to_string(),
        });
    }
    Ok(())
}
