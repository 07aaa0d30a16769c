//! The record entity and its canonical encoding.
//!
//! # Encoding
//!
//! A record is stored as compact JSON with its fields in declaration order:
//!
//! ```text
//! {"allowlist":"www.test.com","blocklist":"","attribute2":5,"attribute1":"","webfilterlist":300}
//! ```
//!
//! Field order is part of the interoperability contract: independent
//! implementations must produce the same bytes for the same record, so the
//! struct fields below must never be reordered. Integers are written as plain
//! base-10 JSON numbers.
//!
//! Decoding is strict: all five fields are required, unknown fields are
//! rejected, and integers must fit in an `i64`.

use serde::{Deserialize, Serialize};

use crate::error::{ContractError, Result};

/// A web-filter record.
///
/// The `allowlist` value doubles as the store key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Record {
    /// Primary key; the store key equals this value verbatim
    pub allowlist: String,
    /// Opaque payload
    pub blocklist: String,
    /// Opaque payload
    pub attribute2: i64,
    /// Mutable payload, rewritten by transfer
    pub attribute1: String,
    /// Opaque payload
    pub webfilterlist: i64,
}

impl Record {
    /// Build a record from its five fields, in canonical order.
    pub fn new(
        allowlist: impl Into<String>,
        blocklist: impl Into<String>,
        attribute2: i64,
        attribute1: impl Into<String>,
        webfilterlist: i64,
    ) -> Self {
        Self {
            allowlist: allowlist.into(),
            blocklist: blocklist.into(),
            attribute2,
            attribute1: attribute1.into(),
            webfilterlist,
        }
    }

    /// The store key of this record.
    #[inline]
    pub fn key(&self) -> &str {
        &self.allowlist
    }

    /// Encode to the canonical byte form.
    pub fn encode(&self) -> Result<Vec<u8>> {
        serde_json::to_vec(self).map_err(|source| ContractError::Encoding {
            key: self.allowlist.clone(),
            source,
        })
    }

    /// Decode the canonical byte form read from `key`.
    ///
    /// `key` is used only for error reporting.
    pub fn decode(key: &str, bytes: &[u8]) -> Result<Self> {
        serde_json::from_slice(bytes).map_err(|source| ContractError::Decoding {
            key: key.to_string(),
            source,
        })
    }
}
