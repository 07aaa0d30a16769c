//! Command outputs.

use filterledger_core::Record;
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Result of executing a [`Command`](crate::Command).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "output", content = "value", rename_all = "snake_case")]
pub enum Output {
    /// No value (initialize, create, update, delete)
    Unit,
    /// Existence check result
    Bool(bool),
    /// A single record
    Record(Record),
    /// Every record, in store iteration order
    Records(Vec<Record>),
    /// A string value (the previous `attribute1` on transfer)
    Value(String),
}

impl Output {
    /// Render the response payload returned to the host.
    ///
    /// - `Unit`: empty
    /// - `Bool`: `true` / `false`
    /// - `Record`: the record's canonical encoding
    /// - `Records`: JSON array of canonical records
    /// - `Value`: the raw string bytes
    pub fn to_payload(&self) -> Result<Vec<u8>> {
        match self {
            Output::Unit => Ok(Vec::new()),
            Output::Bool(b) => Ok(b.to_string().into_bytes()),
            Output::Record(record) => Ok(record.encode()?),
            Output::Records(records) => {
                serde_json::to_vec(records).map_err(|e| Error::Internal {
                    reason: format!("failed to render record list: {}", e),
                })
            }
            Output::Value(s) => Ok(s.clone().into_bytes()),
        }
    }
}
