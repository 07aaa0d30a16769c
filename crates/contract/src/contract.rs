//! The record contract.
//!
//! Every operation receives the host's transaction context as `state` and
//! performs all of its reads and writes through it. The contract never
//! commits, aborts or retries: an error is returned as soon as it happens and
//! the host decides what to do with the transaction.
//!
//! ## Error Handling
//!
//! | Condition | Error |
//! |-----------|-------|
//! | Empty key | `InvalidKey` |
//! | Key absent where required | `NotFound` |
//! | Key present on create | `DuplicateKey` |
//! | Get, range open or range advance fails | `StoreRead` |
//! | Put or delete fails | `StoreWrite` |
//! | Stored bytes malformed | `Decoding` |
//! | Record cannot be serialized | `Encoding` |

use filterledger_core::{validate_key, ContractError, Record, Result};
use filterledger_storage::{RangeScan, WorldState};
use tracing::{debug, info, warn};

use crate::config::{ConfigError, ContractConfig};
use crate::seed::SeedTable;

/// Record lifecycle contract.
///
/// Holds only its seed table; clone is cheap enough and instances are
/// interchangeable.
#[derive(Debug, Clone, Default)]
pub struct RecordContract {
    seeds: SeedTable,
}

impl RecordContract {
    /// Create a contract with the given seed table.
    pub fn new(seeds: SeedTable) -> Self {
        Self { seeds }
    }

    /// Create a contract from configuration.
    pub fn from_config(config: &ContractConfig) -> std::result::Result<Self, ConfigError> {
        Ok(Self::new(config.seed_table()?))
    }

    /// The records written by [`initialize`](Self::initialize).
    pub fn seeds(&self) -> &SeedTable {
        &self.seeds
    }

    /// Write every seed record, without existence checks.
    ///
    /// Any failure aborts the operation; records already written are
    /// discarded along with the host transaction.
    pub fn initialize<S>(&self, state: &mut S) -> Result<()>
    where
        S: WorldState + ?Sized,
    {
        for record in self.seeds.records() {
            write_record(state, record.key(), record)?;
        }
        info!(target: "filterledger::contract", seeded = self.seeds.len(), "world state initialized");
        Ok(())
    }

    /// Create a new record at `key`.
    ///
    /// # Errors
    ///
    /// - `DuplicateKey` if `key` already exists
    pub fn create<S>(
        &self,
        state: &mut S,
        key: &str,
        blocklist: &str,
        attribute2: i64,
        attribute1: &str,
        webfilterlist: i64,
    ) -> Result<()>
    where
        S: WorldState + ?Sized,
    {
        if self.exists(&*state, key)? {
            return Err(ContractError::duplicate_key(key));
        }

        let record = Record::new(key, blocklist, attribute2, attribute1, webfilterlist);
        write_record(state, key, &record)?;
        info!(target: "filterledger::contract", key, "record created");
        Ok(())
    }

    /// Read the record at `key`.
    ///
    /// The decoded record is returned as stored, even if its `allowlist`
    /// differs from `key`.
    ///
    /// # Errors
    ///
    /// - `NotFound` if `key` does not exist
    /// - `Decoding` if the stored bytes are malformed
    pub fn read<S>(&self, state: &S, key: &str) -> Result<Record>
    where
        S: WorldState + ?Sized,
    {
        validate_key(key)?;
        let bytes = state
            .get_state(key)
            .map_err(|e| read_fault(key, e))?
            .ok_or_else(|| ContractError::not_found(key))?;
        Record::decode(key, &bytes)
    }

    /// Replace the record at `key` in full.
    ///
    /// The stored `allowlist` is re-derived from `key`; nothing of the
    /// previous value survives.
    ///
    /// # Errors
    ///
    /// - `NotFound` if `key` does not exist
    pub fn update<S>(
        &self,
        state: &mut S,
        key: &str,
        blocklist: &str,
        attribute2: i64,
        attribute1: &str,
        webfilterlist: i64,
    ) -> Result<()>
    where
        S: WorldState + ?Sized,
    {
        if !self.exists(&*state, key)? {
            return Err(ContractError::not_found(key));
        }

        let record = Record::new(key, blocklist, attribute2, attribute1, webfilterlist);
        write_record(state, key, &record)?;
        info!(target: "filterledger::contract", key, "record updated");
        Ok(())
    }

    /// Delete the record at `key`.
    ///
    /// Not idempotent: deleting an absent key fails.
    ///
    /// # Errors
    ///
    /// - `NotFound` if `key` does not exist
    pub fn delete<S>(&self, state: &mut S, key: &str) -> Result<()>
    where
        S: WorldState + ?Sized,
    {
        if !self.exists(&*state, key)? {
            return Err(ContractError::not_found(key));
        }

        state.del_state(key).map_err(|e| {
            warn!(target: "filterledger::contract", key, error = %e, "delete failed");
            ContractError::store_write(e)
        })?;
        info!(target: "filterledger::contract", key, "record deleted");
        Ok(())
    }

    /// Whether a record exists at `key`.
    ///
    /// Absence is `Ok(false)`; only store faults are errors.
    pub fn exists<S>(&self, state: &S, key: &str) -> Result<bool>
    where
        S: WorldState + ?Sized,
    {
        validate_key(key)?;
        let found = state
            .get_state(key)
            .map_err(|e| read_fault(key, e))?
            .is_some();
        debug!(target: "filterledger::contract", key, found, "existence check");
        Ok(found)
    }

    /// Replace `attribute1` of the record at `key` and return its previous
    /// value. No other field changes.
    ///
    /// The record is written back under `key`, not under its decoded
    /// `allowlist`.
    ///
    /// # Errors
    ///
    /// - `NotFound` if `key` does not exist
    /// - `Decoding` if the stored bytes are malformed
    pub fn transfer<S>(&self, state: &mut S, key: &str, new_attribute1: &str) -> Result<String>
    where
        S: WorldState + ?Sized,
    {
        let mut record = self.read(&*state, key)?;
        let previous = std::mem::replace(&mut record.attribute1, new_attribute1.to_string());
        write_record(state, key, &record)?;
        info!(target: "filterledger::contract", key, "record transferred");
        Ok(previous)
    }

    /// Every record in the world state, in store iteration order.
    ///
    /// The order is whatever the host's range scan yields; callers must not
    /// rely on it being sorted. A failure at any point discards the partial
    /// result, and the cursor is closed on every path.
    ///
    /// # Errors
    ///
    /// - `StoreRead` if the scan cannot be opened, advanced or closed
    /// - `Decoding` if any stored value is malformed
    pub fn get_all<S>(&self, state: &S) -> Result<Vec<Record>>
    where
        S: WorldState + ?Sized,
    {
        let mut scan = RangeScan::open(state, "", "").map_err(scan_fault)?;

        let mut records = Vec::new();
        while scan.has_next() {
            let kv = scan.next().map_err(scan_fault)?;
            records.push(Record::decode(&kv.key, &kv.value)?);
        }
        scan.close().map_err(scan_fault)?;

        debug!(target: "filterledger::contract", count = records.len(), "range scan complete");
        Ok(records)
    }
}

/// Encode `record` and write it under `key`.
fn write_record<S>(state: &mut S, key: &str, record: &Record) -> Result<()>
where
    S: WorldState + ?Sized,
{
    let bytes = record.encode()?;
    state.put_state(key, bytes).map_err(|e| {
        warn!(target: "filterledger::contract", key, error = %e, "write failed");
        ContractError::store_write(e)
    })
}

fn read_fault(key: &str, err: filterledger_storage::StoreError) -> ContractError {
    warn!(target: "filterledger::contract", key, error = %err, "read failed");
    ContractError::store_read(err)
}

fn scan_fault(err: filterledger_storage::StoreError) -> ContractError {
    warn!(target: "filterledger::contract", error = %err, "range scan failed");
    ContractError::store_read(err)
}
