//! Host transactions over [`MemoryWorldState`].
//!
//! A [`Transaction`] is the context handed to the contract. It records the
//! version of every committed key it reads, buffers writes and deletes, and
//! applies them in one batch on [`Transaction::commit`] after validating the
//! read set. Dropping or aborting a transaction discards the buffer.
//!
//! Reads see the transaction's own buffered writes. Range scans return
//! committed state merged with buffered writes, in ascending key order. Each
//! scan also records the committed keys it saw, so a key inserted into or
//! removed from that range by another transaction fails the commit.

use std::collections::{BTreeMap, HashMap, VecDeque};

use parking_lot::Mutex;
use tracing::debug;
use uuid::Uuid;

use crate::error::{CommitError, StoreError, StoreResult};
use crate::memory::MemoryWorldState;
use crate::state::{KeyValue, StateIterator, WorldState};
use crate::validation::{validate_range_reads, validate_read_set, RangeRead};

/// One host transaction.
pub struct Transaction<'a> {
    store: &'a MemoryWorldState,
    tx_id: Uuid,
    read_set: Mutex<HashMap<String, u64>>,
    range_reads: Mutex<Vec<RangeRead>>,
    writes: BTreeMap<String, Option<Vec<u8>>>,
}

impl<'a> Transaction<'a> {
    pub(crate) fn new(store: &'a MemoryWorldState) -> Self {
        let tx_id = Uuid::new_v4();
        debug!(target: "filterledger::storage", %tx_id, base_version = store.version(), "transaction started");
        Self {
            store,
            tx_id,
            read_set: Mutex::new(HashMap::new()),
            range_reads: Mutex::new(Vec::new()),
            writes: BTreeMap::new(),
        }
    }

    /// Transaction id.
    pub fn tx_id(&self) -> Uuid {
        self.tx_id
    }

    /// Number of buffered writes and deletes.
    pub fn write_count(&self) -> usize {
        self.writes.len()
    }

    /// Number of committed keys read so far.
    pub fn read_count(&self) -> usize {
        self.read_set.lock().len()
    }

    /// Number of range scans recorded for validation.
    pub fn range_read_count(&self) -> usize {
        self.range_reads.lock().len()
    }

    /// Validate the read set and scanned ranges, then apply buffered writes.
    ///
    /// Returns the version the writes were committed under. A read-only
    /// transaction commits without creating a new version.
    pub fn commit(self) -> Result<u64, CommitError> {
        let _guard = self.store.lock_commits();

        let read_set = self.read_set.into_inner();
        let mut result = validate_read_set(&read_set, self.store);
        let range_reads = self.range_reads.into_inner();
        result
            .conflicts
            .extend(validate_range_reads(&range_reads, self.store).conflicts);
        if !result.is_valid() {
            debug!(
                target: "filterledger::storage",
                tx_id = %self.tx_id,
                conflicts = result.conflict_count(),
                "transaction rejected at validation"
            );
            return Err(CommitError::Conflict {
                tx_id: self.tx_id.to_string(),
                result,
            });
        }

        if self.writes.is_empty() {
            return Ok(self.store.version());
        }

        let version = self.store.next_version();
        let writes = self.writes.len();
        self.store.apply_batch(self.writes, version);
        debug!(target: "filterledger::storage", tx_id = %self.tx_id, version, writes, "transaction committed");
        Ok(version)
    }

    /// Discard the transaction.
    pub fn abort(self) {
        debug!(target: "filterledger::storage", tx_id = %self.tx_id, discarded = self.writes.len(), "transaction aborted");
    }

    fn record_read(&self, key: &str, version: u64) {
        self.read_set
            .lock()
            .entry(key.to_string())
            .or_insert(version);
    }
}

fn in_range(key: &str, start: &str, end: &str) -> bool {
    (start.is_empty() || key >= start) && (end.is_empty() || key < end)
}

impl WorldState for Transaction<'_> {
    fn get_state(&self, key: &str) -> StoreResult<Option<Vec<u8>>> {
        if key.is_empty() {
            return Err(StoreError::EmptyKey);
        }
        if let Some(buffered) = self.writes.get(key) {
            return Ok(buffered.clone());
        }

        let committed = self.store.get(key);
        self.record_read(key, committed.as_ref().map(|v| v.version).unwrap_or(0));
        Ok(committed.map(|v| v.value))
    }

    fn put_state(&mut self, key: &str, value: Vec<u8>) -> StoreResult<()> {
        if key.is_empty() {
            return Err(StoreError::EmptyKey);
        }
        self.writes.insert(key.to_string(), Some(value));
        Ok(())
    }

    fn del_state(&mut self, key: &str) -> StoreResult<()> {
        if key.is_empty() {
            return Err(StoreError::EmptyKey);
        }
        self.writes.insert(key.to_string(), None);
        Ok(())
    }

    fn get_state_by_range<'s>(
        &'s self,
        start: &str,
        end: &str,
    ) -> StoreResult<Box<dyn StateIterator + 's>> {
        let mut merged = BTreeMap::new();
        let mut seen = Vec::new();
        for (kv, version) in self.store.range(start, end) {
            self.record_read(&kv.key, version);
            seen.push(kv.key.clone());
            merged.insert(kv.key, kv.value);
        }
        self.range_reads.lock().push(RangeRead {
            start: start.to_string(),
            end: end.to_string(),
            keys: seen,
        });
        for (key, buffered) in &self.writes {
            if !in_range(key, start, end) {
                continue;
            }
            match buffered {
                Some(value) => {
                    merged.insert(key.clone(), value.clone());
                }
                None => {
                    merged.remove(key);
                }
            }
        }

        Ok(Box::new(SnapshotIterator {
            entries: merged
                .into_iter()
                .map(|(key, value)| KeyValue { key, value })
                .collect(),
            closed: false,
        }))
    }
}

impl std::fmt::Debug for Transaction<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Transaction")
            .field("tx_id", &self.tx_id)
            .field("reads", &self.read_count())
            .field("range_reads", &self.range_read_count())
            .field("writes", &self.writes.len())
            .finish()
    }
}

/// Cursor over a materialized range.
struct SnapshotIterator {
    entries: VecDeque<KeyValue>,
    closed: bool,
}

impl StateIterator for SnapshotIterator {
    fn has_next(&self) -> bool {
        !self.closed && !self.entries.is_empty()
    }

    fn next(&mut self) -> StoreResult<KeyValue> {
        if self.closed {
            return Err(StoreError::Exhausted);
        }
        self.entries.pop_front().ok_or(StoreError::Exhausted)
    }

    fn close(&mut self) -> StoreResult<()> {
        self.closed = true;
        self.entries.clear();
        Ok(())
    }
}
