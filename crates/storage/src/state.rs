//! The world state capability.
//!
//! [`WorldState`] is the only interface the contract consumes. It mirrors what
//! a ledger host exposes to chaincode: point reads that return `None` for
//! absent keys, writes, deletes, and range scans handing back a cursor.
//!
//! # Cursor lifetime
//!
//! A cursor returned by [`WorldState::get_state_by_range`] is a host resource
//! and must be closed. Callers should go through [`RangeScan`], which closes
//! the cursor exactly once: explicitly via [`RangeScan::close`], or on drop
//! when an error path leaves early.

use crate::error::StoreResult;

/// One entry produced by a range scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyValue {
    /// Store key
    pub key: String,
    /// Raw value bytes
    pub value: Vec<u8>,
}

/// Cursor over the results of a range scan.
///
/// Iteration order is defined by the store.
pub trait StateIterator {
    /// Whether another entry is available.
    fn has_next(&self) -> bool;

    /// Advance and return the next entry.
    fn next(&mut self) -> StoreResult<KeyValue>;

    /// Release the cursor. Further calls to `next` fail.
    fn close(&mut self) -> StoreResult<()>;
}

/// Key-value world state, scoped to one host transaction.
///
/// All calls made through one `WorldState` belong to the same transaction;
/// the host decides whether they are applied.
pub trait WorldState {
    /// Read the value stored at `key`, `None` if absent.
    fn get_state(&self, key: &str) -> StoreResult<Option<Vec<u8>>>;

    /// Write `value` at `key`, replacing any previous value.
    fn put_state(&mut self, key: &str, value: Vec<u8>) -> StoreResult<()>;

    /// Remove `key`.
    fn del_state(&mut self, key: &str) -> StoreResult<()>;

    /// Open a cursor over `[start, end)`.
    ///
    /// An empty `start` or `end` leaves that side unbounded, so `("", "")`
    /// covers the whole key space.
    fn get_state_by_range<'a>(
        &'a self,
        start: &str,
        end: &str,
    ) -> StoreResult<Box<dyn StateIterator + 'a>>;
}

/// Scoped range scan that always releases its cursor.
pub struct RangeScan<'a> {
    iter: Box<dyn StateIterator + 'a>,
    closed: bool,
}

impl<'a> RangeScan<'a> {
    /// Open a scan over `[start, end)` on `state`.
    pub fn open<S>(state: &'a S, start: &str, end: &str) -> StoreResult<Self>
    where
        S: WorldState + ?Sized,
    {
        let iter = state.get_state_by_range(start, end)?;
        Ok(Self {
            iter,
            closed: false,
        })
    }

    /// Whether another entry is available.
    pub fn has_next(&self) -> bool {
        !self.closed && self.iter.has_next()
    }

    /// Advance and return the next entry.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> StoreResult<KeyValue> {
        self.iter.next()
    }

    /// Close the cursor and report whether the host released it cleanly.
    pub fn close(mut self) -> StoreResult<()> {
        self.closed = true;
        self.iter.close()
    }
}

impl Drop for RangeScan<'_> {
    fn drop(&mut self) {
        if self.closed {
            return;
        }
        self.closed = true;
        if let Err(e) = self.iter.close() {
            tracing::warn!(target: "filterledger::storage", error = %e, "range scan close failed during unwind");
        }
    }
}

impl std::fmt::Debug for RangeScan<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RangeScan")
            .field("closed", &self.closed)
            .finish()
    }
}
