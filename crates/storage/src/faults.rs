//! Fault injection.
//!
//! [`FaultyWorldState`] wraps any [`WorldState`] and fails the calls selected
//! by a [`FaultPlan`]. It also counts cursor closes, so callers can assert
//! that every range scan was released.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::error::{StoreError, StoreResult};
use crate::state::{KeyValue, StateIterator, WorldState};

const INJECTED: &str = "injected fault";

/// Which calls to fail.
#[derive(Debug, Clone, Default)]
pub struct FaultPlan {
    /// Fail every `get_state`
    pub fail_get: bool,
    /// Let this many `put_state` calls through, then fail the rest
    pub fail_put_after: Option<usize>,
    /// Fail every `del_state`
    pub fail_delete: bool,
    /// Fail `get_state_by_range` before a cursor is opened
    pub fail_range_open: bool,
    /// Fail the cursor's `next` once this many entries have been returned
    pub fail_range_next_at: Option<usize>,
    /// Fail the cursor's `close` (the close is still counted)
    pub fail_close: bool,
}

impl FaultPlan {
    /// A plan that injects nothing.
    pub fn none() -> Self {
        Self::default()
    }

    /// Fail every point read.
    pub fn fail_get(mut self) -> Self {
        self.fail_get = true;
        self
    }

    /// Fail every write after the first `n`.
    pub fn fail_put_after(mut self, n: usize) -> Self {
        self.fail_put_after = Some(n);
        self
    }

    /// Fail every delete.
    pub fn fail_delete(mut self) -> Self {
        self.fail_delete = true;
        self
    }

    /// Fail opening range scans.
    pub fn fail_range_open(mut self) -> Self {
        self.fail_range_open = true;
        self
    }

    /// Fail advancing a cursor after `n` entries.
    pub fn fail_range_next_at(mut self, n: usize) -> Self {
        self.fail_range_next_at = Some(n);
        self
    }

    /// Fail closing cursors.
    pub fn fail_close(mut self) -> Self {
        self.fail_close = true;
        self
    }
}

/// A [`WorldState`] that fails on demand.
#[derive(Debug)]
pub struct FaultyWorldState<S> {
    inner: S,
    plan: FaultPlan,
    puts: usize,
    opened: Arc<AtomicUsize>,
    closed: Arc<AtomicUsize>,
}

impl<S: WorldState> FaultyWorldState<S> {
    /// Wrap `inner` with `plan`.
    pub fn new(inner: S, plan: FaultPlan) -> Self {
        Self {
            inner,
            plan,
            puts: 0,
            opened: Arc::new(AtomicUsize::new(0)),
            closed: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Replace the fault plan.
    pub fn set_plan(&mut self, plan: FaultPlan) {
        self.plan = plan;
    }

    /// Number of cursors opened.
    pub fn opened_cursors(&self) -> usize {
        self.opened.load(Ordering::Acquire)
    }

    /// Number of cursor closes observed.
    pub fn closed_cursors(&self) -> usize {
        self.closed.load(Ordering::Acquire)
    }

    /// Wrapped state.
    pub fn inner(&self) -> &S {
        &self.inner
    }

    /// Unwrap.
    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: WorldState> WorldState for FaultyWorldState<S> {
    fn get_state(&self, key: &str) -> StoreResult<Option<Vec<u8>>> {
        if self.plan.fail_get {
            return Err(StoreError::Get {
                key: key.to_string(),
                reason: INJECTED.to_string(),
            });
        }
        self.inner.get_state(key)
    }

    fn put_state(&mut self, key: &str, value: Vec<u8>) -> StoreResult<()> {
        if let Some(limit) = self.plan.fail_put_after {
            if self.puts >= limit {
                return Err(StoreError::Put {
                    key: key.to_string(),
                    reason: INJECTED.to_string(),
                });
            }
        }
        self.puts += 1;
        self.inner.put_state(key, value)
    }

    fn del_state(&mut self, key: &str) -> StoreResult<()> {
        if self.plan.fail_delete {
            return Err(StoreError::Delete {
                key: key.to_string(),
                reason: INJECTED.to_string(),
            });
        }
        self.inner.del_state(key)
    }

    fn get_state_by_range<'a>(
        &'a self,
        start: &str,
        end: &str,
    ) -> StoreResult<Box<dyn StateIterator + 'a>> {
        if self.plan.fail_range_open {
            return Err(StoreError::RangeOpen {
                start: start.to_string(),
                end: end.to_string(),
                reason: INJECTED.to_string(),
            });
        }
        let inner = self.inner.get_state_by_range(start, end)?;
        self.opened.fetch_add(1, Ordering::AcqRel);
        Ok(Box::new(FaultyIterator {
            inner,
            returned: 0,
            fail_next_at: self.plan.fail_range_next_at,
            fail_close: self.plan.fail_close,
            closed: Arc::clone(&self.closed),
        }))
    }
}

struct FaultyIterator<'a> {
    inner: Box<dyn StateIterator + 'a>,
    returned: usize,
    fail_next_at: Option<usize>,
    fail_close: bool,
    closed: Arc<AtomicUsize>,
}

impl StateIterator for FaultyIterator<'_> {
    fn has_next(&self) -> bool {
        self.inner.has_next()
    }

    fn next(&mut self) -> StoreResult<KeyValue> {
        if self.fail_next_at == Some(self.returned) {
            return Err(StoreError::RangeAdvance {
                reason: INJECTED.to_string(),
            });
        }
        let kv = self.inner.next()?;
        self.returned += 1;
        Ok(kv)
    }

    fn close(&mut self) -> StoreResult<()> {
        self.closed.fetch_add(1, Ordering::AcqRel);
        self.inner.close()?;
        if self.fail_close {
            return Err(StoreError::RangeClose {
                reason: INJECTED.to_string(),
            });
        }
        Ok(())
    }
}
