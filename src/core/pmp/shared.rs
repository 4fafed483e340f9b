//! Shared, replaceable PMP table handle.
//!
//! Resolutions take a snapshot of the current table and run against it
//! without holding any lock. Reloading swaps the whole table at once, so a
//! resolution sees either the old table or the new one, never a mix.

use std::sync::{Arc, PoisonError, RwLock};

use super::table::PmpTable;

/// Cloneable handle to the active PMP table.
#[derive(Clone, Debug, Default)]
pub struct SharedTable {
    current: Arc<RwLock<Arc<PmpTable>>>,
}

impl SharedTable {
    pub fn new(table: PmpTable) -> Self {
        Self {
            current: Arc::new(RwLock::new(Arc::new(table))),
        }
    }

    /// Returns the table that is active right now.
    pub fn snapshot(&self) -> Arc<PmpTable> {
        // The guarded value is a single pointer, so a poisoned lock still holds a whole table.
        let guard = self.current.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&*guard)
    }

    /// Installs `table` and returns the one it replaced.
    pub fn replace(&self, table: PmpTable) -> Arc<PmpTable> {
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        std::mem::replace(&mut *guard, Arc::new(table))
    }
}
