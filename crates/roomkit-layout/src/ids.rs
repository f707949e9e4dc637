//! Monotonic id allocation per entity collection.

use std::collections::HashSet;

use roomkit_core::LayoutError;
use serde::{Deserialize, Serialize};

/// Hands out integer ids that are never reissued.
///
/// An allocation is always greater than both every id handed out before and
/// the largest id currently live in the collection, so restoring an older
/// snapshot through undo cannot lead to a collision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdAllocator {
    next: u64,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self { next: 1 }
    }

    /// Allocates the next id given the largest live id, if any.
    pub fn allocate(&mut self, max_live: Option<u64>) -> u64 {
        let id = self.floor(max_live).saturating_add(1);
        self.next = id.saturating_add(1);
        id
    }

    /// Largest id that fresh allocations must stay above.
    pub fn floor(&self, max_live: Option<u64>) -> u64 {
        self.next.saturating_sub(1).max(max_live.unwrap_or(0))
    }

    /// Records that `id` is in use.
    pub fn observe(&mut self, id: u64) {
        self.next = self.next.max(id.saturating_add(1));
    }

    /// The id the next allocation returns when nothing larger is live.
    pub fn peek(&self) -> u64 {
        self.next
    }
}

/// Rejects repeated ids and ids that leave no room for a later allocation.
pub(crate) fn check_ids(entity: &str, ids: impl IntoIterator<Item = u64>) -> Result<(), LayoutError> {
    let mut seen = HashSet::new();
    for id in ids {
        let reason = if id == u64::MAX {
            "no id can follow it"
        } else if !seen.insert(id) {
            "duplicate"
        } else {
            continue;
        };
        return Err(LayoutError::InvalidId {
            entity: entity.to_string(),
            id,
            reason: reason.to_string(),
        });
    }
    Ok(())
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new()
    }
}
