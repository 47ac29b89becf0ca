//! # Recently Viewed Collection
//!
//! The bounded, de-duplicated, most-recent-first list of viewed products.
//!
//! ## Insertion Policy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                     record(entry) walkthrough                       │
//! │                                                                     │
//! │  before:   [ P3, P7, P1, ... ]                                      │
//! │                                                                     │
//! │  1. remove same id        [ P3, P1, ... ]        (re-view of P7)    │
//! │  2. insert at front       [ P7, P3, P1, ... ]                       │
//! │  3. truncate to bound     [ P7, P3, P1, ... P? ] (≤ 10 entries)     │
//! │                                                                     │
//! │  Newest-first order falls out of the policy; the list is never      │
//! │  explicitly sorted.                                                 │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};

use crate::types::{ProductId, RecentlyViewedEntry};
use crate::MAX_RECENTLY_VIEWED;

/// The recently-viewed collection.
///
/// ## Invariants
/// - Entries are unique by `id`
/// - Ordered most-recently-viewed first
/// - Length never exceeds [`MAX_RECENTLY_VIEWED`]
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecentlyViewedList {
    entries: Vec<RecentlyViewedEntry>,
}

impl RecentlyViewedList {
    /// Creates an empty collection.
    pub fn new() -> Self {
        RecentlyViewedList {
            entries: Vec::new(),
        }
    }

    /// Creates a collection from already-ordered entries.
    ///
    /// Used when reloading from durable storage. The stored array is
    /// truncated to the bound on the way in, so a hand-edited or
    /// older-format value cannot overfill the list.
    pub fn from_entries(mut entries: Vec<RecentlyViewedEntry>) -> Self {
        entries.truncate(MAX_RECENTLY_VIEWED);
        RecentlyViewedList { entries }
    }

    /// Read-only view of all entries, newest first.
    pub fn entries(&self) -> &[RecentlyViewedEntry] {
        &self.entries
    }

    /// Membership test by product id.
    pub fn is_recently_viewed(&self, id: &ProductId) -> bool {
        self.entries.iter().any(|entry| entry.id == *id)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Checks whether the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Records a view.
    ///
    /// ## Behavior
    /// 1. Removes any existing entry with the same id (a re-viewed product
    ///    moves to the front rather than appearing twice)
    /// 2. Inserts the new entry at position 0
    /// 3. Truncates to [`MAX_RECENTLY_VIEWED`], dropping the oldest beyond
    ///    the bound
    pub fn record(&mut self, entry: RecentlyViewedEntry) {
        self.entries.retain(|existing| existing.id != entry.id);
        self.entries.insert(0, entry);
        self.entries.truncate(MAX_RECENTLY_VIEWED);
    }

    /// Empties the collection.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
