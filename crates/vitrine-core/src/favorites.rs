//! # Favorites Collection
//!
//! The pure favorites collection and its invariants. Persistence happens a
//! layer up in `vitrine-state`; this type only knows how to update itself.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::types::{FavoriteEntry, ProductId};

/// Outcome of a favorite toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteToggle {
    /// The product was not favorited and has been added.
    Added,
    /// The product was favorited and has been removed.
    Removed,
}

/// The favorites collection.
///
/// ## Invariants
/// - Entries are unique by `id`
/// - Insertion order is preserved (no ordering policy)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FavoritesList {
    entries: Vec<FavoriteEntry>,
}

impl FavoritesList {
    /// Creates an empty favorites collection.
    pub fn new() -> Self {
        FavoritesList {
            entries: Vec::new(),
        }
    }

    /// Creates a collection from already-validated entries.
    ///
    /// Used when reloading from durable storage; the stored array is trusted
    /// to satisfy the uniqueness invariant because every write goes through
    /// [`FavoritesList::add`].
    pub fn from_entries(entries: Vec<FavoriteEntry>) -> Self {
        FavoritesList { entries }
    }

    /// Read-only view of all favorites, insertion order.
    pub fn entries(&self) -> &[FavoriteEntry] {
        &self.entries
    }

    /// Membership test by product id.
    pub fn is_favorite(&self, id: &ProductId) -> bool {
        self.entries.iter().any(|entry| entry.id == *id)
    }

    /// Number of favorited products.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Checks whether the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Appends a new favorite.
    ///
    /// ## Behavior
    /// - Fails with [`CoreError::AlreadyFavorited`] if the id is present;
    ///   the collection is left unchanged
    /// - Otherwise appends at the end (insertion order preserved)
    pub fn add(&mut self, entry: FavoriteEntry) -> CoreResult<()> {
        if self.is_favorite(&entry.id) {
            return Err(CoreError::AlreadyFavorited(entry.id));
        }

        self.entries.push(entry);
        Ok(())
    }

    /// Removes the entry with the matching id.
    ///
    /// Absent ids are a no-op, not an error; returns whether an entry was
    /// actually removed.
    pub fn remove(&mut self, id: &ProductId) -> bool {
        let initial_len = self.entries.len();
        self.entries.retain(|entry| entry.id != *id);
        self.entries.len() != initial_len
    }

    /// Adds the entry if absent, removes it if present.
    ///
    /// This is the operation view interactions drive; it guarantees the
    /// at-most-one-entry-per-id invariant by construction.
    pub fn toggle(&mut self, entry: FavoriteEntry) -> FavoriteToggle {
        if self.remove(&entry.id) {
            FavoriteToggle::Removed
        } else {
            self.entries.push(entry);
            FavoriteToggle::Added
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ProductSummary;

    fn entry(id: &str) -> FavoriteEntry {
        ProductSummary {
            id: ProductId::from(id),
            title: format!("Product {}", id),
            price: 19.99,
            description: "test".to_string(),
            image: format!("https://img.example/{}.png", id),
        }
    }

    #[test]
    fn test_add_and_membership() {
        let mut favorites = FavoritesList::new();
        favorites.add(entry("1")).unwrap();

        assert!(favorites.is_favorite(&ProductId::from("1")));
        assert!(!favorites.is_favorite(&ProductId::from("2")));
        assert_eq!(favorites.len(), 1);
    }

    #[test]
    fn test_duplicate_add_fails_and_leaves_collection_unchanged() {
        let mut favorites = FavoritesList::new();
        favorites.add(entry("1")).unwrap();

        let err = favorites.add(entry("1")).unwrap_err();
        assert!(matches!(err, CoreError::AlreadyFavorited(_)));
        assert_eq!(favorites.len(), 1);
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut favorites = FavoritesList::new();
        favorites.add(entry("1")).unwrap();

        assert!(!favorites.remove(&ProductId::from("99")));
        assert_eq!(favorites.len(), 1);
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut favorites = FavoritesList::new();
        favorites.add(entry("b")).unwrap();
        favorites.add(entry("a")).unwrap();
        favorites.add(entry("c")).unwrap();

        let ids: Vec<&str> = favorites
            .entries()
            .iter()
            .map(|e| e.id.as_str())
            .collect();
        assert_eq!(ids, ["b", "a", "c"]);
    }

    #[test]
    fn test_toggle_twice_is_identity() {
        let mut favorites = FavoritesList::new();
        favorites.add(entry("keep")).unwrap();

        assert_eq!(favorites.toggle(entry("x")), FavoriteToggle::Added);
        assert_eq!(favorites.toggle(entry("x")), FavoriteToggle::Removed);

        let ids: Vec<&str> = favorites
            .entries()
            .iter()
            .map(|e| e.id.as_str())
            .collect();
        assert_eq!(ids, ["keep"]);
    }
}
