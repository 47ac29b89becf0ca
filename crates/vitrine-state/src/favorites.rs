//! # Favorites Slice
//!
//! Holds the set of favorited products. Leaf slice, no dependencies on the
//! other slices.
//!
//! ## Operation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    Favorites Operations                             │
//! │                                                                     │
//! │  Frontend Action         Slice Operation        Collection Change   │
//! │  ───────────────         ───────────────        ─────────────────   │
//! │                                                                     │
//! │  Tap heart icon ───────► toggle(product) ─────► add or remove       │
//! │  Open favorites view ──► all() ───────────────► (read only)         │
//! │  Heart rendering ──────► is_favorite(id) ─────► (read only)         │
//! │  Remove button ────────► remove(id) ──────────► retain ≠ id         │
//! │                                                                     │
//! │  Every mutation persists the full collection before returning.      │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex, MutexGuard};

use tracing::debug;

use vitrine_core::{
    CatalogProduct, FavoriteEntry, FavoriteToggle, FavoritesList, ProductId, ProductSummary,
};
use vitrine_storage::StorageBackend;

use crate::error::StateResult;
use crate::persist::{load_or_default, persist, Durability};

/// Durable storage key owned by this slice.
const KEY: &str = "favorites";

/// The favorites state slice.
#[derive(Clone)]
pub struct FavoritesSlice {
    favorites: Arc<Mutex<FavoritesList>>,
    storage: Arc<dyn StorageBackend>,
}

impl FavoritesSlice {
    /// Loads the slice from durable storage.
    ///
    /// Absent key → empty collection; malformed stored value → empty
    /// collection plus a warning.
    pub fn load(storage: Arc<dyn StorageBackend>) -> Self {
        let entries: Vec<FavoriteEntry> = load_or_default(storage.as_ref(), KEY);
        FavoritesSlice {
            favorites: Arc::new(Mutex::new(FavoritesList::from_entries(entries))),
            storage,
        }
    }

    fn lock(&self) -> MutexGuard<'_, FavoritesList> {
        self.favorites.lock().expect("favorites mutex poisoned")
    }

    /// All favorites, insertion order. Pure projection.
    pub fn all(&self) -> Vec<FavoriteEntry> {
        self.lock().entries().to_vec()
    }

    /// Membership test by product id. Pure projection.
    pub fn is_favorite(&self, id: &ProductId) -> bool {
        self.lock().is_favorite(id)
    }

    /// Adds a product to the favorites.
    ///
    /// ## Behavior
    /// - Validates the catalog record first; a rejected record mutates
    ///   nothing
    /// - Fails with `AlreadyFavorited` when the id is present (callers
    ///   driving UI interactions should use [`FavoritesSlice::toggle`])
    /// - Persists the full updated collection
    pub fn add(&self, product: &CatalogProduct) -> StateResult<Durability> {
        let entry = ProductSummary::from_catalog(product)?;
        debug!(product_id = %entry.id, "add_to_favorites");

        let mut favorites = self.lock();
        favorites.add(entry)?;
        Ok(persist(self.storage.as_ref(), KEY, &*favorites))
    }

    /// Removes the favorite with the matching id.
    ///
    /// Absent ids are a no-op, not an error. The full collection is
    /// persisted either way.
    pub fn remove(&self, id: &ProductId) -> Durability {
        debug!(product_id = %id, "remove_from_favorites");

        let mut favorites = self.lock();
        favorites.remove(id);
        persist(self.storage.as_ref(), KEY, &*favorites)
    }

    /// Adds the product if absent, removes it if present.
    ///
    /// The operation view interactions drive; at most one entry per id by
    /// construction. Returns what happened plus whether it reached durable
    /// storage.
    pub fn toggle(&self, product: &CatalogProduct) -> StateResult<(FavoriteToggle, Durability)> {
        let entry = ProductSummary::from_catalog(product)?;
        debug!(product_id = %entry.id, "toggle_favorite");

        let mut favorites = self.lock();
        let action = favorites.toggle(entry);
        let durability = persist(self.storage.as_ref(), KEY, &*favorites);
        Ok((action, durability))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::FailingStorage;
    use vitrine_storage::MemoryStorage;

    fn product(id: &str) -> CatalogProduct {
        CatalogProduct {
            id: ProductId::from(id),
            title: format!("Product {}", id),
            price: 12.0,
            description: "test".to_string(),
            images: vec![format!("https://img.example/{}.png", id)],
        }
    }

    fn slice(storage: &MemoryStorage) -> FavoritesSlice {
        FavoritesSlice::load(Arc::new(storage.clone()))
    }

    #[test]
    fn test_starts_empty_when_nothing_stored() {
        let storage = MemoryStorage::new();
        assert!(slice(&storage).all().is_empty());
    }

    #[test]
    fn test_add_then_membership() {
        let storage = MemoryStorage::new();
        let favorites = slice(&storage);

        favorites.add(&product("1")).unwrap();
        assert!(favorites.is_favorite(&ProductId::from("1")));
        assert_eq!(favorites.all().len(), 1);
    }

    #[test]
    fn test_duplicate_add_is_rejected() {
        let storage = MemoryStorage::new();
        let favorites = slice(&storage);

        favorites.add(&product("1")).unwrap();
        assert!(favorites.add(&product("1")).is_err());
        assert_eq!(favorites.all().len(), 1);
    }

    #[test]
    fn test_invalid_product_mutates_nothing() {
        let storage = MemoryStorage::new();
        let favorites = slice(&storage);

        let mut bad = product("1");
        bad.images.clear();

        assert!(favorites.add(&bad).is_err());
        assert!(favorites.all().is_empty());
        assert!(storage.read(KEY).unwrap().is_none());
    }

    #[test]
    fn test_toggle_twice_is_identity() {
        let storage = MemoryStorage::new();
        let favorites = slice(&storage);
        favorites.add(&product("keep")).unwrap();
        let before: Vec<_> = favorites.all();

        let (first, _) = favorites.toggle(&product("x")).unwrap();
        let (second, _) = favorites.toggle(&product("x")).unwrap();

        assert_eq!(first, FavoriteToggle::Added);
        assert_eq!(second, FavoriteToggle::Removed);
        assert_eq!(favorites.all(), before);
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let storage = MemoryStorage::new();
        let favorites = slice(&storage);
        favorites.add(&product("1")).unwrap();

        assert!(favorites.remove(&ProductId::from("99")).is_durable());
        assert_eq!(favorites.all().len(), 1);
    }

    #[test]
    fn test_survives_restart_in_insertion_order() {
        let storage = MemoryStorage::new();
        {
            let favorites = slice(&storage);
            favorites.add(&product("b")).unwrap();
            favorites.add(&product("a")).unwrap();
            favorites.add(&product("c")).unwrap();
        }

        // Reloading from the same backend simulates a process restart.
        let reloaded = slice(&storage);
        let ids: Vec<String> = reloaded
            .all()
            .iter()
            .map(|entry| entry.id.to_string())
            .collect();
        assert_eq!(ids, ["b", "a", "c"]);
    }

    #[test]
    fn test_malformed_stored_value_falls_back_to_empty() {
        let storage = MemoryStorage::new();
        storage.seed(KEY, "{not json");

        let favorites = slice(&storage);
        assert!(favorites.all().is_empty());

        // The slice stays fully operational after the fallback.
        favorites.add(&product("1")).unwrap();
        assert!(favorites.is_favorite(&ProductId::from("1")));
    }

    #[test]
    fn test_failed_write_keeps_memory_state() {
        let favorites = FavoritesSlice::load(Arc::new(FailingStorage));

        let durability = favorites.add(&product("1")).unwrap();
        assert_eq!(durability, Durability::MemoryOnly);
        assert!(favorites.is_favorite(&ProductId::from("1")));
    }
}
