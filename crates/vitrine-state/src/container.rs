//! # Application State Container
//!
//! Composes the three slices under stable names into one addressable root.
//! No logic of its own beyond composition; the slices do not depend on each
//! other, so initialization order is irrelevant.
//!
//! The container is built explicitly at application start and handed to
//! whichever component needs it; there is no ambient singleton. Cloning is
//! cheap: slices share their state through `Arc`, so every clone addresses
//! the same collections.

use std::sync::Arc;

use tracing::info;

use vitrine_storage::{FileStorage, StorageBackend, StorageResult};

use crate::favorites::FavoritesSlice;
use crate::recent::RecentlyViewedSlice;
use crate::theme::ThemeSlice;

/// The process-wide application state.
#[derive(Clone)]
pub struct AppState {
    /// Active UI theme flag.
    pub theme: ThemeSlice,
    /// Favorited products.
    pub favorites: FavoritesSlice,
    /// Bounded most-recent-first list of viewed products.
    pub recently_viewed: RecentlyViewedSlice,
}

impl AppState {
    /// Loads all three slices from the given storage backend.
    ///
    /// Each slice reads its own key; absent keys yield empty collections
    /// and the default theme.
    pub fn load(storage: Arc<dyn StorageBackend>) -> Self {
        let state = AppState {
            theme: ThemeSlice::load(Arc::clone(&storage)),
            favorites: FavoritesSlice::load(Arc::clone(&storage)),
            recently_viewed: RecentlyViewedSlice::load(storage),
        };

        info!(
            theme = %state.theme.current(),
            favorites = state.favorites.all().len(),
            recently_viewed = state.recently_viewed.all().len(),
            "application state loaded"
        );
        state
    }

    /// Loads the state from file storage in the platform app-data directory.
    ///
    /// Convenience for embedders; see [`FileStorage::open_default`] for the
    /// root resolution rules and the `VITRINE_DATA_DIR` override.
    pub fn open_default() -> StorageResult<Self> {
        let storage = FileStorage::open_default()?;
        Ok(AppState::load(Arc::new(storage)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitrine_core::{CatalogProduct, ProductId, Theme};
    use vitrine_storage::MemoryStorage;

    fn product(id: &str) -> CatalogProduct {
        CatalogProduct {
            id: ProductId::from(id),
            title: format!("Product {}", id),
            price: 3.25,
            description: "test".to_string(),
            images: vec![format!("https://img.example/{}.png", id)],
        }
    }

    #[test]
    fn test_fresh_storage_yields_defaults() {
        let state = AppState::load(Arc::new(MemoryStorage::new()));

        assert_eq!(state.theme.current(), Theme::Dark);
        assert!(state.favorites.all().is_empty());
        assert!(state.recently_viewed.all().is_empty());
    }

    #[test]
    fn test_slices_own_disjoint_keys() {
        let storage = MemoryStorage::new();
        let state = AppState::load(Arc::new(storage.clone()));

        let _ = state.theme.set(Theme::Light);
        state.favorites.add(&product("f")).unwrap();
        state.recently_viewed.view(&product("r")).unwrap();

        assert!(storage.read("theme").unwrap().is_some());
        assert!(storage.read("favorites").unwrap().is_some());
        assert!(storage.read("recentlyViewed").unwrap().is_some());

        // Favoriting never leaks into the recently-viewed collection.
        assert!(!state.recently_viewed.is_recently_viewed(&ProductId::from("f")));
        assert!(!state.favorites.is_favorite(&ProductId::from("r")));
    }

    #[test]
    fn test_clones_address_the_same_state() {
        let state = AppState::load(Arc::new(MemoryStorage::new()));
        let handle = state.clone();

        handle.favorites.add(&product("1")).unwrap();
        assert!(state.favorites.is_favorite(&ProductId::from("1")));
    }

    #[test]
    fn test_full_state_survives_restart() {
        let storage = MemoryStorage::new();
        {
            let state = AppState::load(Arc::new(storage.clone()));
            let _ = state.theme.set(Theme::Light);
            state.favorites.add(&product("f1")).unwrap();
            state.recently_viewed.view(&product("r1")).unwrap();
            state.recently_viewed.view(&product("r2")).unwrap();
        }

        // Second load over the same backend simulates a process restart.
        let state = AppState::load(Arc::new(storage));

        assert_eq!(state.theme.current(), Theme::Light);
        assert!(state.favorites.is_favorite(&ProductId::from("f1")));
        let recent_ids: Vec<String> = state
            .recently_viewed
            .all()
            .iter()
            .map(|entry| entry.id.to_string())
            .collect();
        assert_eq!(recent_ids, ["r2", "r1"]);
    }
}
