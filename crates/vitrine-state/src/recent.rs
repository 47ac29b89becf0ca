//! # Recently Viewed Slice
//!
//! Holds the bounded, de-duplicated, most-recent-first list of viewed
//! products. The only slice with a size-bound eviction policy; the policy
//! itself lives in [`vitrine_core::RecentlyViewedList`], this slice adds the
//! view timestamp and the persistence side effect.

use std::sync::{Arc, Mutex, MutexGuard};

use chrono::Utc;
use tracing::debug;

use vitrine_core::{
    CatalogProduct, ProductId, ProductSummary, RecentlyViewedEntry, RecentlyViewedList,
};
use vitrine_storage::StorageBackend;

use crate::error::StateResult;
use crate::persist::{load_or_default, persist, Durability};

/// Durable storage key owned by this slice.
const KEY: &str = "recentlyViewed";

/// The recently-viewed state slice.
#[derive(Clone)]
pub struct RecentlyViewedSlice {
    recent: Arc<Mutex<RecentlyViewedList>>,
    storage: Arc<dyn StorageBackend>,
}

impl RecentlyViewedSlice {
    /// Loads the slice from durable storage.
    ///
    /// Absent key → empty collection; malformed stored value → empty
    /// collection plus a warning. An oversized stored array (hand-edited or
    /// written by an older build) is truncated to the bound on the way in.
    pub fn load(storage: Arc<dyn StorageBackend>) -> Self {
        let entries: Vec<RecentlyViewedEntry> = load_or_default(storage.as_ref(), KEY);
        RecentlyViewedSlice {
            recent: Arc::new(Mutex::new(RecentlyViewedList::from_entries(entries))),
            storage,
        }
    }

    fn lock(&self) -> MutexGuard<'_, RecentlyViewedList> {
        self.recent.lock().expect("recently-viewed mutex poisoned")
    }

    /// All entries, newest first. Pure projection.
    pub fn all(&self) -> Vec<RecentlyViewedEntry> {
        self.lock().entries().to_vec()
    }

    /// Membership test by product id. Pure projection.
    pub fn is_recently_viewed(&self, id: &ProductId) -> bool {
        self.lock().is_recently_viewed(id)
    }

    /// Records that the user opened a product.
    ///
    /// ## Behavior
    /// 1. Validates the catalog record; a rejected record mutates nothing
    /// 2. Freezes the summary and stamps `viewed_at = now`
    /// 3. De-duplicates by id, inserts at the front, truncates to the bound
    /// 4. Persists the full updated collection
    pub fn view(&self, product: &CatalogProduct) -> StateResult<Durability> {
        let summary = ProductSummary::from_catalog(product)?;
        debug!(product_id = %summary.id, "view_product");

        let entry = RecentlyViewedEntry::new(summary, Utc::now());
        let mut recent = self.lock();
        recent.record(entry);
        Ok(persist(self.storage.as_ref(), KEY, &*recent))
    }

    /// Empties the collection and persists the empty collection.
    pub fn clear(&self) -> Durability {
        debug!("clear_recently_viewed");

        let mut recent = self.lock();
        recent.clear();
        persist(self.storage.as_ref(), KEY, &*recent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::FailingStorage;
    use vitrine_core::MAX_RECENTLY_VIEWED;
    use vitrine_storage::MemoryStorage;

    fn product(id: &str) -> CatalogProduct {
        CatalogProduct {
            id: ProductId::from(id),
            title: format!("Product {}", id),
            price: 7.5,
            description: "test".to_string(),
            images: vec![format!("https://img.example/{}.png", id)],
        }
    }

    fn slice(storage: &MemoryStorage) -> RecentlyViewedSlice {
        RecentlyViewedSlice::load(Arc::new(storage.clone()))
    }

    fn ids(slice: &RecentlyViewedSlice) -> Vec<String> {
        slice.all().iter().map(|entry| entry.id.to_string()).collect()
    }

    #[test]
    fn test_starts_empty_when_nothing_stored() {
        let storage = MemoryStorage::new();
        assert!(slice(&storage).all().is_empty());
    }

    #[test]
    fn test_view_records_newest_first() {
        let storage = MemoryStorage::new();
        let recent = slice(&storage);

        recent.view(&product("1")).unwrap();
        recent.view(&product("2")).unwrap();

        assert_eq!(ids(&recent), ["2", "1"]);
        assert!(recent.is_recently_viewed(&ProductId::from("1")));
    }

    #[test]
    fn test_reviewing_moves_to_front() {
        let storage = MemoryStorage::new();
        let recent = slice(&storage);

        recent.view(&product("P")).unwrap();
        recent.view(&product("Q")).unwrap();
        recent.view(&product("P")).unwrap();

        assert_eq!(ids(&recent), ["P", "Q"]);
    }

    #[test]
    fn test_bound_holds_for_any_view_sequence() {
        let storage = MemoryStorage::new();
        let recent = slice(&storage);

        for i in 0..3 * MAX_RECENTLY_VIEWED {
            recent.view(&product(&i.to_string())).unwrap();
            assert!(recent.all().len() <= MAX_RECENTLY_VIEWED);
        }
    }

    #[test]
    fn test_invalid_product_mutates_nothing() {
        let storage = MemoryStorage::new();
        let recent = slice(&storage);

        let mut bad = product("1");
        bad.images.clear();

        assert!(recent.view(&bad).is_err());
        assert!(recent.all().is_empty());
        assert!(storage.read(KEY).unwrap().is_none());
    }

    #[test]
    fn test_clear_empties_and_persists() {
        let storage = MemoryStorage::new();
        let recent = slice(&storage);

        recent.view(&product("1")).unwrap();
        assert!(recent.clear().is_durable());

        assert!(recent.all().is_empty());
        assert_eq!(storage.read(KEY).unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_survives_restart_in_view_order() {
        let storage = MemoryStorage::new();
        {
            let recent = slice(&storage);
            recent.view(&product("1")).unwrap();
            recent.view(&product("2")).unwrap();
            recent.view(&product("3")).unwrap();
        }

        // Reloading from the same backend simulates a process restart.
        let reloaded = slice(&storage);
        assert_eq!(ids(&reloaded), ["3", "2", "1"]);
    }

    #[test]
    fn test_stored_value_uses_layout_field_names() {
        let storage = MemoryStorage::new();
        slice(&storage).view(&product("1")).unwrap();

        let raw = storage.read(KEY).unwrap().unwrap();
        assert!(raw.starts_with('['));
        assert!(raw.contains(r#""viewedAt""#));
    }

    #[test]
    fn test_malformed_stored_value_falls_back_to_empty() {
        let storage = MemoryStorage::new();
        storage.seed(KEY, "42");

        let recent = slice(&storage);
        assert!(recent.all().is_empty());
    }

    #[test]
    fn test_failed_write_keeps_memory_state() {
        let recent = RecentlyViewedSlice::load(Arc::new(FailingStorage));

        let durability = recent.view(&product("1")).unwrap();
        assert_eq!(durability, Durability::MemoryOnly);
        assert_eq!(ids(&recent), ["1"]);
    }
}
