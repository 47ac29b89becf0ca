//! # Theme Slice
//!
//! Holds the active UI theme flag. Leaf slice, no dependencies on the other
//! slices.
//!
//! Invalid theme values are unrepresentable in the [`Theme`] enum, so the
//! mutators cannot fail; a junk value in durable storage is malformed data
//! and falls back to the default at load, with a warning.

use std::sync::{Arc, Mutex, MutexGuard};

use tracing::debug;

use vitrine_core::Theme;
use vitrine_storage::StorageBackend;

use crate::persist::{load_or_default, persist, Durability};

/// Durable storage key owned by this slice.
const KEY: &str = "theme";

/// The theme state slice.
#[derive(Clone)]
pub struct ThemeSlice {
    theme: Arc<Mutex<Theme>>,
    storage: Arc<dyn StorageBackend>,
}

impl ThemeSlice {
    /// Loads the slice from durable storage.
    ///
    /// Absent key → the default theme ([`Theme::Dark`]); malformed stored
    /// value → default plus a warning.
    pub fn load(storage: Arc<dyn StorageBackend>) -> Self {
        let theme = load_or_default(storage.as_ref(), KEY);
        ThemeSlice {
            theme: Arc::new(Mutex::new(theme)),
            storage,
        }
    }

    fn lock(&self) -> MutexGuard<'_, Theme> {
        self.theme.lock().expect("theme mutex poisoned")
    }

    /// The active theme. Pure projection, no side effects.
    pub fn current(&self) -> Theme {
        *self.lock()
    }

    /// Replaces the theme flag unconditionally and persists it.
    pub fn set(&self, theme: Theme) -> Durability {
        debug!(theme = %theme, "set_theme");

        let mut current = self.lock();
        *current = theme;
        persist(self.storage.as_ref(), KEY, &*current)
    }

    /// Sets the flag to the opposite of the current value and persists it.
    ///
    /// Toggling twice returns the flag to its original value.
    pub fn toggle(&self) -> Durability {
        let mut current = self.lock();
        *current = current.toggled();
        debug!(theme = %*current, "toggle_theme");
        persist(self.storage.as_ref(), KEY, &*current)
    }
}
