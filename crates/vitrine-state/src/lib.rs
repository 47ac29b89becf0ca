//! # vitrine-state: Application State Layer
//!
//! The three persistence-backed state slices of the Vitrine catalog browser,
//! composed into one [`AppState`] container.
//!
//! ## State Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                       State Architecture                            │
//! │                                                                     │
//! │  ┌───────────────────────────────────────────────────────────────┐  │
//! │  │                  Embedding Application                        │  │
//! │  │  let state = AppState::load(storage);                         │  │
//! │  │  state.recently_viewed.view(&product)?;                       │  │
//! │  └───────────────────────────────────────────────────────────────┘  │
//! │                               │                                     │
//! │         ┌─────────────────────┼──────────────────────┐              │
//! │         ▼                     ▼                      ▼              │
//! │  ┌─────────────┐  ┌──────────────────┐  ┌──────────────────────┐    │
//! │  │ ThemeSlice  │  │  FavoritesSlice  │  │ RecentlyViewedSlice  │    │
//! │  │             │  │                  │  │                      │    │
//! │  │ key: theme  │  │  key: favorites  │  │  key: recentlyViewed │    │
//! │  └─────────────┘  └──────────────────┘  └──────────────────────┘    │
//! │                                                                     │
//! │  Each slice: Arc<Mutex<pure collection>> + Arc<dyn StorageBackend>  │
//! │  Every mutation: validate → update under lock → persist → report    │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Thread Safety
//! The original execution model is a single-threaded UI event loop where
//! read-modify-persist runs to completion between events. Here each slice
//! carries its own mutex so that guarantee holds in a multi-threaded embedder
//! too. Slices own disjoint keys, so there is no cross-slice contention.
//!
//! ## Durability Reporting
//! Mutators report [`Durability`]: `Durable` when the in-memory and durable
//! copies both updated, `MemoryOnly` when the storage write failed and the
//! in-memory update stands alone (a warning is logged either way).

pub mod container;
pub mod error;
pub mod favorites;
mod persist;
pub mod recent;
pub mod theme;

pub use container::AppState;
pub use error::{StateError, StateResult};
pub use favorites::FavoritesSlice;
pub use persist::Durability;
pub use recent::RecentlyViewedSlice;
pub use theme::ThemeSlice;

use tracing_subscriber::EnvFilter;

/// Initializes the tracing subscriber for structured logging.
///
/// Called once by the embedding application, never by library code.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages everywhere
/// - `RUST_LOG=vitrine_state=trace` - Trace the state layer only
/// - Default: INFO, with DEBUG for the vitrine crates
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,vitrine_state=debug,vitrine_storage=debug"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
