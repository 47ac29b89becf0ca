//! # vitrine-core: Pure Domain Logic for Vitrine
//!
//! This crate is the **heart** of the Vitrine catalog browser. It contains
//! every piece of domain logic as pure code with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Vitrine Architecture                           │
//! │                                                                     │
//! │  ┌───────────────────────────────────────────────────────────────┐  │
//! │  │                  Frontend (views, out of scope)               │  │
//! │  │   Home ──► Categories ──► Product Detail ──► Favorites        │  │
//! │  └──────────────────────────────┬────────────────────────────────┘  │
//! │                                 │                                   │
//! │  ┌──────────────────────────────▼────────────────────────────────┐  │
//! │  │              vitrine-state (slices + container)               │  │
//! │  │   ThemeSlice, FavoritesSlice, RecentlyViewedSlice, AppState   │  │
//! │  └──────────────────────────────┬────────────────────────────────┘  │
//! │                                 │                                   │
//! │  ┌──────────────────────────────▼────────────────────────────────┐  │
//! │  │               ★ vitrine-core (THIS CRATE) ★                   │  │
//! │  │                                                               │  │
//! │  │  ┌─────────┐ ┌───────────┐ ┌────────┐ ┌────────────┐         │  │
//! │  │  │  types  │ │ favorites │ │ recent │ │   routes   │         │  │
//! │  │  │ Product │ │ Favorites │ │ Recent │ │ View table │         │  │
//! │  │  │ Summary │ │   List    │ │  List  │ │  resolve   │         │  │
//! │  │  └─────────┘ └───────────┘ └────────┘ └────────────┘         │  │
//! │  │                                                               │  │
//! │  │   NO I/O • NO STORAGE • NO NETWORK • PURE FUNCTIONS           │  │
//! │  └───────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (ProductSummary, Theme, entries)
//! - [`favorites`] - The favorites collection and its invariants
//! - [`recent`] - The bounded recently-viewed collection
//! - [`routes`] - Declarative route table and path resolution
//! - [`validation`] - Catalog input validation
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: collection updates are deterministic and return to
//!    the caller; persistence happens a layer up
//! 2. **No I/O**: storage, network, file system access is FORBIDDEN here
//! 3. **Snapshot Semantics**: stored entries freeze catalog data at the
//!    moment an operation runs, never hold live references
//! 4. **Explicit Errors**: all errors are typed, never strings or panics

pub mod error;
pub mod favorites;
pub mod recent;
pub mod routes;
pub mod types;
pub mod validation;

// Re-exports so users can write `use vitrine_core::Theme` instead of
// `use vitrine_core::types::Theme`
pub use error::{CoreError, CoreResult, ValidationError};
pub use favorites::{FavoriteToggle, FavoritesList};
pub use recent::RecentlyViewedList;
pub use routes::{resolve, RouteMatch, View};
pub use types::{CatalogProduct, FavoriteEntry, ProductId, ProductSummary, RecentlyViewedEntry, Theme};

/// Maximum number of entries the recently-viewed list may hold.
///
/// Once the list is full, recording another product drops the oldest entry
/// beyond the bound.
pub const MAX_RECENTLY_VIEWED: usize = 10;
