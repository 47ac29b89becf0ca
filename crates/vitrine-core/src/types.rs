//! # Domain Types
//!
//! Core domain types used throughout Vitrine.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                          Domain Types                               │
//! │                                                                     │
//! │  ┌──────────────────┐    ┌──────────────────┐   ┌───────────────┐   │
//! │  │  CatalogProduct  │    │  ProductSummary  │   │     Theme     │   │
//! │  │  ──────────────  │ ──►│  ──────────────  │   │  ───────────  │   │
//! │  │  id              │    │  id              │   │  Light        │   │
//! │  │  title           │    │  title           │   │  Dark         │   │
//! │  │  price           │    │  price           │   └───────────────┘   │
//! │  │  description     │    │  description     │                       │
//! │  │  images[]        │    │  image (first)   │                       │
//! │  └──────────────────┘    └────────┬─────────┘                       │
//! │       (inbound)                   │ + viewed_at                     │
//! │                                   ▼                                 │
//! │                        ┌─────────────────────┐                      │
//! │                        │ RecentlyViewedEntry │                      │
//! │                        └─────────────────────┘                      │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Snapshot Pattern
//! Stored entries freeze catalog data at the moment a store operation runs.
//! Each collection owns its own copies; a catalog update after the fact never
//! changes what was stored.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use ts_rs::TS;

use crate::error::CoreResult;
use crate::validation::validate_catalog_product;

// =============================================================================
// Product Id
// =============================================================================

/// Identifier of a catalog product.
///
/// Catalog sources disagree on id shape: some serve string ids, some serve
/// integers. Deserialization accepts both JSON forms and normalizes to the
/// string form; serialization always emits a string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, TS)]
#[ts(export)]
pub struct ProductId(String);

impl ProductId {
    /// Returns the id as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for ProductId {
    fn from(id: String) -> Self {
        ProductId(id)
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        ProductId(id.to_string())
    }
}

impl From<i64> for ProductId {
    fn from(id: i64) -> Self {
        ProductId(id.to_string())
    }
}

impl<'de> Deserialize<'de> for ProductId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        /// Raw wire form: either a JSON string or a JSON integer.
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Number(i64),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(id) => ProductId(id),
            RawId::Number(id) => ProductId(id.to_string()),
        })
    }
}

// =============================================================================
// Catalog Product (inbound contract)
// =============================================================================

/// A product record as supplied by the external catalog collaborator.
///
/// The data-fetch layer is out of scope; this type is the contract it must
/// satisfy. Only the first image is ever stored.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CatalogProduct {
    /// Catalog identifier (string or integer on the wire).
    pub id: ProductId,

    /// Display title.
    pub title: String,

    /// Display price.
    pub price: f64,

    /// Display description.
    pub description: String,

    /// Ordered image URLs; must be non-empty.
    pub images: Vec<String>,
}

// =============================================================================
// Product Summary
// =============================================================================

/// Denormalized snapshot of a catalog product.
///
/// Captured at the moment a store operation runs, not a live reference.
/// `image` is the first element of the source product's image list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ProductSummary {
    pub id: ProductId,
    pub title: String,
    pub price: f64,
    pub description: String,
    /// First image URL at the time of the snapshot (frozen).
    pub image: String,
}

impl ProductSummary {
    /// Builds a summary from a catalog product, validating the inbound
    /// contract first.
    ///
    /// ## Behavior
    /// - Rejects records with an empty id, blank title, or no images
    /// - Freezes `images[0]` as the stored image
    ///
    /// Fails without partial effects; nothing is mutated on error.
    pub fn from_catalog(product: &CatalogProduct) -> CoreResult<Self> {
        validate_catalog_product(product)?;

        // Validation guarantees at least one image.
        let image = product.images[0].clone();

        Ok(ProductSummary {
            id: product.id.clone(),
            title: product.title.clone(),
            price: product.price,
            description: product.description.clone(),
            image,
        })
    }
}

/// An entry in the favorites collection.
///
/// Favorites carry no timestamp; the entry is exactly the frozen summary.
pub type FavoriteEntry = ProductSummary;

// =============================================================================
// Recently Viewed Entry
// =============================================================================

/// An entry in the recently-viewed collection.
///
/// A product summary frozen at view time, plus the timestamp of the last
/// view. The list is ordered by `viewed_at` descending as a consequence of
/// the insertion policy, never by explicit sort.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct RecentlyViewedEntry {
    pub id: ProductId,
    pub title: String,
    pub price: f64,
    pub description: String,
    /// First image URL at view time (frozen).
    pub image: String,
    /// When the product was last viewed (ISO-8601 on the wire).
    #[ts(as = "String")]
    pub viewed_at: DateTime<Utc>,
}

impl RecentlyViewedEntry {
    /// Builds an entry from a frozen summary and a view timestamp.
    ///
    /// The caller supplies the timestamp so this stays a pure constructor;
    /// the state layer stamps `Utc::now()` when a view actually happens.
    pub fn new(summary: ProductSummary, viewed_at: DateTime<Utc>) -> Self {
        RecentlyViewedEntry {
            id: summary.id,
            title: summary.title,
            price: summary.price,
            description: summary.description,
            image: summary.image,
            viewed_at,
        }
    }
}

// =============================================================================
// Theme
// =============================================================================

/// The active UI theme flag.
///
/// Exactly one of the two values is active at any time. Only the flag is in
/// scope here; visual effects belong to the frontend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    /// Returns the opposite theme.
    ///
    /// Toggling is its own inverse: `t.toggled().toggled() == t`.
    #[inline]
    pub const fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Returns the stored string literal for this theme.
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::Dark
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
