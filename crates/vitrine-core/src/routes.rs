//! # Route Table
//!
//! Static table mapping URL path patterns to view identifiers.
//!
//! ## Route Table
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  pattern              view               path parameters            │
//! │  ──────────────────   ────────────────   ─────────────────────      │
//! │  /                    home                                          │
//! │  /categories          categories                                    │
//! │  /product/:id         product-detail     id                         │
//! │  /product-listing     product-listing                               │
//! │  /favorite            favorite                                      │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Pure declarative lookup: no redirects, no guards, no nested routes.
//! Navigation history belongs to the embedding application's standard
//! history mechanism, not to this table.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// =============================================================================
// View Identifiers
// =============================================================================

/// The views a path can resolve to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "kebab-case")]
#[ts(export)]
pub enum View {
    Home,
    Categories,
    ProductDetail,
    ProductListing,
    Favorite,
}

impl View {
    /// Returns the route name for this view.
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            View::Home => "home",
            View::Categories => "categories",
            View::ProductDetail => "product-detail",
            View::ProductListing => "product-listing",
            View::Favorite => "favorite",
        }
    }
}

// =============================================================================
// Route Table
// =============================================================================

/// The full route table, in declaration order.
///
/// Patterns are segment-wise; a `:name` segment captures the corresponding
/// path segment as a parameter.
pub const ROUTES: &[(&str, View)] = &[
    ("/", View::Home),
    ("/categories", View::Categories),
    ("/product/:id", View::ProductDetail),
    ("/product-listing", View::ProductListing),
    ("/favorite", View::Favorite),
];

// =============================================================================
// Resolution
// =============================================================================

/// A resolved route: the matched view plus any captured path parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch {
    /// The view this path resolves to.
    pub view: View,
    params: Vec<(&'static str, String)>,
}

impl RouteMatch {
    /// Looks up a captured path parameter by name.
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(param, _)| *param == name)
            .map(|(_, value)| value.as_str())
    }
}

/// Resolves a path against the route table.
///
/// ## Behavior
/// - A query string (`?...`) is ignored
/// - A single trailing slash is tolerated on non-root paths
/// - Returns `None` for paths no pattern matches
///
/// ## Example
/// ```rust
/// use vitrine_core::routes::{resolve, View};
///
/// let matched = resolve("/product/42").unwrap();
/// assert_eq!(matched.view, View::ProductDetail);
/// assert_eq!(matched.param("id"), Some("42"));
/// ```
pub fn resolve(path: &str) -> Option<RouteMatch> {
    let path = path.split('?').next().unwrap_or(path);
    let segments: Vec<&str> = split_segments(path);

    ROUTES.iter().find_map(|&(pattern, view)| {
        match_pattern(pattern, &segments).map(|params| RouteMatch { view, params })
    })
}

/// Splits a path into its non-empty segments; `/` yields no segments.
fn split_segments(path: &str) -> Vec<&str> {
    path.split('/').filter(|segment| !segment.is_empty()).collect()
}

/// Matches path segments against one pattern, collecting `:name` captures.
fn match_pattern(pattern: &'static str, segments: &[&str]) -> Option<Vec<(&'static str, String)>> {
    let pattern_segments = split_segments(pattern);

    if pattern_segments.len() != segments.len() {
        return None;
    }

    let mut params = Vec::new();
    for (pattern_segment, segment) in pattern_segments.iter().zip(segments) {
        match pattern_segment.strip_prefix(':') {
            Some(name) => params.push((name, (*segment).to_string())),
            None if pattern_segment == segment => {}
            None => return None,
        }
    }

    Some(params)
}

// =============================================================================
// Unit Tests
// =============================================================================
