//! # Error Types
//!
//! Domain-specific error types for vitrine-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                          Error Types                                │
//! │                                                                     │
//! │  vitrine-core errors (this file)                                    │
//! │  ├── CoreError        - Domain rule violations                      │
//! │  └── ValidationError  - Catalog input validation failures           │
//! │                                                                     │
//! │  vitrine-storage errors (separate crate)                            │
//! │  └── StorageError     - Durable storage failures                    │
//! │                                                                     │
//! │  vitrine-state errors (separate crate)                              │
//! │  └── StateError       - What slice callers see                      │
//! │                                                                     │
//! │  Flow: ValidationError → CoreError → StateError → caller            │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

use crate::types::ProductId;

// =============================================================================
// Core Error
// =============================================================================

/// Domain rule errors.
///
/// These represent violations of the collection invariants. They should be
/// caught by the state layer and translated to user-facing messages.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Product is already in the favorites collection.
    ///
    /// ## When This Occurs
    /// - `add` is called directly with an id that is already favorited
    ///
    /// `toggle` checks membership first and removes instead, so
    /// interaction-driven flows never observe this error.
    #[error("Product already favorited: {0}")]
    AlreadyFavorited(ProductId),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Catalog input validation errors.
///
/// These occur when a product record from the external catalog collaborator
/// doesn't meet the inbound contract. Used for early validation before any
/// collection is touched.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// The product carries no images; entries store `images[0]`.
    #[error("product {id} has no images")]
    NoImages { id: ProductId },
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

/// Convenience type alias for Results with ValidationError.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================
