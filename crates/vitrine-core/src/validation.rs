//! # Validation Module
//!
//! Boundary validation for catalog input.
//!
//! The external catalog collaborator is duck-typed on its side of the fence;
//! everything that crosses into the stores goes through these checks first so
//! no half-formed record ever reaches a collection or durable storage.
//!
//! ## Usage
//! ```rust
//! use vitrine_core::validation::validate_catalog_product;
//! use vitrine_core::{CatalogProduct, ProductId};
//!
//! let product = CatalogProduct {
//!     id: ProductId::from(1),
//!     title: "Espresso Machine".to_string(),
//!     price: 129.0,
//!     description: "Compact 15-bar pump".to_string(),
//!     images: vec!["https://img.example/1.png".to_string()],
//! };
//! assert!(validate_catalog_product(&product).is_ok());
//! ```

use crate::error::{ValidationError, ValidationResult};
use crate::types::CatalogProduct;

/// Validates a catalog product against the inbound contract.
///
/// ## Rules
/// - `id` must not be empty
/// - `title` must not be blank
/// - `images` must contain at least one URL (entries store `images[0]`)
///
/// Runs before any state mutation; a failure here leaves every collection
/// untouched.
pub fn validate_catalog_product(product: &CatalogProduct) -> ValidationResult<()> {
    if product.id.as_str().is_empty() {
        return Err(ValidationError::Required {
            field: "id".to_string(),
        });
    }

    if product.title.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "title".to_string(),
        });
    }

    if product.images.is_empty() {
        return Err(ValidationError::NoImages {
            id: product.id.clone(),
        });
    }

    Ok(())
}
