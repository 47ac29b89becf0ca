//! # State-Layer Error Type
//!
//! What slice callers see when an operation fails.
//!
//! Storage trouble is deliberately *not* an error here: a failed write
//! degrades to [`crate::Durability::MemoryOnly`] and a failed or malformed
//! read at load degrades to the default value, both with a logged warning.
//! Errors are reserved for inputs the domain rejects, which fail before any
//! state is touched.

use thiserror::Error;

use vitrine_core::CoreError;

/// State operation errors.
#[derive(Debug, Error)]
pub enum StateError {
    /// A domain rule or input validation failure from vitrine-core.
    #[error(transparent)]
    Core(#[from] CoreError),
}

/// Convenience type alias for Results with StateError.
pub type StateResult<T> = Result<T, StateError>;
