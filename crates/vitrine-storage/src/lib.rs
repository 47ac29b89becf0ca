//! # vitrine-storage: Durable Key-Value Storage
//!
//! The persistence layer of the Vitrine catalog browser: a process-wide
//! key-value store keyed by collection name, surviving process restarts.
//!
//! ## Storage Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    Durable Storage Layout                           │
//! │                                                                     │
//! │  key               value (JSON, encoded by the caller)              │
//! │  ───────────────   ───────────────────────────────────────────      │
//! │  theme             "light" | "dark"                                 │
//! │  favorites         [ {id, title, price, description, image}, … ]    │
//! │  recentlyViewed    [ {…, viewedAt}, … ]  newest first, ≤ 10         │
//! │                                                                     │
//! │  Each state slice owns a disjoint key; absence of a key means       │
//! │  empty collection / default value.                                  │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`backend`] - The [`StorageBackend`] contract and [`MemoryStorage`]
//! - [`file`] - [`FileStorage`], one JSON file per key on disk
//! - [`error`] - Storage error types
//!
//! The backend stores raw strings. Encoding and decoding stay with the
//! caller, which keeps this contract free of any serialization dependency.

pub mod backend;
pub mod error;
pub mod file;

pub use backend::{MemoryStorage, StorageBackend};
pub use error::{StorageError, StorageResult};
pub use file::FileStorage;
