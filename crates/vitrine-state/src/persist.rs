//! # Persistence Seam
//!
//! The one place where slice collections meet the storage backend: encode on
//! the way out, decode with degradation on the way in. Keeping this seam in
//! one module means every slice classifies storage trouble identically.

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::warn;

use vitrine_storage::StorageBackend;

/// Whether a mutation reached durable storage.
///
/// In-memory state is authoritative either way; `MemoryOnly` tells the
/// caller the change will not survive a process restart unless a later
/// write succeeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Durability {
    /// In-memory and durable copies both reflect the change.
    Durable,
    /// The storage write failed; the change lives in memory only.
    MemoryOnly,
}

impl Durability {
    /// Checks whether the change reached durable storage.
    #[inline]
    pub const fn is_durable(self) -> bool {
        matches!(self, Durability::Durable)
    }
}

/// Writes the full collection value under its key.
///
/// A write failure is not an operation failure: the in-memory update stands,
/// the warning is logged, and the caller learns through the return value.
pub(crate) fn persist<T: Serialize>(
    storage: &dyn StorageBackend,
    key: &str,
    value: &T,
) -> Durability {
    let encoded = match serde_json::to_string(value) {
        Ok(encoded) => encoded,
        Err(err) => {
            warn!(key = %key, error = %err, "could not encode value; state held in memory only");
            return Durability::MemoryOnly;
        }
    };

    match storage.write(key, &encoded) {
        Ok(()) => Durability::Durable,
        Err(err) => {
            warn!(key = %key, error = %err, "storage unavailable; state held in memory only");
            Durability::MemoryOnly
        }
    }
}

/// Reads and decodes the value under `key`, degrading to the default.
///
/// ## Degradation
/// - Absent key → default (first run, or cleared storage)
/// - Unreadable storage → default, warning
/// - Malformed stored value → default, warning (never a crash)
pub(crate) fn load_or_default<T: DeserializeOwned + Default>(
    storage: &dyn StorageBackend,
    key: &str,
) -> T {
    match storage.read(key) {
        Ok(Some(raw)) => match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(err) => {
                warn!(key = %key, error = %err, "malformed stored value; using default");
                T::default()
            }
        },
        Ok(None) => T::default(),
        Err(err) => {
            warn!(key = %key, error = %err, "storage unreadable at load; using default");
            T::default()
        }
    }
}
