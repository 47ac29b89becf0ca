//! # Storage Error Types
//!
//! Error types for durable storage operations.
//!
//! Decode failures are deliberately absent here: the backend stores raw
//! strings and never inspects them, so "the stored value is not valid encoded
//! data" is classified by the state layer, which owns the encoding.

use std::path::PathBuf;

use thiserror::Error;

/// Durable storage operation errors.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The storage medium could not be read or written.
    ///
    /// ## When This Occurs
    /// - Disk full or permissions on a write
    /// - Storage root removed out from under the process
    /// - Unreadable (non-UTF-8, locked) value file
    ///
    /// Callers proceed in-memory and surface a warning; the in-memory copy
    /// stays authoritative until the next successful write.
    #[error("storage unavailable for key '{key}': {source}")]
    Unavailable {
        key: String,
        #[source]
        source: std::io::Error,
    },

    /// The storage root directory could not be created or resolved.
    #[error("cannot prepare storage root {path:?}: {source}")]
    RootUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// No platform app-data directory could be determined.
    #[error("no platform app-data directory available")]
    NoAppDataDir,
}

/// Convenience type alias for Results with StorageError.
pub type StorageResult<T> = Result<T, StorageError>;
