//! # File Storage Backend
//!
//! One UTF-8 JSON file per key under a single storage root:
//!
//! ```text
//! <root>/
//! ├── theme.json
//! ├── favorites.json
//! └── recentlyViewed.json
//! ```
//!
//! Writes land in a temp file first and are renamed into place, so a crash
//! mid-write never leaves a truncated value behind.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use tracing::debug;

use crate::backend::StorageBackend;
use crate::error::{StorageError, StorageResult};

/// File-backed storage rooted in a single directory.
#[derive(Debug, Clone)]
pub struct FileStorage {
    root: PathBuf,
}

impl FileStorage {
    /// Creates a backend rooted at `root`, creating the directory if needed.
    pub fn new(root: impl Into<PathBuf>) -> StorageResult<Self> {
        let root = root.into();

        fs::create_dir_all(&root).map_err(|source| StorageError::RootUnavailable {
            path: root.clone(),
            source,
        })?;

        Ok(FileStorage { root })
    }

    /// Creates a backend rooted in the platform app-data directory.
    ///
    /// ## Platform-Specific Roots
    /// - **macOS**: `~/Library/Application Support/com.vitrine.vitrine`
    /// - **Windows**: `%APPDATA%\vitrine\vitrine\data`
    /// - **Linux**: `~/.local/share/vitrine`
    ///
    /// ## Development Override
    /// Set `VITRINE_DATA_DIR` to use a custom root instead.
    pub fn open_default() -> StorageResult<Self> {
        if let Ok(root) = std::env::var("VITRINE_DATA_DIR") {
            return FileStorage::new(root);
        }

        let proj_dirs =
            ProjectDirs::from("com", "vitrine", "vitrine").ok_or(StorageError::NoAppDataDir)?;

        FileStorage::new(proj_dirs.data_dir())
    }

    /// The directory this backend stores its files in.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn value_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }

    fn unavailable(key: &str, source: io::Error) -> StorageError {
        StorageError::Unavailable {
            key: key.to_string(),
            source,
        }
    }
}

impl StorageBackend for FileStorage {
    fn read(&self, key: &str) -> StorageResult<Option<String>> {
        match fs::read_to_string(self.value_path(key)) {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(Self::unavailable(key, err)),
        }
    }

    fn write(&self, key: &str, value: &str) -> StorageResult<()> {
        let path = self.value_path(key);
        let tmp_path = self.root.join(format!(".{key}.json.tmp"));

        // Write-then-rename keeps the previous value intact if the write dies.
        fs::write(&tmp_path, value).map_err(|err| Self::unavailable(key, err))?;
        fs::rename(&tmp_path, &path).map_err(|err| Self::unavailable(key, err))?;

        debug!(key = %key, bytes = value.len(), "persisted value");
        Ok(())
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        match fs::remove_file(self.value_path(key)) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(Self::unavailable(key, err)),
        }
    }
}
