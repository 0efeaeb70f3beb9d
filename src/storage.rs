//! Durable local key-value mirror.
//!
//! DESIGN
//! ======
//! User edits must survive restarts without a backend, so each mirrored
//! collection lives as one JSON document under a fixed string key, rewritten
//! wholesale on every change. The contract is load-on-init / save-on-mutation;
//! there is no incremental diffing and no cross-key transaction. Writes go
//! through a temp file + rename so a crash mid-write never leaves a
//! half-serialized document behind.

use std::fs;
use std::io;
use std::path::PathBuf;

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Fixed key for the mirrored worker roster.
pub const WORKERS_KEY: &str = "bikeops.workers";
/// Fixed key for the mirrored bike fleet.
pub const BIKES_KEY: &str = "bikeops.bikes";

pub const DEFAULT_DATA_DIR: &str = "data";

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("storage I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("storage (de)serialization failed: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Flat-file JSON key-value store rooted at a data directory.
pub struct LocalStore {
    dir: PathBuf,
}

impl LocalStore {
    /// Open (and create if needed) the store at the given directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    /// Open the store at the directory named by `BIKEOPS_DATA_DIR`.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn open_from_env() -> Result<Self, StorageError> {
        let dir = std::env::var("BIKEOPS_DATA_DIR").unwrap_or_else(|_| DEFAULT_DATA_DIR.to_string());
        Self::open(dir)
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }

    /// Read the value stored under `key`, or `None` if nothing was ever
    /// written there.
    ///
    /// # Errors
    ///
    /// Returns an error on I/O failure or if the stored document does not
    /// deserialize into `T`.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StorageError> {
        let path = self.path_for(key);
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        Ok(Some(serde_json::from_str(&raw)?))
    }

    /// Replace the value stored under `key` with a fresh serialization of
    /// `value`.
    ///
    /// # Errors
    ///
    /// Returns an error on serialization or I/O failure.
    pub fn put<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StorageError> {
        let path = self.path_for(key);
        let tmp = self.dir.join(format!("{key}.json.tmp"));
        let raw = serde_json::to_string(value)?;
        fs::write(&tmp, raw)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "storage_test.rs"]
mod tests;
