//! Filesystem key-value backend

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::{debug, info};

use super::KeyValueStore;
use crate::error::{Error, Result};

/// One file per key inside a data directory
///
/// Values are written to a temp file in the same directory and renamed into
/// place, so a reader sees either the old blob or the new one.
pub struct FileStore {
    data_dir: PathBuf,
}

impl FileStore {
    /// Open a store rooted at `data_dir`, creating the directory if needed
    pub fn new(data_dir: impl Into<PathBuf>) -> Result<Self> {
        let data_dir = data_dir.into();

        if !data_dir.exists() {
            fs::create_dir_all(&data_dir).map_err(|e| {
                Error::Storage(format!(
                    "Failed to create data directory {}: {}",
                    data_dir.display(),
                    e
                ))
            })?;
            info!("Created data directory: {}", data_dir.display());
        }

        Ok(Self { data_dir })
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// File backing a key
    ///
    /// The key is percent-encoded, so distinct keys map to distinct files and
    /// separators never leave the data directory.
    pub fn key_path(&self, key: &str) -> PathBuf {
        self.data_dir.join(format!("{}.dat", urlencoding::encode(key)))
    }
}

impl KeyValueStore for FileStore {
    fn name(&self) -> &str {
        "file"
    }

    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.key_path(key);
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(&path)?))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let path = self.key_path(key);

        let mut tmp = NamedTempFile::new_in(&self.data_dir)?;
        tmp.write_all(value.as_bytes())?;
        tmp.flush()?;
        tmp.persist(&path).map_err(|e| Error::Io(e.error))?;

        debug!(key, bytes = value.len(), "Wrote {}", path.display());
        Ok(())
    }
}
