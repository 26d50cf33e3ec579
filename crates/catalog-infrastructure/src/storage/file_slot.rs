//! File-backed slot storage with atomic writes.
//!
//! Each slot is one JSON file, `{base_dir}/{key}.json`.

use std::fs::{self, File, OpenOptions};
use std::io::{ErrorKind, Write as IoWrite};
use std::path::{Path, PathBuf};

use catalog_core::error::{CatalogError, Result};
use catalog_core::slot::SlotStorage;

/// Slot storage that keeps each slot in its own file.
///
/// Provides:
/// - **Atomicity**: writes go to a tmp file that is renamed over the slot
/// - **Isolation**: an exclusive lock file guards each write
/// - **Durability**: explicit fsync before rename
#[derive(Debug, Clone)]
pub struct FileSlotStorage {
    base_dir: PathBuf,
}

impl FileSlotStorage {
    const EXTENSION: &'static str = "json";

    /// Creates a handle rooted at `base_dir`. The directory is created on first write.
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Returns the file path for a slot key.
    ///
    /// Keys must be a single path component.
    pub fn slot_path(&self, key: &str) -> Result<PathBuf> {
        let valid = !key.is_empty()
            && key != "."
            && key != ".."
            && !key.contains(['/', '\\'])
            && !key.starts_with('.');
        if !valid {
            return Err(CatalogError::config(format!("Invalid slot key: '{}'", key)));
        }
        Ok(self
            .base_dir
            .join(format!("{}.{}", key, Self::EXTENSION)))
    }

    fn temp_path(path: &Path) -> Result<PathBuf> {
        let file_name = path
            .file_name()
            .ok_or_else(|| CatalogError::io("Slot path has no file name"))?;
        let parent = path
            .parent()
            .ok_or_else(|| CatalogError::io("Slot path has no parent directory"))?;
        Ok(parent.join(format!(".{}.tmp", file_name.to_string_lossy())))
    }
}

impl SlotStorage for FileSlotStorage {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let path = self.slot_path(key)?;

        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(CatalogError::io(format!(
                "Failed to read slot {:?}: {}",
                path, e
            ))),
        }
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        let path = self.slot_path(key)?;
        fs::create_dir_all(&self.base_dir)?;

        let _lock = SlotLock::acquire(&path)?;

        let tmp_path = Self::temp_path(&path)?;
        let mut tmp_file = File::create(&tmp_path)?;
        tmp_file.write_all(value.as_bytes())?;
        tmp_file.sync_all()?;
        drop(tmp_file);

        fs::rename(&tmp_path, &path)?;

        tracing::debug!("[FileSlotStorage] Wrote {} bytes to {:?}", value.len(), path);
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let path = self.slot_path(key)?;

        match fs::remove_file(&path) {
            Ok(()) => {
                tracing::info!("[FileSlotStorage] Removed slot {:?}", path);
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// Exclusive lock on a slot, released when the handle is dropped.
///
/// The `{key}.lock` file is left in place. Deleting it would let a waiting
/// writer lock an unlinked inode while a newcomer locks a fresh file.
struct SlotLock {
    #[allow(dead_code)]
    file: File,
}

impl SlotLock {
    fn acquire(path: &Path) -> Result<Self> {
        let lock_path = path.with_extension("lock");

        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(false)
            .open(&lock_path)?;

        #[cfg(unix)]
        {
            use fs2::FileExt;
            file.lock_exclusive().map_err(|e| {
                CatalogError::storage(format!("Failed to acquire slot lock: {}", e))
            })?;
        }

        Ok(SlotLock { file })
    }
}
