//! Local filesystem storage for uploaded files.
//!
//! All entries live directly under a single root directory:
//! ```text
//! {location}/
//! ├── report.pdf
//! ├── notes.txt
//! └── ...
//! ```

use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

use walkdir::WalkDir;

use super::{StorageError, StorageResult, StoredFile};
use crate::config::StorageConfig;

/// File storage service rooted at a configured directory.
#[derive(Debug, Clone)]
pub struct StorageService {
    /// Root directory for stored files.
    root: PathBuf,
}

impl StorageService {
    /// Create a storage service from its configuration.
    ///
    /// Fails if the configured location is empty. The directory itself is
    /// only created by [`StorageService::init`].
    pub fn new(config: &StorageConfig) -> StorageResult<Self> {
        if config.location.is_empty() {
            return Err(StorageError::EmptyLocation);
        }

        Ok(Self {
            root: PathBuf::from(&config.location),
        })
    }

    /// Get the root directory of this storage.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Create the root directory and any missing parents.
    pub fn init(&self) -> StorageResult<()> {
        fs::create_dir_all(&self.root).map_err(StorageError::Init)?;
        tracing::debug!("Storage root ready at {}", self.root.display());
        Ok(())
    }

    /// Store `content` under `name`, replacing any existing file.
    ///
    /// Empty payloads and names that resolve outside the root directory are
    /// rejected before anything is written.
    pub fn store(&self, name: &str, content: &[u8]) -> StorageResult<()> {
        if content.is_empty() {
            tracing::warn!("Rejected empty upload: {}", name);
            return Err(StorageError::EmptyFile);
        }

        let target = self.resolve_target(name)?;
        fs::write(&target, content)?;

        tracing::info!(
            size = content.len(),
            "Stored file at {}",
            target.display()
        );
        Ok(())
    }

    /// List every stored file as a path relative to the root.
    ///
    /// The walk is performed lazily and from scratch on each call.
    pub fn load_all(&self) -> StorageResult<StoredFiles> {
        fs::read_dir(&self.root).map_err(|e| StorageError::ReadFailed(e.to_string()))?;

        Ok(StoredFiles {
            root: self.root.clone(),
            walker: WalkDir::new(&self.root).min_depth(1).into_iter(),
        })
    }

    /// Compose the path of `name` under the root.
    ///
    /// Unlike [`StorageService::store`], this does not check that the result
    /// stays inside the root and does not touch the filesystem.
    pub fn load(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }

    /// Resolve `name` to a readable stored file.
    pub fn load_as_resource(&self, name: &str) -> StorageResult<StoredFile> {
        let file = StoredFile::new(self.load(name));

        if !file.exists() || !file.is_readable() {
            return Err(StorageError::FileNotFound(name.to_string()));
        }

        Ok(file)
    }

    /// Remove the root directory and everything under it.
    pub fn delete_all(&self) -> StorageResult<()> {
        match fs::remove_dir_all(&self.root) {
            Ok(()) => {
                tracing::info!("Deleted storage root {}", self.root.display());
                Ok(())
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    /// Absolute target path for `name`, or `OutsideRoot` if its parent is not the root.
    fn resolve_target(&self, name: &str) -> StorageResult<PathBuf> {
        let root = normalize(&std::path::absolute(&self.root)?);
        let target = normalize(&std::path::absolute(self.root.join(name))?);

        if target.parent() != Some(root.as_path()) {
            tracing::warn!("Rejected upload outside storage root: {}", name);
            return Err(StorageError::OutsideRoot);
        }

        Ok(target)
    }
}

/// Lexically resolve `.` and `..` components without touching the filesystem.
fn normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}

/// Lazy listing of stored files, produced by [`StorageService::load_all`].
pub struct StoredFiles {
    root: PathBuf,
    walker: walkdir::IntoIter,
}

impl Iterator for StoredFiles {
    type Item = StorageResult<PathBuf>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let entry = match self.walker.next()? {
                Ok(entry) => entry,
                Err(e) => return Some(Err(StorageError::ReadFailed(e.to_string()))),
            };

            if !entry.file_type().is_file() {
                continue;
            }

            let relative = entry
                .path()
                .strip_prefix(&self.root)
                .map(Path::to_path_buf)
                .map_err(|e| StorageError::ReadFailed(e.to_string()));
            return Some(relative);
        }
    }
}
