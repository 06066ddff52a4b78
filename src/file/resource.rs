//! Handle to a stored file.

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use url::Url;

use super::StorageResult;

/// A stored entry resolved by [`StorageService::load_as_resource`].
///
/// [`StorageService::load_as_resource`]: super::StorageService::load_as_resource
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredFile {
    path: PathBuf,
}

impl StoredFile {
    pub(crate) fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Full path of the underlying file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Final component of the path, if it is valid UTF-8.
    pub fn filename(&self) -> Option<&str> {
        self.path.file_name().and_then(|s| s.to_str())
    }

    /// `file://` URL of the underlying file.
    pub fn uri(&self) -> Option<Url> {
        let absolute = std::path::absolute(&self.path).ok()?;
        Url::from_file_path(absolute).ok()
    }

    /// Check if the file still exists on disk.
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Check if the file is a regular file that can be opened for reading.
    pub fn is_readable(&self) -> bool {
        self.path.is_file() && File::open(&self.path).is_ok()
    }

    /// Size of the file in bytes.
    pub fn content_length(&self) -> StorageResult<u64> {
        Ok(fs::metadata(&self.path)?.len())
    }

    /// Read the whole file.
    pub fn read(&self) -> StorageResult<Vec<u8>> {
        Ok(fs::read(&self.path)?)
    }

    /// Read the whole file without blocking the runtime.
    pub async fn read_async(&self) -> StorageResult<Vec<u8>> {
        Ok(tokio::fs::read(&self.path).await?)
    }
}
