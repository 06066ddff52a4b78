//! Storage error types.

use std::io;

use thiserror::Error;

/// Errors raised by the file storage service.
///
/// The web layer maps [`StorageError::FileNotFound`] to a not-found response and
/// every other variant to a generic failure.
#[derive(Error, Debug)]
pub enum StorageError {
    /// The configured root directory is an empty string.
    #[error("file upload location can not be empty")]
    EmptyLocation,

    /// The root directory could not be created.
    #[error("could not initialize storage: {0}")]
    Init(#[source] io::Error),

    /// The uploaded payload has no bytes.
    #[error("failed to store empty file")]
    EmptyFile,

    /// The filename resolves to a path outside the root directory.
    #[error("cannot store file outside current directory")]
    OutsideRoot,

    /// The root directory could not be traversed.
    #[error("failed to read stored files: {0}")]
    ReadFailed(String),

    /// The requested entry does not exist or cannot be read.
    #[error("could not read file: {0}")]
    FileNotFound(String),

    /// Any other filesystem failure.
    #[error("storage I/O error: {0}")]
    Io(#[from] io::Error),
}

impl StorageError {
    /// Whether this error means the requested entry is missing.
    pub fn is_not_found(&self) -> bool {
        matches!(self, StorageError::FileNotFound(_))
    }
}

/// Result type alias for storage operations.
pub type StorageResult<T> = std::result::Result<T, StorageError>;
