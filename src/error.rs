//! Error types for Filedrop.

use thiserror::Error;

use crate::file::StorageError;

/// Common error type for Filedrop.
#[derive(Error, Debug)]
pub enum FiledropError {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// File storage error.
    ///
    /// Raised while preparing the storage root at startup; request-time
    /// storage failures are mapped directly by the web layer.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Result type alias for Filedrop operations.
pub type Result<T> = std::result::Result<T, FiledropError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = FiledropError::Config("missing port".to_string());
        assert_eq!(err.to_string(), "configuration error: missing port");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: FiledropError = io_err.into();
        assert!(matches!(err, FiledropError::Io(_)));
        assert!(err.to_string().contains("file not found"));
    }

    #[test]
    fn test_storage_error_conversion() {
        let err: FiledropError = StorageError::EmptyLocation.into();
        assert!(matches!(err, FiledropError::Storage(_)));
        assert_eq!(
            err.to_string(),
            "storage error: file upload location can not be empty"
        );
    }

    #[test]
    fn test_result_alias() {
        fn sample_ok() -> Result<i32> {
            Ok(42)
        }

        fn sample_err() -> Result<i32> {
            Err(FiledropError::Config("test".to_string()))
        }

        assert_eq!(sample_ok().unwrap(), 42);
        assert!(sample_err().is_err());
    }
}
