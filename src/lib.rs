//! Filedrop - file upload and download over HTTP.
//!
//! Uploaded files are kept in a single local directory and served back by name.

pub mod config;
pub mod error;
pub mod file;
pub mod logging;
pub mod web;

pub use config::Config;
pub use error::{FiledropError, Result};
pub use file::{StorageError, StorageService, StoredFile};
pub use web::WebServer;

/// Prepare the storage root at startup.
///
/// With `clear_on_startup` the root is wiped before it is recreated.
pub fn prepare_storage(config: &config::StorageConfig) -> Result<StorageService> {
    let storage = StorageService::new(config)?;

    if config.clear_on_startup {
        storage.delete_all()?;
    }
    storage.init()?;

    Ok(storage)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_prepare_storage_clears_existing_files() {
        let temp_dir = TempDir::new().unwrap();
        let config = config::StorageConfig::new(temp_dir.path().join("uploads").to_string_lossy());

        let storage = prepare_storage(&config).unwrap();
        storage.store("old.txt", b"old").unwrap();

        let storage = prepare_storage(&config).unwrap();
        assert!(storage.root().is_dir());
        assert_eq!(storage.load_all().unwrap().count(), 0);
    }

    #[test]
    fn test_prepare_storage_keeps_files() {
        let temp_dir = TempDir::new().unwrap();
        let mut config =
            config::StorageConfig::new(temp_dir.path().join("uploads").to_string_lossy());
        config.clear_on_startup = false;

        let storage = prepare_storage(&config).unwrap();
        storage.store("kept.txt", b"kept").unwrap();

        let storage = prepare_storage(&config).unwrap();
        assert!(storage.load_as_resource("kept.txt").is_ok());
    }

    #[test]
    fn test_prepare_storage_empty_location() {
        let result = prepare_storage(&config::StorageConfig::new(""));

        assert!(matches!(
            result,
            Err(FiledropError::Storage(StorageError::EmptyLocation))
        ));
    }
}
