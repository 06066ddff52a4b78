//! HTTP handlers for the Web UI.

pub mod file;
pub mod page;

pub use file::*;
pub use page::*;

use crate::file::StorageService;

/// Shared application state.
#[derive(Debug, Clone)]
pub struct AppState {
    /// File storage backing every route.
    pub storage: StorageService,
}

impl AppState {
    /// Create a new application state.
    pub fn new(storage: StorageService) -> Self {
        Self { storage }
    }

    /// Names of all stored files, sorted for stable display.
    pub fn stored_names(&self) -> Result<Vec<String>, crate::file::StorageError> {
        let mut names = self
            .storage
            .load_all()?
            .map(|path| path.map(|p| p.to_string_lossy().into_owned()))
            .collect::<Result<Vec<_>, _>>()?;
        names.sort();
        Ok(names)
    }
}
