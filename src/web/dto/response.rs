//! Response DTOs for Web API.

use serde::Serialize;

/// Generic API response wrapper.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Create a new API response.
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// A stored file in listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileEntryResponse {
    /// Path relative to the storage root.
    pub name: String,
    /// Download URL.
    pub url: String,
}

impl FileEntryResponse {
    /// Create a listing entry for a stored file name.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let url = format!("/files/{}", urlencoding::encode(&name));
        Self { name, url }
    }
}
