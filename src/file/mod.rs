//! File storage module for Filedrop.
//!
//! This module provides the local filesystem storage behind the upload API:
//! - Root directory lifecycle (init, delete all)
//! - Validated writes that cannot escape the root directory
//! - Lazy listing and name resolution of stored files

mod error;
mod resource;
mod storage;

pub use error::{StorageError, StorageResult};
pub use resource::StoredFile;
pub use storage::{StorageService, StoredFiles};
