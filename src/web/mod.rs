//! Web module for Filedrop.
//!
//! This module provides the HTTP interface to the file storage: an HTML
//! upload page, a JSON listing, downloads by name and multipart uploads.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod server;

pub use error::ApiError;
pub use router::create_router;
pub use server::WebServer;
