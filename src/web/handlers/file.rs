//! File handlers for the Web API.

use axum::{
    body::Body,
    extract::{multipart::MultipartError, Multipart, Path, State},
    http::{header, StatusCode},
    response::{Redirect, Response},
    Json,
};
use std::sync::Arc;

use crate::web::dto::{ApiResponse, FileEntryResponse};
use crate::web::error::ApiError;
use crate::web::handlers::AppState;

/// Generate a safe Content-Disposition header value for file downloads.
///
/// Control characters are dropped, quotes and backslashes are replaced in the
/// plain `filename` parameter, and non-ASCII names get an RFC 5987
/// `filename*` parameter.
fn content_disposition_header(filename: &str) -> String {
    if filename.is_ascii() && !filename.chars().any(|c| c.is_control() || c == '"' || c == '\\') {
        return format!("attachment; filename=\"{}\"", filename);
    }

    let sanitized: String = filename
        .chars()
        .filter(|c| !c.is_control())
        .map(|c| match c {
            '"' | '\\' => '_',
            _ => c,
        })
        .collect();

    format!(
        "attachment; filename=\"{}\"; filename*=UTF-8''{}",
        sanitized,
        urlencoding::encode(filename)
    )
}

/// Whether a download name could refer to something other than a direct child of the root.
fn is_nested_name(filename: &str) -> bool {
    filename.is_empty()
        || filename == "."
        || filename == ".."
        || filename.contains('/')
        || filename.contains('\\')
}

fn multipart_error(e: MultipartError) -> ApiError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        tracing::warn!("Upload rejected: {}", e);
        return ApiError::payload_too_large("File too large");
    }

    tracing::error!("Failed to read multipart data: {}", e);
    ApiError::bad_request("Invalid multipart data")
}

/// GET /api/files - List stored files.
pub async fn list_files(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<Vec<FileEntryResponse>>>, ApiError> {
    let files = state
        .stored_names()?
        .into_iter()
        .map(FileEntryResponse::new)
        .collect();

    Ok(Json(ApiResponse::new(files)))
}

/// GET /files/:filename - Download a stored file.
pub async fn serve_file(
    State(state): State<Arc<AppState>>,
    Path(filename): Path<String>,
) -> Result<Response<Body>, ApiError> {
    if is_nested_name(&filename) {
        return Err(ApiError::not_found(format!(
            "could not read file: {filename}"
        )));
    }

    let file = state.storage.load_as_resource(&filename)?;
    let content = file.read_async().await?;

    let content_type = mime_guess::from_path(file.path())
        .first_or_octet_stream()
        .to_string();

    let response = Response::builder()
        .header(header::CONTENT_TYPE, content_type)
        .header(
            header::CONTENT_DISPOSITION,
            content_disposition_header(file.filename().unwrap_or(&filename)),
        )
        .header(header::CONTENT_LENGTH, content.len())
        .body(Body::from(content))
        .map_err(|e| {
            tracing::error!("Failed to build response: {}", e);
            ApiError::internal("Failed to build response")
        })?;

    Ok(response)
}

/// POST / - Upload a file.
///
/// Request body: multipart/form-data with a "file" field. Redirects back to
/// the upload page with a confirmation message.
pub async fn upload_file(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<Redirect, ApiError> {
    let mut filename: Option<String> = None;
    let mut content: Option<Vec<u8>> = None;

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        if field.name() != Some("file") {
            continue;
        }

        filename = Some(field.file_name().unwrap_or_default().to_string());
        content = Some(field.bytes().await.map_err(multipart_error)?.to_vec());
    }

    let (filename, content) = filename
        .zip(content)
        .ok_or_else(|| ApiError::bad_request("No file provided"))?;

    state.storage.store(&filename, &content)?;

    let message = format!("You successfully uploaded {filename}!");
    Ok(Redirect::to(&format!(
        "/?message={}",
        urlencoding::encode(&message)
    )))
}
