//! HTML upload page.

use axum::{
    extract::{Query, State},
    response::Html,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::web::dto::FileEntryResponse;
use crate::web::error::ApiError;
use crate::web::handlers::AppState;

/// Query parameters for the upload page.
#[derive(Debug, Default, Deserialize)]
pub struct IndexQuery {
    /// Confirmation message from a previous upload.
    pub message: Option<String>,
}

fn escape_html(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn render_index(message: Option<&str>, files: &[FileEntryResponse]) -> String {
    let mut html = String::from(
        "<!DOCTYPE html>\n<html>\n<head><meta charset=\"utf-8\"><title>Filedrop</title></head>\n<body>\n",
    );

    if let Some(message) = message.filter(|m| !m.is_empty()) {
        html.push_str(&format!("<h2>{}</h2>\n", escape_html(message)));
    }

    html.push_str(
        "<form method=\"POST\" enctype=\"multipart/form-data\" action=\"/\">\n\
         <label>File to upload: <input type=\"file\" name=\"file\"></label>\n\
         <input type=\"submit\" value=\"Upload\">\n\
         </form>\n",
    );

    html.push_str("<ul>\n");
    for file in files {
        html.push_str(&format!(
            "<li><a href=\"{}\">{}</a></li>\n",
            escape_html(&file.url),
            escape_html(&file.name)
        ));
    }
    html.push_str("</ul>\n</body>\n</html>\n");

    html
}

/// GET / - Upload form and list of stored files.
pub async fn index(
    State(state): State<Arc<AppState>>,
    Query(query): Query<IndexQuery>,
) -> Result<Html<String>, ApiError> {
    let files: Vec<FileEntryResponse> = state
        .stored_names()?
        .into_iter()
        .map(FileEntryResponse::new)
        .collect();

    Ok(Html(render_index(query.message.as_deref(), &files)))
}
