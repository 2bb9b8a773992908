//! Static file serving handlers.

use std::borrow::Cow;
use std::path::Path;

use axum::{
    extract::{Request, State},
    http::{header, HeaderValue, StatusCode, Uri},
    middleware::Next,
    response::{Html, IntoResponse, Response},
};

use super::super::templates::{self, ListingEntry};
use super::super::AppState;
use crate::utils::javascript_override;

/// Pin the content type of successful `.js`/`.mjs` responses.
pub async fn javascript_content_type(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = decode_path(request.uri().path()).into_owned();

    let mut response = next.run(request).await;
    tracing::debug!("{} {} -> {}", method, path, response.status());

    if response.status().is_success() {
        if let Some(mime) = javascript_override(&path) {
            response
                .headers_mut()
                .insert(header::CONTENT_TYPE, HeaderValue::from_static(mime));
        }
    }

    response
}

/// List a directory that has no `index.html`.
///
/// Reached only after the file service found nothing to serve, so anything
/// that is not a directory under the root is a plain 404.
pub async fn directory_listing(State(state): State<AppState>, uri: Uri) -> Response {
    let request_path = decode_path(uri.path());
    let relative = request_path.trim_start_matches('/');

    if relative.split('/').any(|segment| segment == "..") {
        return not_found();
    }

    let canonical_root = match state.root.canonicalize() {
        Ok(p) => p,
        Err(_) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Server configuration error",
            )
                .into_response();
        }
    };

    let canonical_dir = match canonical_root.join(relative).canonicalize() {
        Ok(p) => p,
        Err(_) => return not_found(),
    };

    if !canonical_dir.starts_with(&canonical_root) || !canonical_dir.is_dir() {
        return not_found();
    }

    if !request_path.ends_with('/') {
        let location = format!("{}/", uri.path());
        return (StatusCode::MOVED_PERMANENTLY, [(header::LOCATION, location)]).into_response();
    }

    match read_entries(&canonical_dir).await {
        Ok(entries) => Html(templates::directory_listing(&request_path, &entries)).into_response(),
        Err(e) => {
            tracing::warn!("Failed to list {}: {}", canonical_dir.display(), e);
            (StatusCode::NOT_FOUND, "No permission to list directory").into_response()
        }
    }
}

fn not_found() -> Response {
    (StatusCode::NOT_FOUND, "File not found").into_response()
}

fn decode_path(path: &str) -> Cow<'_, str> {
    urlencoding::decode(path).unwrap_or(Cow::Borrowed(path))
}

/// Read directory entries sorted case-insensitively by name.
async fn read_entries(dir: &Path) -> std::io::Result<Vec<ListingEntry>> {
    let mut entries = Vec::new();
    let mut read_dir = tokio::fs::read_dir(dir).await?;

    while let Some(entry) = read_dir.next_entry().await? {
        let is_dir = entry.file_type().await.map(|t| t.is_dir()).unwrap_or(false);
        entries.push(ListingEntry {
            name: entry.file_name().to_string_lossy().into_owned(),
            is_dir,
        });
    }

    entries.sort_by_key(|e| e.name.to_lowercase());
    Ok(entries)
}
