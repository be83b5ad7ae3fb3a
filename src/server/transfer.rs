use std::sync::Arc;

use axum::{
    Json,
    extract::State,
    http::{HeaderMap, HeaderValue, StatusCode, header},
    response::IntoResponse,
};

use crate::codec::{CONTENT_TYPE, FILE_NAME, export_bookmarks, import_bookmarks};
use crate::server::AppState;
use crate::server::response::{ApiError, ApiResponse, CoreResultExt};

/// Accepts the raw bookmark file as the request body.
pub async fn import(State(state): State<Arc<AppState>>, body: String) -> impl IntoResponse {
    if body.trim().is_empty() {
        return Err(ApiError::bad_request("Bookmark file is empty"));
    }
    let summary = import_bookmarks(&state.hierarchy, &body).api_err("Folder")?;
    Ok::<_, ApiError>(Json(ApiResponse::success(summary)))
}

pub async fn export(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let document = export_bookmarks(&state.catalog).api_err("Bookmark")?;

    let mut headers = HeaderMap::new();
    headers.insert(header::CONTENT_TYPE, HeaderValue::from_static(CONTENT_TYPE));
    if let Ok(value) = HeaderValue::from_str(&format!("attachment; filename=\"{FILE_NAME}\"")) {
        headers.insert(header::CONTENT_DISPOSITION, value);
    }

    Ok::<_, ApiError>((StatusCode::OK, headers, document))
}
