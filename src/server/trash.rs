use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::server::AppState;
use crate::server::response::{ApiError, ApiResponse, CoreResultExt};

pub async fn list_trash(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let trash = state.catalog.trash().api_err("Trash")?;
    Ok::<_, ApiError>(Json(ApiResponse::success(trash)))
}

pub async fn restore_folder(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> impl IntoResponse {
    state.hierarchy.restore_folder(id).api_err("Folder")?;
    let folder = state.hierarchy.folder(id).api_err("Folder")?;
    Ok::<_, ApiError>(Json(ApiResponse::success(folder)))
}

pub async fn restore_bookmark(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> impl IntoResponse {
    state.hierarchy.restore_bookmark(id).api_err("Bookmark")?;
    let bookmark = state.hierarchy.bookmark(id).api_err("Bookmark")?;
    Ok::<_, ApiError>(Json(ApiResponse::success(bookmark)))
}

pub async fn purge_folder(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> impl IntoResponse {
    state.hierarchy.purge_folder(id).api_err("Trashed folder")?;
    Ok::<_, ApiError>(StatusCode::NO_CONTENT)
}

pub async fn purge_bookmark(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> impl IntoResponse {
    state
        .hierarchy
        .purge_bookmark(id)
        .api_err("Trashed bookmark")?;
    Ok::<_, ApiError>(StatusCode::NO_CONTENT)
}

pub async fn empty_trash(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let purged = state.hierarchy.empty_trash().api_err("Trash")?;
    Ok::<_, ApiError>(Json(ApiResponse::success(purged)))
}
