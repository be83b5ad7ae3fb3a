use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::server::AppState;
use crate::server::dto::{CreateBookmarkRequest, ReorderRequest, UpdateBookmarkRequest};
use crate::server::response::{ApiError, ApiResponse, CoreResultExt};

pub async fn create_bookmark(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateBookmarkRequest>,
) -> impl IntoResponse {
    let bookmark = state
        .hierarchy
        .create_bookmark(req.into())
        .api_err("Bookmark")?;

    Ok::<_, ApiError>((StatusCode::CREATED, Json(ApiResponse::success(bookmark))))
}

pub async fn update_bookmark(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateBookmarkRequest>,
) -> impl IntoResponse {
    let bookmark = state
        .hierarchy
        .update_bookmark(id, req.into())
        .api_err("Bookmark")?;

    Ok::<_, ApiError>(Json(ApiResponse::success(bookmark)))
}

pub async fn delete_bookmark(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> impl IntoResponse {
    state.hierarchy.delete_bookmark(id).api_err("Bookmark")?;

    Ok::<_, ApiError>(StatusCode::NO_CONTENT)
}

pub async fn reorder_bookmarks(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ReorderRequest>,
) -> impl IntoResponse {
    state
        .hierarchy
        .reorder_bookmarks(&req.ordered_ids)
        .api_err("Bookmark")?;

    Ok::<_, ApiError>(StatusCode::NO_CONTENT)
}
