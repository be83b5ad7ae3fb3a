use std::sync::Arc;

use axum::{
    Json,
    extract::{Query, State},
    response::IntoResponse,
};

use crate::server::AppState;
use crate::server::dto::SearchParams;
use crate::server::response::{ApiError, ApiResponse, CoreResultExt};

pub async fn tree(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let tree = state.catalog.active_tree().api_err("Tree")?;
    Ok::<_, ApiError>(Json(ApiResponse::success(tree)))
}

pub async fn search(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> impl IntoResponse {
    let bookmarks = state.catalog.search(&params.q).api_err("Bookmark")?;
    Ok::<_, ApiError>(Json(ApiResponse::success(bookmarks)))
}
