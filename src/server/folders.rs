use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::server::AppState;
use crate::server::dto::{
    CreateFolderRequest, DeleteFolderResponse, ReorderRequest, UpdateFolderRequest,
};
use crate::server::response::{ApiError, ApiResponse, CoreResultExt};

pub async fn create_folder(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateFolderRequest>,
) -> impl IntoResponse {
    let folder = state
        .hierarchy
        .create_folder(&req.name, req.parent_id)
        .api_err("Folder")?;

    Ok::<_, ApiError>((StatusCode::CREATED, Json(ApiResponse::success(folder))))
}

pub async fn update_folder(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateFolderRequest>,
) -> impl IntoResponse {
    let folder = state
        .hierarchy
        .update_folder(id, req.into())
        .api_err("Folder")?;

    Ok::<_, ApiError>(Json(ApiResponse::success(folder)))
}

pub async fn delete_folder(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> impl IntoResponse {
    let folders = state.hierarchy.delete_folder(id).api_err("Folder")?;

    Ok::<_, ApiError>(Json(ApiResponse::success(DeleteFolderResponse {
        id,
        folders,
    })))
}

pub async fn reorder_folders(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ReorderRequest>,
) -> impl IntoResponse {
    state
        .hierarchy
        .reorder_folders(&req.ordered_ids)
        .api_err("Folder")?;

    Ok::<_, ApiError>(StatusCode::NO_CONTENT)
}
