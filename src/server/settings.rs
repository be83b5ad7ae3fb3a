use std::collections::BTreeMap;
use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};

use crate::server::AppState;
use crate::server::dto::PutSettingRequest;
use crate::server::response::{ApiError, ApiResponse, CoreResultExt};
use crate::settings::SECRET_KEY;

const MAX_KEY_LEN: usize = 64;
const MAX_VALUE_LEN: usize = 4096;

pub async fn list_settings(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let all = state.settings.all().api_err("Settings")?;
    let visible: BTreeMap<String, String> = all
        .iter()
        .filter(|(key, _)| key.as_str() != SECRET_KEY)
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect();

    Ok::<_, ApiError>(Json(ApiResponse::success(visible)))
}

pub async fn put_setting(
    State(state): State<Arc<AppState>>,
    Path(key): Path<String>,
    Json(req): Json<PutSettingRequest>,
) -> impl IntoResponse {
    if key == SECRET_KEY {
        return Err(ApiError::bad_request("This setting cannot be changed"));
    }
    if key.is_empty()
        || key.len() > MAX_KEY_LEN
        || !key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-' || c == '.')
    {
        return Err(ApiError::bad_request(
            "Setting key can only contain alphanumeric characters, hyphens, underscores, and periods",
        ));
    }
    if req.value.chars().count() > MAX_VALUE_LEN {
        return Err(ApiError::bad_request(format!(
            "Setting value cannot exceed {MAX_VALUE_LEN} characters"
        )));
    }

    state.settings.set(&key, &req.value).api_err("Setting")?;

    Ok::<_, ApiError>(Json(ApiResponse::success(BTreeMap::from([(
        key,
        req.value,
    )]))))
}
