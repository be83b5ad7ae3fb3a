use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::json;

use crate::error::{Error, Result as CoreResult};

/// Standard API response wrapper
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    #[must_use]
    pub fn success(data: T) -> Self {
        Self {
            data: Some(data),
            error: None,
        }
    }
}

/// API error that converts to a proper HTTP response
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    #[must_use]
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn internal() -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: "Internal server error".to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = json!({ "data": null, "error": self.message });
        (self.status, Json(body)).into_response()
    }
}

/// Converts core results into API errors. Validation messages are passed
/// through, missing records name `entity`, and anything else is logged and
/// hidden behind a generic message.
pub trait CoreResultExt<T> {
    fn api_err(self, entity: &'static str) -> Result<T, ApiError>;
}

impl<T> CoreResultExt<T> for CoreResult<T> {
    fn api_err(self, entity: &'static str) -> Result<T, ApiError> {
        self.map_err(|err| match err {
            Error::Validation(message) => ApiError::bad_request(message),
            Error::NotFound => ApiError::not_found(format!("{entity} not found")),
            other => {
                tracing::error!(entity, error = %other, "request failed");
                ApiError::internal()
            }
        })
    }
}
