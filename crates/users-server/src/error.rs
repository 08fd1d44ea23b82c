use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use users_core::error::AppError;

use crate::dto::{ErrorResponse, MessageResponse, USER_NOT_FOUND};

/// Wrapper so we can implement `IntoResponse` for `AppError`.
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type) = match &self.0 {
            AppError::NotFound { .. } => {
                let body = MessageResponse::new(USER_NOT_FOUND);
                return (StatusCode::NOT_FOUND, axum::Json(body)).into_response();
            }
            AppError::StorageError(_) => (StatusCode::INTERNAL_SERVER_ERROR, "storage_error"),
            AppError::ConfigError(_) => (StatusCode::INTERNAL_SERVER_ERROR, "config_error"),
        };

        tracing::error!(error = %self.0, "Request failed");

        let body = ErrorResponse {
            error: error_type.to_string(),
            message: self.0.to_string(),
        };

        (status, axum::Json(body)).into_response()
    }
}
