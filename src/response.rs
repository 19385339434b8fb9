use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::error::{AppError, FieldErrors, INTERNAL_ERROR_MESSAGE};

pub type ApiResult<T> = Result<ApiResponse<T>, AppError>;

/// A successful reply: `data` is serialized as the whole body.
#[derive(Debug)]
pub struct ApiResponse<T: Serialize> {
    pub status: StatusCode,
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn ok(data: T) -> ApiResult<T> {
        Self::with_status(StatusCode::OK, data)
    }

    pub fn created(data: T) -> ApiResult<T> {
        Self::with_status(StatusCode::CREATED, data)
    }

    pub fn with_status(status: StatusCode, data: T) -> ApiResult<T> {
        Ok(Self { status, data })
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        (self.status, Json(self.data)).into_response()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageBody {
    pub message: String,
}

impl MessageBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorBody {
    pub message: String,
    #[serde(skip_serializing_if = "FieldErrors::is_empty")]
    pub errors: FieldErrors,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            errors: FieldErrors::new(),
        }
    }
}

/// Maps an error to the status and body sent to the client. Internal details
/// never reach the body.
pub fn error_parts(err: &AppError) -> (StatusCode, ErrorBody) {
    match err {
        AppError::Validation { message, fields } => (
            StatusCode::BAD_REQUEST,
            ErrorBody {
                message: message.clone(),
                errors: fields.clone(),
            },
        ),
        AppError::NotFound(message) => (StatusCode::NOT_FOUND, ErrorBody::new(message.as_str())),
        AppError::Internal { .. } => (
            StatusCode::INTERNAL_SERVER_ERROR,
            ErrorBody::new(INTERNAL_ERROR_MESSAGE),
        ),
    }
}

pub fn log_app_error(err: &AppError, status: StatusCode) {
    if status.is_server_error() {
        tracing::error!(status = status.as_u16(), error = %err, "request failed");
    } else {
        tracing::debug!(status = status.as_u16(), error = %err, "request rejected");
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = error_parts(&self);
        log_app_error(&self, status);
        (status, Json(body)).into_response()
    }
}
