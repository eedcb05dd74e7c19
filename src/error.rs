use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

/// I/O-level failures from a store adapter. "Not found" is never an
/// error at this level; adapters report it as `None` or a zero row count.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] libsql::Error),
    #[error("insert returned no row")]
    NoRowReturned,
}

/// A rejected request body: the offending field plus the message the
/// caller sees.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }

    pub fn required(field: &'static str) -> Self {
        Self::new(field, format!("'{field}' is required"))
    }
}

/// Everything a handler can fail with. `IntoResponse` below is the single
/// place errors become HTTP responses; handlers just propagate with `?`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("unauthorized request")]
    Unauthorized,
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("bookmark not found")]
    NotFound,
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            // Body shape differs from the rest on purpose: clients match
            // on the bare string.
            ApiError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                Json(json!({ "error": "Unauthorized request" })),
            )
                .into_response(),
            ApiError::Validation(err) => {
                tracing::error!(field = err.field, "{}", err.message);
                error_response(StatusCode::BAD_REQUEST, &err.message)
            }
            ApiError::NotFound => error_response(StatusCode::NOT_FOUND, "Bookmark Not Found"),
            ApiError::Store(err) => {
                tracing::error!(error = %crate::unpack_error(&err), "storage failure");
                error_response(StatusCode::INTERNAL_SERVER_ERROR, "server error")
            }
        }
    }
}

fn error_response(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "error": { "message": message } }))).into_response()
}
