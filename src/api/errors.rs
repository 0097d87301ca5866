use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct ErrorBody {
    status: u16,
    detail: String,
}

/// Handler-facing error type; every variant renders `{status, detail}`.
#[derive(Debug)]
pub(crate) enum ApiError {
    Forbidden(&'static str),
    BadRequest(String),
    NotFound(String),
    Conflict(String),
    Internal(String),
}

impl ApiError {
    /// Log the source error once, with context, and hand the caller an
    /// opaque `Internal`. The response path does not log again.
    pub(crate) fn internal(err: impl std::fmt::Display, context: &str) -> Self {
        tracing::error!(error = %err, "{context}");
        Self::Internal(context.to_string())
    }

    fn into_parts(self) -> (StatusCode, String) {
        match self {
            ApiError::Forbidden(detail) => (StatusCode::FORBIDDEN, detail.to_string()),
            ApiError::BadRequest(detail) => (StatusCode::BAD_REQUEST, detail),
            ApiError::NotFound(detail) => (StatusCode::NOT_FOUND, detail),
            ApiError::Conflict(detail) => (StatusCode::CONFLICT, detail),
            ApiError::Internal(detail) => (StatusCode::INTERNAL_SERVER_ERROR, detail),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = self.into_parts();
        (status, Json(ErrorBody { status: status.as_u16(), detail })).into_response()
    }
}
