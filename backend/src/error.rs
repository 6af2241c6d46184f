//! API error type and its JSON body.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;
use thiserror::Error;

/// Failure returned by a handler; rendered as [`ErrorResponse`].
#[derive(Debug, Error)]
pub enum ApiError {
    /// No forwarded identity (401).
    #[error("no active session")]
    Unauthorized { login_url: String },
    /// Unknown order id (404).
    #[error("order `{0}` not found")]
    NotFound(String),
    /// Unparseable or unsupported query parameters (400).
    #[error("{0}")]
    BadRequest(String),
}

/// JSON error body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable message.
    pub error: String,
    /// HTTP status code.
    pub code: u16,
    /// Set on 401 responses.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub login_url: Option<String>,
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_client_error() {
            tracing::debug!(status = status.as_u16(), "{self}");
        }
        let login_url = match &self {
            ApiError::Unauthorized { login_url } => Some(login_url.clone()),
            _ => None,
        };
        let body = ErrorResponse {
            error: self.to_string(),
            code: status.as_u16(),
            login_url,
        };
        (status, Json(body)).into_response()
    }
}
