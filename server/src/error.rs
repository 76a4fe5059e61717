//! HTTP error type for the todo API.
//!
//! # Design
//! Every failure a handler can hit is a variant here, and each variant maps
//! to exactly one status code. The body is always `{"message": "..."}` using
//! the variant's `Display` text, so client-facing messages live in the
//! `#[error]` attributes.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use todo_core::{RepositoryError, ValidationError};

#[derive(Debug, Error)]
pub enum ApiError {
    /// The request body is not valid JSON for the expected payload.
    #[error("{0}")]
    MalformedBody(String),

    /// The request body exceeds the server's body size limit.
    #[error("{0}")]
    PayloadTooLarge(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("No matched ID!")]
    NoMatchedId,

    #[error("Missing ID or invalid path")]
    MissingId,

    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("failed to serialize response: {0}")]
    Serialization(String),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Wire shape of every error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub message: String,
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MalformedBody(_)
            | ApiError::Validation(_)
            | ApiError::NoMatchedId
            | ApiError::MissingId => StatusCode::BAD_REQUEST,
            ApiError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Serialization(_) | ApiError::Repository(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::debug!(status = status.as_u16(), error = %self, "request rejected");
        }

        let body = ErrorBody {
            message: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
