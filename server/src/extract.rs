//! Request extractors that reject with `ApiError`.
//!
//! axum's own `Json` insists on a JSON content type and answers data errors
//! with 422. The todo API decodes whatever body it is given and answers every
//! decoding failure with 400, so it uses these instead. A body over the
//! default size limit keeps its 413.

use axum::{
    body::Bytes,
    extract::{rejection::PathRejection, FromRequest, FromRequestParts, Path, Request},
    http::{request::Parts, StatusCode},
};
use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// JSON request body, decoded regardless of `Content-Type`.
#[derive(Debug)]
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| match rejection.status() {
                StatusCode::PAYLOAD_TOO_LARGE => ApiError::PayloadTooLarge(rejection.body_text()),
                _ => ApiError::MalformedBody(rejection.body_text()),
            })?;
        serde_json::from_slice(&bytes)
            .map(JsonBody)
            .map_err(|err| ApiError::MalformedBody(err.to_string()))
    }
}

/// The `{id}` segment of an item path. Empty or undecodable segments are
/// rejected with `ApiError::MissingId`.
#[derive(Debug)]
pub struct TodoId(pub String);

impl<S> FromRequestParts<S> for TodoId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|rejection: PathRejection| {
                tracing::debug!(error = %rejection, "rejected id segment");
                ApiError::MissingId
            })?;
        if id.is_empty() {
            return Err(ApiError::MissingId);
        }
        Ok(TodoId(id))
    }
}
