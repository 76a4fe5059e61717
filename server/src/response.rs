//! Success responses for the todo API.
//!
//! # Design
//! Handlers pick one of a closed set of variants instead of building ad-hoc
//! JSON. Error responses are `ApiError`; everything else is `ApiResponse`.
//! Serialization happens here so a failure becomes a 500 instead of a panic.

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use todo_core::Todo;

use crate::error::ApiError;

#[derive(Debug)]
pub enum ApiResponse {
    /// `202 {"results": [...]}`
    Collection(Vec<Todo>),
    /// A bare todo object with the given status.
    Entity(StatusCode, Todo),
    /// `204` with an empty body.
    NoContent,
}

#[derive(Serialize)]
struct Results<'a> {
    results: &'a [Todo],
}

impl IntoResponse for ApiResponse {
    fn into_response(self) -> Response {
        match self {
            ApiResponse::Collection(todos) => {
                json_response(StatusCode::ACCEPTED, &Results { results: &todos })
            }
            ApiResponse::Entity(status, todo) => json_response(status, &todo),
            ApiResponse::NoContent => StatusCode::NO_CONTENT.into_response(),
        }
    }
}

fn json_response<T: Serialize>(status: StatusCode, body: &T) -> Response {
    match serde_json::to_vec(body) {
        Ok(bytes) => (
            status,
            [(
                header::CONTENT_TYPE,
                HeaderValue::from_static("application/json"),
            )],
            bytes,
        )
            .into_response(),
        Err(err) => ApiError::Serialization(err.to_string()).into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn todo() -> Todo {
        Todo {
            id: "id-1".to_string(),
            name: "Buy milk".to_string(),
        }
    }

    #[test]
    fn collection_is_202_json() {
        let resp = ApiResponse::Collection(vec![todo()]).into_response();
        assert_eq!(resp.status(), StatusCode::ACCEPTED);
        assert_eq!(
            resp.headers()[header::CONTENT_TYPE],
            HeaderValue::from_static("application/json")
        );
    }

    #[test]
    fn entity_keeps_status() {
        let resp = ApiResponse::Entity(StatusCode::OK, todo()).into_response();
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[test]
    fn no_content_has_no_content_type() {
        let resp = ApiResponse::NoContent.into_response();
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);
        assert!(resp.headers().get(header::CONTENT_TYPE).is_none());
    }
}
