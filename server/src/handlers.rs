//! Request handlers for `/todos` and `/todos/{id}`.
//!
//! Each handler takes the shared repository, does its lookup and mutation
//! under a single lock guard, and returns an `ApiResponse` or an `ApiError`.

use axum::{extract::State, http::StatusCode};
use todo_core::{Todo, TodoInput};

use crate::error::ApiError;
use crate::extract::{JsonBody, TodoId};
use crate::response::ApiResponse;
use crate::Db;

pub async fn list_todos(State(db): State<Db>) -> ApiResponse {
    let repo = db.read().await;
    ApiResponse::Collection(repo.find_all().to_vec())
}

pub async fn get_todo(State(db): State<Db>, TodoId(id): TodoId) -> Result<ApiResponse, ApiError> {
    let repo = db.read().await;
    let todo = repo.find_one(&id).ok_or(ApiError::NoMatchedId)?;
    Ok(ApiResponse::Entity(StatusCode::ACCEPTED, todo.clone()))
}

pub async fn create_todo(
    State(db): State<Db>,
    JsonBody(input): JsonBody<TodoInput>,
) -> Result<ApiResponse, ApiError> {
    let todo = Todo::new(input.into_name()?);
    db.write().await.create_one(todo.clone());
    tracing::debug!(id = %todo.id, name_chars = todo.name.chars().count(), "todo created");
    Ok(ApiResponse::Entity(StatusCode::OK, todo))
}

pub async fn update_todo(
    State(db): State<Db>,
    TodoId(id): TodoId,
    JsonBody(input): JsonBody<TodoInput>,
) -> Result<ApiResponse, ApiError> {
    let name = input.into_name()?;

    let mut repo = db.write().await;
    let index = repo.find_index(&id).ok_or(ApiError::NoMatchedId)?;
    let updated = Todo { id, name };
    repo.update_one(index, updated.clone())?;

    tracing::debug!(id = %updated.id, "todo renamed");
    Ok(ApiResponse::Entity(StatusCode::OK, updated))
}

pub async fn delete_todo(
    State(db): State<Db>,
    TodoId(id): TodoId,
) -> Result<ApiResponse, ApiError> {
    let mut repo = db.write().await;
    let index = repo.find_index(&id).ok_or(ApiError::NoMatchedId)?;
    let removed = repo.remove_one(index)?;

    tracing::debug!(id = %removed.id, remaining = repo.len(), "todo deleted");
    Ok(ApiResponse::NoContent)
}

/// Item routes reached without a usable id segment.
pub async fn missing_id() -> ApiError {
    ApiError::MissingId
}

pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}
