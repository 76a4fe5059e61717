//! Domain DTOs for the todo API.
//!
//! # Design
//! `Todo` is both the stored record and the wire representation. Incoming
//! bodies decode into `TodoInput`, which has no `id` field: anything the
//! client sends under `id` is dropped by serde, so ids stay server-assigned.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ValidationError;
use crate::validation::validate_name;

/// A single todo item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: String,
    pub name: String,
}

impl Todo {
    /// Create a todo with a freshly generated id.
    pub fn new(name: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name,
        }
    }
}

/// Request payload for creating or renaming a todo.
///
/// `name` is optional at the decoding level so that a missing name surfaces
/// as a validation error with a readable message rather than a serde error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TodoInput {
    #[serde(default)]
    pub name: Option<String>,
}

impl TodoInput {
    /// Validate the payload and return the owned name.
    pub fn into_name(self) -> Result<String, ValidationError> {
        validate_name(self.name.as_deref()).map(str::to_owned)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn todo_serializes_to_json() {
        let todo = Todo {
            id: "abc".to_string(),
            name: "Test".to_string(),
        };
        let json = serde_json::to_value(&todo).unwrap();
        assert_eq!(json, serde_json::json!({"id": "abc", "name": "Test"}));
    }

    #[test]
    fn new_todos_get_distinct_ids() {
        let a = Todo::new("first".to_string());
        let b = Todo::new("second".to_string());
        assert!(!a.id.is_empty());
        assert_ne!(a.id, b.id);
        assert!(Uuid::parse_str(&a.id).is_ok());
    }

    #[test]
    fn input_ignores_client_supplied_id() {
        let input: TodoInput =
            serde_json::from_str(r#"{"id":"client-id","name":"Buy milk"}"#).unwrap();
        assert_eq!(input.into_name().unwrap(), "Buy milk");
    }

    #[test]
    fn input_accepts_missing_and_null_name() {
        let missing: TodoInput = serde_json::from_str("{}").unwrap();
        assert!(missing.name.is_none());
        let null: TodoInput = serde_json::from_str(r#"{"name":null}"#).unwrap();
        assert!(null.name.is_none());
    }

    #[test]
    fn input_rejects_non_string_name() {
        let result: Result<TodoInput, _> = serde_json::from_str(r#"{"name":42}"#);
        assert!(result.is_err());
    }

    #[test]
    fn into_name_reports_missing_name() {
        let err = TodoInput::default().into_name().unwrap_err();
        assert_eq!(err, ValidationError::MissingName);
    }
}
