//! In-memory todo storage.
//!
//! # Design
//! A `Vec<Todo>` in insertion order. Lookups are linear scans by id, which
//! is fine at the sizes this service is meant for. Removal swaps the last
//! element into the vacated slot, so it is O(1) but does not preserve order.
//!
//! The repository has no interior locking. Whoever shares it across
//! requests must guard every call, reads included.

use crate::error::RepositoryError;
use crate::types::Todo;

/// Exclusive owner of the todo collection.
#[derive(Debug, Clone, Default)]
pub struct TodoRepository {
    todos: Vec<Todo>,
}

impl TodoRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn find_all(&self) -> &[Todo] {
        &self.todos
    }

    /// Position of the todo with the given id, if any.
    pub fn find_index(&self, id: &str) -> Option<usize> {
        self.todos.iter().position(|todo| todo.id == id)
    }

    pub fn find_one(&self, id: &str) -> Option<&Todo> {
        self.todos.iter().find(|todo| todo.id == id)
    }

    /// Append a todo. The caller guarantees its id is unique.
    pub fn create_one(&mut self, todo: Todo) {
        self.todos.push(todo);
    }

    /// Replace the todo at `index` wholesale.
    pub fn update_one(&mut self, index: usize, todo: Todo) -> Result<(), RepositoryError> {
        let len = self.todos.len();
        let slot = self
            .todos
            .get_mut(index)
            .ok_or(RepositoryError::IndexOutOfRange { index, len })?;
        *slot = todo;
        Ok(())
    }

    /// Replace the whole collection.
    pub fn update_all(&mut self, todos: Vec<Todo>) {
        self.todos = todos;
    }

    /// Remove the todo at `index`, moving the last todo into its place.
    pub fn remove_one(&mut self, index: usize) -> Result<Todo, RepositoryError> {
        if index >= self.todos.len() {
            return Err(RepositoryError::IndexOutOfRange {
                index,
                len: self.todos.len(),
            });
        }
        Ok(self.todos.swap_remove(index))
    }

    pub fn len(&self) -> usize {
        self.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }
}
