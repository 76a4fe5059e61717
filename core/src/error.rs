//! Error types for the todo domain.
//!
//! # Design
//! Validation failures are the client's fault and carry a message meant to
//! be shown verbatim. Repository failures indicate a caller bug (a stale or
//! bogus index) and are reported instead of panicking.

use thiserror::Error;

/// A `name` that does not satisfy the required/length constraint.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The name was absent, `null` or empty.
    #[error("name is required")]
    MissingName,

    /// The name has fewer than `min` or more than `max` characters.
    #[error("name must be between {min} and {max} characters, got {actual}")]
    NameLength {
        min: usize,
        max: usize,
        actual: usize,
    },
}

/// Errors returned by index-based `TodoRepository` operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    #[error("index {index} out of range for collection of {len} todos")]
    IndexOutOfRange { index: usize, len: usize },
}
