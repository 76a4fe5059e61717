//! Domain core for the todo service.
//!
//! # Overview
//! Holds the `Todo` entity, the request payload, name validation and the
//! in-memory `TodoRepository`. Nothing here touches the network or an async
//! runtime; the server crate wraps the repository in a lock and drives it
//! from HTTP handlers.
//!
//! # Design
//! - `TodoRepository` is a plain owned value. Callers decide how it is
//!   shared, so tests get an isolated instance per case.
//! - Ids are server-assigned UUID v4 strings; clients never choose them.
//! - Errors are small `thiserror` enums so the HTTP layer can map each
//!   variant to a status code.

pub mod error;
pub mod repository;
pub mod types;
pub mod validation;

pub use error::{RepositoryError, ValidationError};
pub use repository::TodoRepository;
pub use types::{Todo, TodoInput};
pub use validation::{validate_name, NAME_MAX_CHARS, NAME_MIN_CHARS};
