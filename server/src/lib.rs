//! HTTP surface of the todo service.
//!
//! # Overview
//! An axum `Router` over a single in-memory `TodoRepository`. The collection
//! lives only as long as the process.
//!
//! # Design
//! - The repository is injected as router state (`Db`), so each `app()` call
//!   gets an isolated store and tests never share data.
//! - A tokio `RwLock` guards every repository call; mutating handlers hold
//!   the write guard across lookup and mutation.
//! - Item methods (`PATCH`, `DELETE`) without an id segment answer 400, as
//!   does `GET /todos/`. Any other unsupported method on a `/todos` path
//!   gets a JSON 405 through the per-route method fallback.

pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod logging;
pub mod response;

use std::sync::Arc;

use axum::{routing::get, Router};
use tokio::{net::TcpListener, sync::RwLock};
use todo_core::TodoRepository;
use tower_http::trace::TraceLayer;

use handlers::{
    create_todo, delete_todo, get_todo, list_todos, method_not_allowed, missing_id, update_todo,
};

pub use config::Config;
pub use error::ApiError;
pub use response::ApiResponse;
pub use todo_core::Todo;

/// Shared handle to the repository.
pub type Db = Arc<RwLock<TodoRepository>>;

/// Router over a fresh, empty repository.
pub fn app() -> Router {
    router(Db::default())
}

/// Router over the given repository handle.
pub fn router(db: Db) -> Router {
    Router::new()
        .route(
            "/todos",
            get(list_todos)
                .post(create_todo)
                .patch(missing_id)
                .delete(missing_id)
                .fallback(method_not_allowed),
        )
        .route(
            "/todos/",
            get(missing_id)
                .patch(missing_id)
                .delete(missing_id)
                .fallback(method_not_allowed),
        )
        .route(
            "/todos/{id}",
            get(get_todo)
                .patch(update_todo)
                .delete(delete_todo)
                .fallback(method_not_allowed),
        )
        .route(
            "/todos/{id}/{*rest}",
            get(missing_id)
                .patch(missing_id)
                .delete(missing_id)
                .fallback(method_not_allowed),
        )
        .with_state(db)
        .layer(TraceLayer::new_for_http())
}

/// Serve `app()` on `listener` until Ctrl+C.
pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app())
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        // Without a signal handler the server can only be killed.
        tracing::error!(%error, "failed to install Ctrl+C handler");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
