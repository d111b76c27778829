//! # users-service
//!
//! In-memory users CRUD service over HTTP with a health endpoint.
//!
//! ## Features
//!
//! - **Users resource**: list, fetch, create, update and delete under `/api/users`
//! - **Uniform envelopes**: every response carries a `success` flag
//! - **Middleware stack**: request tracking, panic recovery, body size limits, CORS, security headers
//! - **Configuration**: defaults, TOML files and `USERS_` environment variables via figment
//! - **Graceful shutdown**: SIGTERM and SIGINT drain in-flight requests
//!
//! ## Example
//!
//! ```rust,no_run
//! use users_service::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let config = Config::load()?;
//!     init_tracing(&config)?;
//!
//!     let state = AppState::in_memory(config.clone());
//!
//!     Server::new(config)
//!         .serve(router(state))
//!         .await?;
//!
//!     Ok(())
//! }
//! ```

use axum::{routing::get, Router};

pub mod config;
pub mod error;
pub mod handlers;
pub mod health;
pub mod ids;
pub mod middleware;
pub mod models;
pub mod observability;
pub mod repository;
pub mod responses;
pub mod server;
pub mod state;

use repository::UserRepository;
use state::AppState;

/// Build the users API router
///
/// Each route also answers with a trailing slash (`/api/users/`). Unknown
/// paths and unsupported methods on known paths both answer with the JSON
/// 404 body. Middleware is applied separately by [`server::Server::router`].
pub fn router<R: UserRepository>(state: AppState<R>) -> Router {
    let health = get(handlers::health::<R>);
    let users = get(handlers::list_users::<R>).post(handlers::create_user::<R>);
    let user = get(handlers::get_user::<R>)
        .put(handlers::update_user::<R>)
        .delete(handlers::delete_user::<R>);

    Router::new()
        .route("/", get(handlers::service_info::<R>))
        .route("/api/health", health.clone())
        .route("/api/health/", health)
        .route("/api/users", users.clone())
        .route("/api/users/", users)
        .route("/api/users/{id}", user.clone())
        .route("/api/users/{id}/", user)
        .fallback(handlers::not_found)
        .method_not_allowed_fallback(handlers::not_found)
        .with_state(state)
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::config::{Config, MiddlewareConfig, SecurityHeadersConfig, ServiceConfig};
    pub use crate::error::{Error, Result};
    pub use crate::health::{health, HealthResponse};
    pub use crate::ids::{MakeTypedRequestId, RequestId, RequestIdError};
    pub use crate::models::{CreateUserRequest, NewUser, UpdateUserRequest, User, UserChanges};
    pub use crate::observability::init_tracing;
    pub use crate::repository::{
        InMemoryUserRepository, RepositoryError, RepositoryErrorKind, RepositoryOperation,
        RepositoryResult, UserRepository,
    };
    pub use crate::responses::ApiResponse;
    pub use crate::router;
    pub use crate::server::Server;
    pub use crate::state::AppState;

    pub use axum::{
        extract::{Path, State},
        routing::{delete, get, post, put},
        Json, Router,
    };
    pub use tokio;
    pub use tracing::{debug, error, info, warn};
}
