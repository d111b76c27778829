//! Service metadata and catch-all handlers

use axum::{
    extract::State,
    http::{Method, Uri},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::{error::Error, repository::UserRepository, state::AppState};

/// Endpoint signatures advertised by the root route
pub const ENDPOINTS: &[&str] = &[
    "GET /api/health",
    "GET /api/users",
    "POST /api/users",
    "GET /api/users/:id",
    "PUT /api/users/:id",
    "DELETE /api/users/:id",
];

/// Root response
#[derive(Debug, Serialize, Deserialize)]
pub struct ServiceInfo {
    pub message: String,
    pub version: String,
    pub endpoints: Vec<String>,
}

/// Static service metadata
pub async fn service_info<R: UserRepository>(State(state): State<AppState<R>>) -> Json<ServiceInfo> {
    Json(ServiceInfo {
        message: "Users API".to_string(),
        version: state.config().service.version.clone(),
        endpoints: ENDPOINTS.iter().map(|e| e.to_string()).collect(),
    })
}

/// Fallback for unmatched routes and unsupported methods
pub async fn not_found(method: Method, uri: Uri) -> Error {
    tracing::debug!(%method, path = uri.path(), "No route matched");
    Error::NotFound(format!("Endpoint not found: {} {}", method, uri.path()))
}
