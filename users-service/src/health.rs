//! Health check handler

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use chrono::SecondsFormat;
use serde::{Deserialize, Serialize};

use crate::{models::now, repository::UserRepository, state::AppState};

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always "OK" while the process can answer
    pub status: String,

    /// Current time, RFC 3339 with milliseconds
    pub timestamp: String,

    /// Seconds since startup
    pub uptime: f64,

    /// Service version
    pub version: String,
}

/// Liveness check
///
/// Always returns 200 OK if the service is running. There is no failure path.
pub async fn health<R: UserRepository>(State(state): State<AppState<R>>) -> impl IntoResponse {
    let response = HealthResponse {
        status: "OK".to_string(),
        timestamp: now().to_rfc3339_opts(SecondsFormat::Millis, true),
        uptime: state.uptime().as_secs_f64(),
        version: state.config().service.version.clone(),
    };

    (StatusCode::OK, Json(response))
}
