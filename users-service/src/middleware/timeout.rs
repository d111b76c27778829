//! Request timeout
//!
//! A request that outlives the deadline is dropped and answered with the
//! standard JSON failure body and `408 Request Timeout`.

use std::time::Duration;

use axum::{
    extract::Request,
    middleware::{self, Next},
    response::IntoResponse,
    Router,
};

use crate::error::Error;

/// Wrap every route in `router` with a deadline of `timeout`
pub fn apply_request_timeout(router: Router, timeout: Duration) -> Router {
    router.layer(middleware::from_fn(move |req: Request, next: Next| async move {
        match tokio::time::timeout(timeout, next.run(req)).await {
            Ok(response) => response,
            Err(_) => Error::Timeout(timeout).into_response(),
        }
    }))
}
