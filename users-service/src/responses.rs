//! Success response envelope
//!
//! Every successful users endpoint answers with
//! `{ "success": true, "count"?, "message"?, "data"? }`. Failures are
//! rendered by [`crate::error::Error`] with `success: false`.
//!
//! ```rust,ignore
//! async fn create_user() -> ApiResponse<User> {
//!     ApiResponse::created(user)
//!         .with_message("User created successfully")
//!         .with_location("/api/users/3")
//! }
//! ```

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// Envelope body
#[derive(Debug, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

/// Successful API response with status code and optional `Location` header
#[derive(Debug)]
pub struct ApiResponse<T> {
    status: StatusCode,
    location: Option<String>,
    body: Envelope<T>,
}

impl<T> ApiResponse<T> {
    fn with_status(status: StatusCode, data: Option<T>) -> Self {
        Self {
            status,
            location: None,
            body: Envelope {
                success: true,
                count: None,
                message: None,
                data,
            },
        }
    }

    /// 200 OK carrying `data`
    pub fn ok(data: T) -> Self {
        Self::with_status(StatusCode::OK, Some(data))
    }

    /// 201 Created carrying `data`
    pub fn created(data: T) -> Self {
        Self::with_status(StatusCode::CREATED, Some(data))
    }

    /// Attach a human-readable message
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.body.message = Some(message.into());
        self
    }

    /// Attach a Location header pointing to the resource
    #[must_use]
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }
}

impl<T> ApiResponse<Vec<T>> {
    /// 200 OK carrying a list and its length
    pub fn list(items: Vec<T>) -> Self {
        let count = items.len();
        let mut response = Self::ok(items);
        response.body.count = Some(count);
        response
    }
}

impl ApiResponse<()> {
    /// 200 OK with only a message and no `data` field
    pub fn message(message: impl Into<String>) -> Self {
        Self::with_status(StatusCode::OK, None).with_message(message)
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        let mut response = (self.status, Json(&self.body)).into_response();

        if let Some(location) = self.location {
            if let Ok(header_value) = HeaderValue::from_str(&location) {
                response.headers_mut().insert(header::LOCATION, header_value);
            }
        }

        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_list_includes_count() {
        let response = ApiResponse::list(vec!["a", "b"]).into_response();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["count"], 2);
        assert_eq!(body["data"], serde_json::json!(["a", "b"]));
        assert!(body.get("message").is_none());
    }

    #[tokio::test]
    async fn test_created_with_location() {
        let response = ApiResponse::created(7)
            .with_message("made")
            .with_location("/api/users/7")
            .into_response();
        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(response.headers()[header::LOCATION], "/api/users/7");

        let body = body_json(response).await;
        assert_eq!(body["message"], "made");
        assert_eq!(body["data"], 7);
    }

    #[tokio::test]
    async fn test_message_only_omits_data() {
        let response = ApiResponse::message("User deleted").into_response();
        let body = body_json(response).await;

        assert_eq!(body["success"], true);
        assert_eq!(body["message"], "User deleted");
        assert!(body.get("data").is_none());
    }
}
