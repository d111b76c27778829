//! Security headers middleware
//!
//! Applies standard HTTP security headers using
//! `tower_http::set_header::SetResponseHeaderLayer`. Headers a handler has
//! already set are left untouched.

use axum::http::{header, HeaderName, HeaderValue};
use axum::Router;
use tower_http::set_header::SetResponseHeaderLayer;

use crate::config::SecurityHeadersConfig;

/// Apply security headers to the router based on configuration
pub fn apply_security_headers(mut app: Router, config: &SecurityHeadersConfig) -> Router {
    if !config.enabled {
        return app;
    }

    if config.x_content_type_options {
        app = app.layer(SetResponseHeaderLayer::if_not_present(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ));
    }

    if let Some(hv) = header_value(&config.x_frame_options) {
        app = app.layer(SetResponseHeaderLayer::if_not_present(
            header::X_FRAME_OPTIONS,
            hv,
        ));
    }

    // 0 disables the legacy browser XSS auditor
    if config.x_xss_protection {
        app = app.layer(SetResponseHeaderLayer::if_not_present(
            header::X_XSS_PROTECTION,
            HeaderValue::from_static("0"),
        ));
    }

    if let Some(hv) = header_value(&config.referrer_policy) {
        app = app.layer(SetResponseHeaderLayer::if_not_present(
            header::REFERRER_POLICY,
            hv,
        ));
    }

    if let Some(hv) = config.permissions_policy.as_deref().and_then(header_value) {
        app = app.layer(SetResponseHeaderLayer::if_not_present(
            HeaderName::from_static("permissions-policy"),
            hv,
        ));
    }

    app
}

/// Empty or invalid values disable the header
fn header_value(value: &str) -> Option<HeaderValue> {
    if value.is_empty() {
        return None;
    }
    match HeaderValue::from_str(value) {
        Ok(hv) => Some(hv),
        Err(_) => {
            tracing::warn!("Ignoring invalid security header value: {:?}", value);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request, routing::get};
    use tower::ServiceExt;

    async fn headers_for(config: &SecurityHeadersConfig) -> axum::http::HeaderMap {
        let app = apply_security_headers(Router::new().route("/", get(|| async { "ok" })), config);
        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        response.headers().clone()
    }

    #[tokio::test]
    async fn test_default_headers() {
        let headers = headers_for(&SecurityHeadersConfig::default()).await;
        assert_eq!(headers[header::X_CONTENT_TYPE_OPTIONS], "nosniff");
        assert_eq!(headers[header::X_FRAME_OPTIONS], "SAMEORIGIN");
        assert_eq!(headers[header::X_XSS_PROTECTION], "0");
        assert_eq!(headers[header::REFERRER_POLICY], "no-referrer");
        assert!(headers.get("permissions-policy").is_none());
    }

    #[tokio::test]
    async fn test_disabled() {
        let config = SecurityHeadersConfig {
            enabled: false,
            ..Default::default()
        };
        let headers = headers_for(&config).await;
        assert!(headers.get(header::X_CONTENT_TYPE_OPTIONS).is_none());
        assert!(headers.get(header::X_FRAME_OPTIONS).is_none());
    }

    #[tokio::test]
    async fn test_empty_value_skips_header() {
        let config = SecurityHeadersConfig {
            x_frame_options: String::new(),
            permissions_policy: Some("geolocation=()".to_string()),
            ..Default::default()
        };
        let headers = headers_for(&config).await;
        assert!(headers.get(header::X_FRAME_OPTIONS).is_none());
        assert_eq!(headers["permissions-policy"], "geolocation=()");
    }
}
