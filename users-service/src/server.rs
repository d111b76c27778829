//! HTTP server with middleware stack and graceful shutdown

use axum::{
    extract::DefaultBodyLimit,
    response::{IntoResponse, Response},
    Router,
};
use std::any::Any;
use std::future::Future;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::{
    catch_panic::CatchPanicLayer,
    compression::CompressionLayer,
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};

use crate::{
    config::Config,
    error::{Error, Result},
    middleware::{
        apply_request_timeout, apply_security_headers, request_id_layer,
        request_id_propagation_layer, sensitive_headers_layer,
    },
};

/// Server instance
pub struct Server {
    config: Config,
}

impl Server {
    /// Create a new server instance
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Wrap a router in the configured middleware stack
    ///
    /// Each `layer` call wraps everything added before it, so panic recovery
    /// sits closest to the handlers and CORS is the outermost layer.
    pub fn router(&self, app: Router) -> Router {
        let middleware = &self.config.middleware;

        let mut app = app;
        if middleware.catch_panic {
            app = app.layer(CatchPanicLayer::custom(handle_panic));
        }

        app = app.layer(DefaultBodyLimit::max(middleware.body_limit_bytes()));
        app = apply_request_timeout(app, self.config.service.timeout());

        if middleware.compression {
            app = app.layer(CompressionLayer::new());
        }

        app = apply_security_headers(app, &middleware.security_headers).layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().include_headers(true))
                .on_response(DefaultOnResponse::new().include_headers(true)),
        );

        app = app.layer(sensitive_headers_layer());
        if middleware.request_id {
            app = app
                .layer(request_id_propagation_layer())
                .layer(request_id_layer());
        }

        app.layer(self.build_cors_layer())
    }

    /// Bind the configured address and serve until SIGINT or SIGTERM
    pub async fn serve(self, app: Router) -> Result<()> {
        let addr = self.config.service.bind_addr();
        let listener = TcpListener::bind(addr).await?;

        self.serve_with_shutdown(listener, app, shutdown_signal())
            .await
    }

    /// Serve on an existing listener until `shutdown` resolves
    pub async fn serve_with_shutdown<F>(self, listener: TcpListener, app: Router, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr = listener.local_addr()?;
        tracing::info!("Starting {} on {}", self.config.service.name, addr);
        self.log_middleware_config();

        let app = self.router(app);

        tracing::info!("Server listening on {}", addr);
        tracing::info!("Health check: http://{}/api/health", addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown)
            .await?;

        tracing::info!("Server shutdown complete");

        Ok(())
    }

    /// Log middleware configuration for debugging
    fn log_middleware_config(&self) {
        let middleware = &self.config.middleware;
        tracing::info!("Middleware configuration:");
        tracing::info!("  - Panic recovery: {}", enabled(middleware.catch_panic));
        tracing::info!("  - Request ID tracking: {}", enabled(middleware.request_id));
        tracing::info!("  - Sensitive header masking: enabled");
        tracing::info!("  - Request body limit: {} MB", middleware.body_limit_mb);
        tracing::info!("  - Compression: {}", enabled(middleware.compression));
        tracing::info!("  - CORS mode: {}", middleware.cors_mode);
        tracing::info!(
            "  - Security headers: {}",
            enabled(middleware.security_headers.enabled)
        );
        tracing::info!(
            "  - Request timeout: {} seconds",
            self.config.service.timeout_secs
        );
    }

    /// Build CORS layer based on configuration
    fn build_cors_layer(&self) -> CorsLayer {
        match self.config.middleware.cors_mode.as_str() {
            "permissive" => {
                tracing::debug!("Enabling permissive CORS");
                CorsLayer::permissive()
            }
            "restrictive" | "disabled" => {
                tracing::debug!("Enabling restrictive CORS (default deny)");
                CorsLayer::new()
            }
            _ => {
                tracing::warn!(
                    "Unknown CORS mode: {}, defaulting to permissive",
                    self.config.middleware.cors_mode
                );
                CorsLayer::permissive()
            }
        }
    }
}

fn enabled(flag: bool) -> &'static str {
    if flag {
        "enabled"
    } else {
        "disabled"
    }
}

/// Turn a handler panic into the standard 500 response
fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };

    Error::Internal(format!("Handler panicked: {}", detail)).into_response()
}

/// Wait for shutdown signal (SIGTERM or SIGINT)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl+C), starting graceful shutdown");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        },
    }

    tracing::info!("Shutdown signal received, draining requests...");
}
