//! HTTP server setup and request handlers.
//!
//! # Responsibilities
//! - Create the Axum router with all routes
//! - Wire up middleware (request ID, tracing, timeout, server header)
//! - Dispatch path parameters to the email core
//! - Serve requests until shutdown is triggered
//!
//! # Design Decisions
//! - Handlers are stateless; the email core is pure, so no shared state
//! - The listener is bound by the caller, which keeps tests on ephemeral ports
//! - Unmatched paths and methods keep the framework defaults (404/405)

use std::time::{Duration, Instant};

use axum::{
    extract::Path,
    http::{header, HeaderValue},
    routing::get,
    Json, Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    set_header::SetResponseHeaderLayer,
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::ServerConfig;
use crate::email;
use crate::http::request::{request_span, MakeRequestUuid, X_REQUEST_ID};
use crate::http::response::{FormatResponse, ValidationResponse};
use crate::observability::metrics;

/// Body served on `GET /`.
pub const ROOT_GREETING: &str = "My Server is working!";

/// HTTP server for the email service.
pub struct HttpServer {
    router: Router,
    config: ServerConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: ServerConfig) -> Self {
        let router = Self::build_router(&config);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &ServerConfig) -> Router {
        let middleware = ServiceBuilder::new()
            .layer(SetRequestIdLayer::new(X_REQUEST_ID, MakeRequestUuid))
            .layer(TraceLayer::new_for_http().make_span_with(request_span))
            .layer(PropagateRequestIdLayer::new(X_REQUEST_ID))
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.timeouts.request_secs,
            )))
            .layer(SetResponseHeaderLayer::if_not_present(
                header::SERVER,
                HeaderValue::from_static(concat!("seneca-mail/", env!("CARGO_PKG_VERSION"))),
            ));

        Router::new()
            .route("/", get(root))
            .route("/validate/{email}", get(validate_email))
            .route("/format/{name}", get(format_name))
            .layer(middleware)
    }

    /// Run the server on the given listener until `shutdown` fires.
    ///
    /// A closed shutdown channel counts as a trigger, so dropping the
    /// coordinator also stops the server.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }
}

/// `GET /`: fixed acknowledgement, unrelated to the email core.
async fn root() -> &'static str {
    metrics::record_request("root", Instant::now());
    ROOT_GREETING
}

/// `GET /validate/{email}`: report whether the candidate is a Seneca address.
async fn validate_email(Path(email): Path<String>) -> Json<ValidationResponse> {
    let start = Instant::now();
    let valid = email::is_valid_email(&email);

    tracing::debug!(
        email = %email,
        valid,
        "Validated email candidate"
    );

    metrics::record_request("validate", start);
    Json(ValidationResponse { email, valid })
}

/// `GET /format/{name}`: build the Seneca address for `name`.
async fn format_name(Path(name): Path<String>) -> Json<FormatResponse> {
    let start = Instant::now();
    let formatted = email::format_email(&name);

    tracing::debug!(
        name = %name,
        email = %formatted,
        "Formatted email address"
    );

    metrics::record_request("format", start);
    Json(FormatResponse {
        name,
        email: formatted,
    })
}
