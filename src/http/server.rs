//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers
//! - Wire up middleware (tracing, request ID, timeout, body limit)
//! - Serve static assets and the root redirect
//! - Bind server to listener, drain in-flight requests on shutdown
//! - Record per-request metrics

use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::extract::{MatchedPath, Request};
use axum::http::header::{HeaderValue, CACHE_CONTROL};
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::routing::{delete, get, post};
use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::{
    limit::RequestBodyLimitLayer,
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    services::ServeDir,
    set_header::SetResponseHeaderLayer,
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::AppConfig;
use crate::http::handlers;
use crate::http::request::{UuidRequestId, X_REQUEST_ID};
use crate::observability::metrics;
use crate::registry::ActivityRegistry;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<ActivityRegistry>,
}

/// HTTP server for the activities API.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server around an already-seeded registry.
    ///
    /// The registry is passed in rather than built here so the dependency is
    /// explicit and tests can construct their own.
    pub fn new(config: &AppConfig, registry: Arc<ActivityRegistry>) -> Self {
        let state = AppState { registry };
        let router = Self::build_router(config, state);
        Self { router }
    }

    /// Build the Axum router with all routes and middleware layers.
    fn build_router(config: &AppConfig, state: AppState) -> Router {
        // Static assets are served as-is; no-cache keeps the signup page
        // roster fresh after mutations.
        let static_assets = ServiceBuilder::new()
            .layer(SetResponseHeaderLayer::if_not_present(
                CACHE_CONTROL,
                HeaderValue::from_static("no-cache"),
            ))
            .service(ServeDir::new(&config.static_assets.dir));

        Router::new()
            .route("/", get(handlers::root))
            .route("/activities", get(handlers::list_activities))
            .route("/activities/{name}", get(handlers::get_activity))
            .route("/activities/{name}/signup", post(handlers::signup))
            .route("/activities/{name}/unregister", delete(handlers::unregister))
            .nest_service("/static", static_assets)
            // route_layer so the matched route template is already in the
            // request extensions when metrics are recorded
            .route_layer(middleware::from_fn(track_requests))
            .with_state(state)
            .layer(
                // Request flows top-down: ID first so tracing sees it.
                ServiceBuilder::new()
                    .layer(SetRequestIdLayer::x_request_id(UuidRequestId))
                    .layer(TraceLayer::new_for_http())
                    .layer(RequestBodyLimitLayer::new(config.security.max_body_size))
                    .layer(TimeoutLayer::new(Duration::from_secs(
                        config.timeouts.request_secs,
                    )))
                    .layer(PropagateRequestIdLayer::x_request_id()),
            )
    }

    /// Run the server until the shutdown signal fires.
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
}

/// Record request count and latency per method, route template, and status.
///
/// Uses the matched route template (not the raw path) so activity names do
/// not explode metric label cardinality.
async fn track_requests(request: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().to_string();
    let route = request
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_string())
        .unwrap_or_else(|| "unmatched".to_string());

    let request_id = request
        .headers()
        .get(X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown")
        .to_string();

    let response = next.run(request).await;
    let status = response.status().as_u16();

    tracing::debug!(
        request_id = %request_id,
        method = %method,
        route = %route,
        status,
        "Request completed"
    );
    metrics::record_request(&method, &route, status, start);

    response
}
