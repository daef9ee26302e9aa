use std::path::Path;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use super::check_keys;
use super::health;
use super::middleware::{logging_middleware, metrics_middleware, security_headers_middleware};
use super::state::AppState;
use crate::infrastructure::observability::{create_metrics_router, PrometheusMetrics};

/// Create the API router with application state (no UI, no metrics endpoint)
pub fn create_router_with_state(state: AppState) -> Router {
    api_routes(state).layer(TraceLayer::new_for_http())
}

/// Create the full application router.
///
/// `static_dir` enables the browser UI: files are served for every path the
/// API does not handle, with `index.html` as fallback.
pub fn create_app_router(
    state: AppState,
    metrics: Option<PrometheusMetrics>,
    static_dir: Option<&str>,
) -> Router {
    let mut router = api_routes(state);

    if let Some(m) = metrics {
        router = router.merge(create_metrics_router(m));
    }

    if let Some(dir) = static_dir {
        let index = Path::new(dir).join("index.html");
        router = router.fallback_service(ServeDir::new(dir).fallback(ServeFile::new(index)));
    }

    router
        .layer(middleware::from_fn(logging_middleware))
        .layer(middleware::from_fn(metrics_middleware))
        .layer(TraceLayer::new_for_http())
}

fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/live", get(health::live_check))
        .route("/check-keys", post(check_keys::check_keys))
        .with_state(state)
        .layer(middleware::from_fn(security_headers_middleware))
}
