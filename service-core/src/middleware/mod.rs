pub mod metrics;
pub mod tracing;

use axum::{Router, middleware::from_fn};
use tower_http::trace::TraceLayer;

/// Wraps a router in the shared middleware stack: request ids, HTTP metrics
/// and a tracing span per request.
pub fn with_common_layers(router: Router) -> Router {
    router
        .layer(from_fn(self::metrics::metrics_middleware))
        .layer(TraceLayer::new_for_http().make_span_with(self::tracing::request_span))
        .layer(from_fn(self::tracing::request_id_middleware))
}
