pub mod dto;
pub mod problem;
pub mod routes;
pub mod state;
pub mod trace;
pub mod validation;

use axum::Router;
use axum::middleware;

use crate::interface::http::state::AppState;

/// Build the full HTTP app: beer routes plus health, readiness, and metrics.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(routes::health::router())
        .merge(routes::ready::router())
        .merge(routes::metrics::router())
        .merge(routes::beer::router())
        // Layers run bottom-up, so the trace id is set before the request log reads it.
        .layer(middleware::from_fn(trace::request_log_middleware))
        .layer(middleware::from_fn(trace::trace_id_middleware))
        .with_state(state)
}
