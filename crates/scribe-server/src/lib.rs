//! HTTP front end for the Scribe message agent and article generator.
//!
//! Exposes `POST /agent` and `POST /article-agent` under `/api/v1`,
//! `/api/latest` and `/api`, plus health, service metadata, the OpenAPI
//! document and Prometheus metrics.
pub mod cors;
pub mod error;
pub mod logging;
pub mod routes;
pub mod settings;
pub mod state;
pub mod telemetry;

use axum::{Router, middleware};
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::cors::CorsLayer;

use crate::state::AppState;

/// Assembles the full service: API routes, `/metrics`, request metrics and
/// CORS.
pub fn app(state: AppState, metrics: PrometheusHandle, cors: CorsLayer) -> Router {
    routes::configure(state)
        .merge(telemetry::routes(metrics))
        .layer(middleware::from_fn(telemetry::track_requests))
        .layer(cors)
}
