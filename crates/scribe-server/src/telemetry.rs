use std::time::Instant;

use axum::{
    Router,
    extract::{MatchedPath, Request, State},
    http::header,
    middleware::Next,
    response::{IntoResponse, Response},
    routing::get,
};
use metrics::{counter, gauge, histogram};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder, PrometheusHandle};

const UNMATCHED: &str = "unmatched";

/// Installs the global Prometheus recorder and returns the handle that
/// renders it.
pub fn install() -> Result<PrometheusHandle, BuildError> {
    PrometheusBuilder::new().install_recorder()
}

/// `GET /metrics` in the Prometheus text format.
pub fn routes(handle: PrometheusHandle) -> Router {
    Router::new()
        .route("/metrics", get(render))
        .with_state(handle)
}

async fn render(State(handle): State<PrometheusHandle>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        handle.render(),
    )
}

/// Request counter, in-progress gauge and latency histogram, labelled with
/// the route template rather than the raw path.
pub async fn track_requests(request: Request, next: Next) -> Response {
    let method = request.method().to_string();
    let handler = request
        .extensions()
        .get::<MatchedPath>()
        .map(|path| path.as_str().to_owned())
        .unwrap_or_else(|| UNMATCHED.to_owned());

    let in_progress = gauge!(
        "http_requests_inprogress",
        "method" => method.clone(),
        "handler" => handler.clone()
    );
    in_progress.increment(1.0);
    let start = Instant::now();

    let response = next.run(request).await;

    in_progress.decrement(1.0);
    histogram!(
        "http_request_duration_seconds",
        "method" => method.clone(),
        "handler" => handler.clone()
    )
    .record(start.elapsed().as_secs_f64());
    counter!(
        "http_requests_total",
        "method" => method,
        "handler" => handler,
        "status" => response.status().as_u16().to_string()
    )
    .increment(1);

    response
}
