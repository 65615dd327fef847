use axum::{Json, Router, extract::State, routing::get};
use serde_json::{Value, json};

use crate::settings::AppSettings;
use crate::state::AppState;

async fn health_check() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

async fn service_info(State(state): State<AppState>) -> Json<AppSettings> {
    Json(state.info.as_ref().clone())
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_check))
        .route("/info", get(service_info))
}
