use axum::{
    Json, Router,
    extract::{Query, State},
    routing::post,
};
use scribe::generic::ResponseText;
use scribe::observe::preview;
use serde::Deserialize;
use tracing::info;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct MessageQuery {
    message: Option<String>,
}

#[utoipa::path(
    post,
    path = "/api/v1/agent",
    tag = "agent",
    params(
        ("message" = Option<String>, Query, description = "Text sent to the model")
    ),
    responses(
        (status = 200, description = "Model answer, passed through unchanged", body = ResponseText),
        (status = 400, description = "Message is missing or blank"),
        (status = 500, description = "Provider could not be reached")
    )
)]
pub async fn send_message(
    State(state): State<AppState>,
    Query(query): Query<MessageQuery>,
) -> Result<Json<ResponseText>, ApiError> {
    let message = query.message.unwrap_or_default();
    info!("Received message request: {}", preview(&message));

    let response = state.agent.send_message(&message).await?;
    info!("Agent response: {}", preview(&response.message));

    Ok(Json(response))
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/agent", post(send_message))
        .route("/agent/", post(send_message))
}
