// Export route modules
pub mod agent;
pub mod article;
pub mod health;
pub mod openapi;

use axum::Router;

use crate::state::AppState;

/// Routes of API version 1, relative to the mount point.
fn v1() -> Router<AppState> {
    Router::new()
        .merge(agent::routes())
        .merge(article::routes())
}

// Function to configure all routes
pub fn configure(state: AppState) -> Router {
    let api = Router::new()
        .nest("/v1", v1())
        .nest("/latest", v1())
        .merge(v1())
        .merge(health::routes());

    Router::new()
        .nest("/api", api)
        .merge(openapi::routes())
        .with_state(state)
}
