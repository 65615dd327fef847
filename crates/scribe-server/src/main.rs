use std::sync::Arc;

use scribe::provider::CompletionClient;
use scribe_server::{
    cors, logging,
    settings::Settings,
    state::{self, AppState},
    telemetry,
};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let settings = Settings::new()?;

    // Initialize tracing for logging
    logging::init(&settings.log)?;
    info!(provider = ?settings.provider, "configuration loaded");

    let metrics = telemetry::install()?;

    let client: Arc<dyn CompletionClient> = Arc::new(state::provider(&settings.provider)?);
    let state = AppState::new(&settings, client)?;
    let cors = cors::layer(&settings.cors)?;

    let app = scribe_server::app(state, metrics, cors);

    let listener = tokio::net::TcpListener::bind(settings.server.socket_addr()?).await?;
    info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
