mod handlers;
mod page;

pub use handlers::AppState;

use crate::{Result, config::Config, llm::OpenAiClient, posts::PostGenerator};
use axum::{Router, routing::get};
use std::{net::SocketAddr, sync::Arc};
use tower_http::trace::TraceLayer;
use tracing::info;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::show_form).post(handlers::submit_form))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run(config: Config) -> Result<()> {
    // One client for the lifetime of the process, shared by every request
    let llm_client = OpenAiClient::new(config.llm.clone())?;
    info!("Using model {}", llm_client.model());

    let app_state = AppState::new(PostGenerator::new(Arc::new(llm_client)));
    let app = router(app_state);

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
