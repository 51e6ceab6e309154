use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;

use dutch_blitz::adapters::http::{build_router, GameAppState};
use dutch_blitz::adapters::InMemoryGameSessionStore;
use dutch_blitz::config::AppConfig;
use dutch_blitz::telemetry::init_tracing;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    init_tracing(&config.server);

    let store = Arc::new(InMemoryGameSessionStore::new());
    let state = GameAppState::new(store, config.game.default_score_limit);
    let app = build_router(state, &config.server);

    let addr = config.server.socket_addr()?;
    let listener = TcpListener::bind(addr).await?;
    info!(%addr, environment = ?config.server.environment, "Listening");

    axum::serve(listener, app).await?;
    Ok(())
}
