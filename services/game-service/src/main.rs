use dotenv::dotenv;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod config;
mod handlers;
mod routes;
mod store;
mod types;

use crate::config::ServiceConfig;
use crate::routes::create_routes;
use crate::store::GameStore;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ServiceConfig::from_env()?;
    let game_store = if config.seed {
        GameStore::seeded()
    } else {
        GameStore::default()
    };
    info!(games = game_store.len(), "catalog store ready");

    let app = create_routes(store::shared(game_store));

    let listener = tokio::net::TcpListener::bind(&config.http_addr).await?;
    info!("HTTP API server listening on http://{}", config.http_addr);
    axum::serve(listener, app).await?;

    Ok(())
}
