use std::sync::Arc;

use anyhow::Result;
use server::fetcher::RateFetcher;
use server::handler::{app, AppState};
use shared::{RateStore, ServerConfig, SqliteRateStore};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let config = ServerConfig::from_env()?;

    let fetcher = RateFetcher::new(config.upstream_url.clone(), config.fetch_timeout);
    let store: Arc<dyn RateStore> = Arc::new(SqliteRateStore::new(
        &config.database_path,
        config.persist_timeout,
    ));
    let state = AppState { fetcher, store };

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    info!("Server running on {}", config.bind_addr);

    axum::serve(listener, app(state)).await?;

    Ok(())
}
