use anyhow::Result;
use client::fetch;
use shared::ClientConfig;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let config = ClientConfig::from_env()?;

    let bid = match fetch::fetch_bid(&config).await {
        Ok(bid) => bid,
        Err(err) => {
            // The output file is left untouched on any failure.
            error!("Error fetching quote: {}", err);
            std::process::exit(1);
        }
    };

    if let Err(err) = fetch::write_quote_file(&config.output_path, &bid) {
        error!("Error writing to file: {}", err);
        std::process::exit(1);
    }

    info!("Cotação salva em '{}'", config.output_path);
    Ok(())
}
