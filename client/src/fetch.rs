use std::path::Path;

use reqwest::Client;
use shared::{BidResponse, ClientConfig, RateError};

/// One bounded round trip: GET the server's quote endpoint, check the
/// status, decode the bid. The whole chain runs under the client's single
/// deadline; there is no separate budget per step.
pub async fn fetch_bid(config: &ClientConfig) -> Result<String, RateError> {
    match tokio::time::timeout(config.request_timeout, request_bid(config)).await {
        Ok(result) => result,
        Err(_) => Err(RateError::DeadlineExceeded(config.request_timeout)),
    }
}

async fn request_bid(config: &ClientConfig) -> Result<String, RateError> {
    let client = Client::new();
    let request = client
        .get(&config.server_url)
        .build()
        .map_err(RateError::RequestConstruction)?;

    let response = client
        .execute(request)
        .await
        .map_err(RateError::Transport)?;

    let status = response.status();
    if !status.is_success() {
        return Err(RateError::UpstreamStatus(status));
    }

    let body = response.text().await.map_err(RateError::Transport)?;
    let decoded: BidResponse = serde_json::from_str(&body).map_err(RateError::Decode)?;
    Ok(decoded.bid)
}

/// Whole-file write, truncating any previous run's content. No trailing
/// newline; the file holds exactly the template.
pub fn write_quote_file(path: impl AsRef<Path>, bid: &str) -> std::io::Result<()> {
    std::fs::write(path, format!("Dólar: {}", bid))
}
