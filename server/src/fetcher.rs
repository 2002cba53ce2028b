use std::time::Duration;

use reqwest::Client;
use shared::{ExchangeRate, RateError};

/// Fetches the current USD-BRL quote from the upstream API under a fixed
/// deadline. One fetcher is shared across requests; reqwest's client is
/// internally pooled and cheap to clone.
#[derive(Clone)]
pub struct RateFetcher {
    http: Client,
    upstream_url: String,
    deadline: Duration,
}

impl RateFetcher {
    pub fn new(upstream_url: String, deadline: Duration) -> Self {
        Self {
            http: Client::new(),
            upstream_url,
            deadline,
        }
    }

    /// Issue the GET and decode the envelope, all under the fetch deadline.
    pub async fn fetch(&self) -> Result<ExchangeRate, RateError> {
        match tokio::time::timeout(self.deadline, self.request()).await {
            Ok(result) => result,
            Err(_) => Err(RateError::DeadlineExceeded(self.deadline)),
        }
    }

    async fn request(&self) -> Result<ExchangeRate, RateError> {
        let request = self
            .http
            .get(&self.upstream_url)
            .build()
            .map_err(RateError::RequestConstruction)?;

        let response = self
            .http
            .execute(request)
            .await
            .map_err(RateError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(RateError::UpstreamStatus(status));
        }

        let body = response.text().await.map_err(RateError::Transport)?;
        serde_json::from_str(&body).map_err(RateError::Decode)
    }
}
