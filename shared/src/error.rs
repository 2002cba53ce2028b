use std::time::Duration;

use thiserror::Error;

/// Failures along the fetch -> persist -> respond chain.
///
/// Deadline expiry is an ordinary error here: callers treat
/// `DeadlineExceeded` exactly like a transport or database failure (log it,
/// fail the request). Nothing retries.
#[derive(Debug, Error)]
pub enum RateError {
    #[error("failed to build request: {0}")]
    RequestConstruction(#[source] reqwest::Error),

    #[error("transport failure: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("upstream returned status {0}")]
    UpstreamStatus(reqwest::StatusCode),

    #[error("failed to decode payload: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("deadline of {0:?} exceeded")]
    DeadlineExceeded(Duration),

    #[error("persistence failure: {0}")]
    Persistence(#[from] sqlx::Error),

    #[error("failed to encode response: {0}")]
    Encode(#[source] serde_json::Error),
}
