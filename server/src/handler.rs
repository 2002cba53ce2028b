use std::sync::Arc;

use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use shared::{BidResponse, RateError, RateStore};
use tower_http::trace::TraceLayer;
use tracing::error;

use crate::fetcher::RateFetcher;

#[derive(Clone)]
pub struct AppState {
    pub fetcher: RateFetcher,
    pub store: Arc<dyn RateStore>,
}

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/cotacao", get(exchange_rate_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Fetch, persist, respond. Each step either advances the chain or ends the
/// request with a 500; there are no retries and no partial responses.
pub async fn exchange_rate_handler(State(state): State<AppState>) -> Response {
    let rate = match state.fetcher.fetch().await {
        Ok(rate) => rate,
        Err(err) => {
            error!("Error fetching dollar rate: {}", err);
            return failure("Failed to fetch dollar rate");
        }
    };

    // The persist deadline starts fresh here, independent of whatever the
    // fetch left of the request's budget.
    if let Err(err) = state.store.save_rate(&rate.usdbrl.bid).await {
        error!("Error saving rate to database: {}", err);
        return failure("Failed to save rate to database");
    }

    let payload = BidResponse {
        bid: rate.usdbrl.bid,
    };
    match serde_json::to_vec(&payload).map_err(RateError::Encode) {
        Ok(body) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            body,
        )
            .into_response(),
        Err(err) => {
            error!("Error encoding response: {}", err);
            failure("Failed to encode response")
        }
    }
}

/// Generic failure status; the cause goes to the log, never to the body.
fn failure(message: &'static str) -> Response {
    (StatusCode::INTERNAL_SERVER_ERROR, message).into_response()
}
