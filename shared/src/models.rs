use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Envelope returned by the awesomeapi USD-BRL endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExchangeRate {
    #[serde(rename = "USDBRL")]
    pub usdbrl: Quote,
}

/// One quote as delivered upstream. Every field stays a string; parsing the
/// prices to floats would lose precision, and only `bid` travels downstream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quote {
    pub code: String,
    pub codein: String,
    pub name: String,
    pub high: String,
    pub low: String,
    #[serde(rename = "varBid")]
    pub var_bid: String,
    #[serde(rename = "pctChange")]
    pub pct_change: String,
    pub bid: String,
    pub ask: String,
    pub timestamp: String,
    pub create_date: String,
}

/// Body of the server's `/cotacao` response and the client's decode target.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BidResponse {
    pub bid: String,
}

/// One stored row in `exchange_rate`. Append-only.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PersistedRate {
    pub id: i64,
    pub rate: String,
    pub timestamp: NaiveDateTime,
}
