use std::time::Duration;

use dotenv::dotenv;

pub const DEFAULT_UPSTREAM_URL: &str = "https://economia.awesomeapi.com.br/json/last/USD-BRL";
pub const DEFAULT_SERVER_URL: &str = "http://localhost:8080/cotacao";

/// Budget for the outbound call to the exchange-rate API.
pub const FETCH_TIMEOUT: Duration = Duration::from_millis(200);
/// Budget for the database write. Starts fresh per request, never chained to
/// the fetch. Deliberately aggressive; do not loosen.
pub const PERSIST_TIMEOUT: Duration = Duration::from_millis(10);
/// Client-side budget for the whole round trip. Tighter than the server's
/// combined internal budgets; the race is accepted.
pub const CLIENT_TIMEOUT: Duration = Duration::from_millis(300);

pub struct ServerConfig {
    pub upstream_url: String,
    pub database_path: String,
    pub bind_addr: String,
    pub fetch_timeout: Duration,
    pub persist_timeout: Duration,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenv().ok();

        Ok(ServerConfig {
            upstream_url: std::env::var("UPSTREAM_URL")
                .unwrap_or_else(|_| DEFAULT_UPSTREAM_URL.to_string()),
            database_path: std::env::var("DATABASE_PATH")
                .unwrap_or_else(|_| "./exchange_rate.db".to_string()),
            bind_addr: std::env::var("BIND_ADDR")
                .unwrap_or_else(|_| "0.0.0.0:8080".to_string()),
            fetch_timeout: FETCH_TIMEOUT,
            persist_timeout: PERSIST_TIMEOUT,
        })
    }
}

pub struct ClientConfig {
    pub server_url: String,
    pub output_path: String,
    pub request_timeout: Duration,
}

impl ClientConfig {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenv().ok();

        Ok(ClientConfig {
            server_url: std::env::var("SERVER_URL")
                .unwrap_or_else(|_| DEFAULT_SERVER_URL.to_string()),
            output_path: std::env::var("OUTPUT_PATH")
                .unwrap_or_else(|_| "cotacao.txt".to_string()),
            request_timeout: CLIENT_TIMEOUT,
        })
    }
}
