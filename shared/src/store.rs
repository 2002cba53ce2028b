use std::path::PathBuf;
use std::time::Duration;

use async_trait::async_trait;
use sqlx::sqlite::SqliteConnectOptions;
use sqlx::{ConnectOptions, Connection, SqliteConnection};
use tracing::debug;

use crate::error::RateError;

const CREATE_TABLE_SQL: &str = "CREATE TABLE IF NOT EXISTS exchange_rate \
    (id INTEGER PRIMARY KEY, rate TEXT, timestamp DATETIME DEFAULT CURRENT_TIMESTAMP)";

/// Minimal persistence seam: execute the insert under the store's own
/// deadline. Tests substitute a recording or failing implementation.
#[async_trait]
pub trait RateStore: Send + Sync {
    async fn save_rate(&self, bid: &str) -> Result<(), RateError>;
}

/// SQLite-backed store. Opens a fresh connection per call (no pooling),
/// creates the table if absent, inserts one row, closes. The whole sequence
/// runs under `deadline`, measured from the call itself rather than from
/// whatever budget the request has left.
pub struct SqliteRateStore {
    path: PathBuf,
    deadline: Duration,
}

impl SqliteRateStore {
    pub fn new(path: impl Into<PathBuf>, deadline: Duration) -> Self {
        Self {
            path: path.into(),
            deadline,
        }
    }

    async fn insert(&self, bid: &str) -> Result<(), RateError> {
        let mut conn: SqliteConnection = SqliteConnectOptions::new()
            .filename(&self.path)
            .create_if_missing(true)
            .connect()
            .await?;

        sqlx::query(CREATE_TABLE_SQL).execute(&mut conn).await?;
        sqlx::query("INSERT INTO exchange_rate (rate) VALUES (?)")
            .bind(bid)
            .execute(&mut conn)
            .await?;

        conn.close().await?;
        debug!("Persisted rate {} to {:?}", bid, self.path);
        Ok(())
    }
}

#[async_trait]
impl RateStore for SqliteRateStore {
    async fn save_rate(&self, bid: &str) -> Result<(), RateError> {
        match tokio::time::timeout(self.deadline, self.insert(bid)).await {
            Ok(result) => result,
            Err(_) => Err(RateError::DeadlineExceeded(self.deadline)),
        }
    }
}
