pub mod config;
pub mod error;
pub mod models;
pub mod store;

pub use config::{ClientConfig, ServerConfig};
pub use error::RateError;
pub use models::*;
pub use store::{RateStore, SqliteRateStore};
