pub mod fetcher;
pub mod handler;
