//! Client round-trip tests against a throwaway local server.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use axum::routing::get;
use axum::{Json, Router};
use client::fetch::{fetch_bid, write_quote_file};
use shared::{BidResponse, ClientConfig, RateError};

async fn spawn_server(router: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    addr
}

fn config_for(addr: SocketAddr, output: &PathBuf, timeout: Duration) -> ClientConfig {
    ClientConfig {
        server_url: format!("http://{}/cotacao", addr),
        output_path: output.to_string_lossy().into_owned(),
        request_timeout: timeout,
    }
}

fn temp_output(tag: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("cotacao_{}_{}.txt", tag, std::process::id()));
    let _ = std::fs::remove_file(&path);
    path
}

#[tokio::test]
async fn writes_formatted_bid_to_file() {
    let addr = spawn_server(Router::new().route(
        "/cotacao",
        get(|| async {
            Json(BidResponse {
                bid: "5.43".to_string(),
            })
        }),
    ))
    .await;

    let output = temp_output("success");
    let config = config_for(addr, &output, Duration::from_secs(2));

    let bid = fetch_bid(&config).await.unwrap();
    write_quote_file(&config.output_path, &bid).unwrap();

    assert_eq!(std::fs::read_to_string(&output).unwrap(), "Dólar: 5.43");
    let _ = std::fs::remove_file(&output);
}

#[tokio::test]
async fn server_error_status_leaves_no_file() {
    let addr = spawn_server(Router::new().route(
        "/cotacao",
        get(|| async { (axum::http::StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
    ))
    .await;

    let output = temp_output("server_error");
    let config = config_for(addr, &output, Duration::from_secs(2));

    let err = fetch_bid(&config).await.unwrap_err();
    assert!(matches!(err, RateError::UpstreamStatus(_)));
    assert!(!output.exists());
}

#[tokio::test]
async fn unreachable_server_leaves_no_file() {
    // Bind then drop to get a port nothing listens on.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let output = temp_output("unreachable");
    let config = config_for(addr, &output, Duration::from_secs(2));

    let err = fetch_bid(&config).await.unwrap_err();
    assert!(matches!(
        err,
        RateError::Transport(_) | RateError::DeadlineExceeded(_)
    ));
    assert!(!output.exists());
}

#[tokio::test]
async fn slow_server_hits_client_deadline() {
    let addr = spawn_server(Router::new().route(
        "/cotacao",
        get(|| async {
            tokio::time::sleep(Duration::from_millis(500)).await;
            Json(BidResponse {
                bid: "5.43".to_string(),
            })
        }),
    ))
    .await;

    let output = temp_output("slow");
    let config = config_for(addr, &output, Duration::from_millis(50));

    let err = fetch_bid(&config).await.unwrap_err();
    assert!(matches!(err, RateError::DeadlineExceeded(_)));
    assert!(!output.exists());
}

#[tokio::test]
async fn malformed_body_fails_decode() {
    let addr = spawn_server(Router::new().route("/cotacao", get(|| async { "not json" }))).await;

    let output = temp_output("malformed");
    let config = config_for(addr, &output, Duration::from_secs(2));

    let err = fetch_bid(&config).await.unwrap_err();
    assert!(matches!(err, RateError::Decode(_)));
    assert!(!output.exists());
}
