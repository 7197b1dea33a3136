//! Tests for server lifecycle: startup and graceful shutdown.

use std::time::Duration;

use tokio::net::TcpListener;

use seneca_mail::{HttpServer, ServerConfig, Shutdown};

mod common;

#[tokio::test]
async fn test_graceful_shutdown_on_trigger() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    let server = HttpServer::new(ServerConfig::default());
    let handle = tokio::spawn(async move { server.run(listener, server_shutdown).await });

    // The server answers while the coordinator is alive.
    let client = reqwest::Client::new();
    let res = client
        .get(format!("http://{addr}/"))
        .send()
        .await
        .expect("Server unreachable");
    assert_eq!(res.status(), 200);

    shutdown.trigger();

    let result = tokio::time::timeout(Duration::from_secs(5), handle)
        .await
        .expect("Server did not stop after shutdown trigger")
        .expect("Server task panicked");
    assert!(result.is_ok());
}

#[tokio::test]
async fn test_shutdown_when_coordinator_dropped() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    let server = HttpServer::new(ServerConfig::default());
    let handle = tokio::spawn(async move { server.run(listener, server_shutdown).await });

    // Dropping the coordinator closes the channel, which also stops the server.
    drop(shutdown);

    let result = tokio::time::timeout(Duration::from_secs(5), handle)
        .await
        .expect("Server did not stop after coordinator drop")
        .expect("Server task panicked");
    assert!(result.is_ok());
}

#[tokio::test]
async fn test_server_keeps_running_between_requests() {
    let (addr, shutdown) = common::start_server().await;
    let client = reqwest::Client::new();

    for _ in 0..3 {
        let res = client
            .get(format!("http://{addr}/"))
            .send()
            .await
            .expect("Server unreachable");
        assert_eq!(res.status(), 200);
    }

    shutdown.trigger();
}
