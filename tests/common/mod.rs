//! Shared utilities for integration testing.

use std::net::SocketAddr;

use tokio::net::TcpListener;

use seneca_mail::config::ServerConfig;
use seneca_mail::http::HttpServer;
use seneca_mail::lifecycle::Shutdown;

/// Start the service on an ephemeral port.
///
/// Returns the bound address and the shutdown coordinator. The server stops
/// when the coordinator is triggered or dropped, so tests must keep it
/// alive for as long as they talk to the server.
pub async fn start_server() -> (SocketAddr, Shutdown) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let mut config = ServerConfig::default();
    config.listener.host = "127.0.0.1".to_string();
    config.listener.port = addr.port();

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    let server = HttpServer::new(config);

    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    (addr, shutdown)
}
