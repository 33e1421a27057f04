use axum::extract::ConnectInfo;
use std::net::SocketAddr;

/// Liveness probe used by the container harness.
///
/// GET /hello
pub async fn hello(remote: Option<ConnectInfo<SocketAddr>>) -> String {
    match remote {
        Some(ConnectInfo(addr)) => format!("Hello, world! (responding for {})", addr),
        None => "Hello, world! (responding for unknown)".to_string(),
    }
}
