#![allow(dead_code)]

use axum::{body::Body, body::to_bytes, http::Request, Router};
use factor_service::services::Factorizer;
use factor_service::startup::{build_router, AppState, Application};
use axum::http::StatusCode;
use service_core::config::Config;
use std::time::Duration;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tower::ServiceExt;

pub struct TestApp {
    pub address: String,
    pub port: u16,
    stop_tx: oneshot::Sender<()>,
    server: JoinHandle<std::io::Result<()>>,
}

impl TestApp {
    pub async fn spawn() -> Self {
        let app = Application::build(Config::ephemeral())
            .await
            .expect("Failed to build test application");

        let port = app.port();
        let address = format!("http://127.0.0.1:{}", port);

        let (stop_tx, stop_rx) = oneshot::channel::<()>();
        let server = tokio::spawn(app.run_until(async move {
            let _ = stop_rx.await;
        }));

        // Wait for the server to accept connections
        let client = reqwest::Client::new();
        let health_url = format!("{}/health", address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(Duration::from_millis(50)).await;
        }

        TestApp {
            address,
            port,
            stop_tx,
            server,
        }
    }

    /// Triggers graceful shutdown and waits for the server to exit.
    pub async fn stop(self) -> std::io::Result<()> {
        let _ = self.stop_tx.send(());
        self.server.await.expect("server task panicked")
    }
}

/// Router with a short factorization budget, for exercising timeouts.
pub fn router_with_timeout(timeout: Duration) -> Router {
    build_router(AppState {
        factorizer: Factorizer::with_timeout(timeout, CancellationToken::new()),
    })
}

pub fn router() -> Router {
    build_router(AppState {
        factorizer: Factorizer::new(CancellationToken::new()),
    })
}

pub async fn get(router: Router, uri: &str) -> (StatusCode, Option<String>, String) {
    let response = router
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let content_type = response
        .headers()
        .get("content-type")
        .map(|v| v.to_str().unwrap().to_string());
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

    (status, content_type, String::from_utf8(bytes.to_vec()).unwrap())
}
