#![allow(dead_code)]

use index_service::startup::Application;
use service_core::config::Config;
use std::time::Duration;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

pub struct TestApp {
    pub address: String,
    stop_tx: oneshot::Sender<()>,
    server: JoinHandle<std::io::Result<()>>,
}

impl TestApp {
    pub async fn spawn() -> Self {
        let app = Application::build(Config::ephemeral())
            .await
            .expect("Failed to build test application");

        let address = format!("http://127.0.0.1:{}", app.port());

        let (stop_tx, stop_rx) = oneshot::channel::<()>();
        let server = tokio::spawn(app.run_until(async move {
            let _ = stop_rx.await;
        }));

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
            stop_tx,
            server,
        }
    }

    pub async fn stop(self) -> std::io::Result<()> {
        let _ = self.stop_tx.send(());
        self.server.await.expect("server task panicked")
    }
}
