use crate::handlers;
use crate::SERVICE_NAME;
use axum::{routing::get, Router};
use service_core::config::Config;
use service_core::error::AppError;
use service_core::handlers::{ops_router, ServiceInfo};
use service_core::middleware::with_common_layers;
use service_core::shutdown::shutdown_signal;
use std::future::Future;
use std::net::SocketAddr;
use tokio::net::TcpListener;

pub fn build_router() -> Router {
    let router = Router::new()
        .route("/", get(handlers::index))
        .merge(ops_router(ServiceInfo {
            name: SERVICE_NAME,
            version: env!("CARGO_PKG_VERSION"),
        }))
        .fallback(get(handlers::index));

    with_common_layers(router)
}

pub struct Application {
    port: u16,
    listener: TcpListener,
}

impl Application {
    pub async fn build(config: Config) -> Result<Self, AppError> {
        let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind TCP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        Ok(Self { port, listener })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        self.run_until(shutdown_signal()).await
    }

    pub async fn run_until<F>(self, signal: F) -> std::io::Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        tracing::info!(
            pid = std::process::id(),
            port = self.port,
            "Server listening"
        );

        axum::serve(self.listener, build_router())
            .with_graceful_shutdown(signal)
            .await
    }
}
