use crate::handlers;
use crate::services::Factorizer;
use crate::SERVICE_NAME;
use axum::{routing::get, Router};
use service_core::config::Config;
use service_core::error::AppError;
use service_core::handlers::{ops_router, ServiceInfo};
use service_core::middleware::with_common_layers;
use service_core::shutdown::{drain_then_cancel, shutdown_signal};
use std::future::Future;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;

#[derive(Clone)]
pub struct AppState {
    pub factorizer: Factorizer,
}

pub fn build_router(state: AppState) -> Router {
    let router = Router::new()
        .route("/factors", get(handlers::factors))
        .route("/hello", get(handlers::hello))
        .with_state(state)
        .merge(ops_router(ServiceInfo {
            name: SERVICE_NAME,
            version: env!("CARGO_PKG_VERSION"),
        }));

    with_common_layers(router)
}

pub struct Application {
    port: u16,
    listener: TcpListener,
    router: Router,
    shutdown: CancellationToken,
    shutdown_grace: Duration,
}

impl Application {
    pub async fn build(config: Config) -> Result<Self, AppError> {
        let shutdown = CancellationToken::new();
        let state = AppState {
            factorizer: Factorizer::new(shutdown.clone()),
        };

        let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind TCP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        Ok(Self {
            port,
            listener,
            router: build_router(state),
            shutdown,
            shutdown_grace: config.shutdown_grace(),
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// Serves until SIGINT/SIGTERM, then drains in-flight requests.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        self.run_until(shutdown_signal()).await
    }

    /// Serves until `signal` resolves, then drains in-flight requests.
    pub async fn run_until<F>(self, signal: F) -> std::io::Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        tracing::info!(
            pid = std::process::id(),
            port = self.port,
            "Server listening"
        );

        axum::serve(
            self.listener,
            self.router
                .into_make_service_with_connect_info::<SocketAddr>(),
        )
        .with_graceful_shutdown(drain_then_cancel(
            signal,
            self.shutdown.clone(),
            self.shutdown_grace,
        ))
        .await?;

        // Nothing is left waiting on workers once the drain completes.
        self.shutdown.cancel();
        Ok(())
    }
}
