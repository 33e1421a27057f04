use index_service::startup::Application;
use index_service::SERVICE_NAME;
use service_core::config::Config;
use service_core::observability::{init_metrics, init_tracing, shutdown_tracing};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load().map_err(|e| {
        eprintln!("Failed to load configuration: {}", e);
        anyhow::anyhow!("Configuration error: {}", e)
    })?;

    init_tracing(
        SERVICE_NAME,
        &config.log_level,
        config.otlp_endpoint.as_deref(),
    )?;
    init_metrics()?;

    let app = Application::build(config).await?;
    app.run_until_stopped().await.map_err(|e| {
        tracing::error!("Server error: {}", e);
        anyhow::anyhow!("Server error: {}", e)
    })?;

    tracing::info!("Service shutdown complete");
    shutdown_tracing();
    Ok(())
}
