use crate::error::AppError;
use config::{Config as Cfg, File};
use serde::Deserialize;
use std::time::Duration;

/// Environment variable the container harness uses to hand out the listen port.
pub const PORT_ENV: &str = "PORT";

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub port: u16,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub otlp_endpoint: Option<String>,
    #[serde(default = "default_shutdown_grace_secs")]
    pub shutdown_grace_secs: u64,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_shutdown_grace_secs() -> u64 {
    30
}

impl Config {
    /// Loads `.env`, the optional `configuration` file, `APP__*` variables and
    /// finally `PORT`. Fails when no port is configured anywhere.
    pub fn load() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();
        Self::load_with_port(std::env::var(PORT_ENV).ok())
    }

    pub fn load_with_port(port: Option<String>) -> Result<Self, AppError> {
        let config = Cfg::builder()
            .add_source(File::with_name("configuration").required(false))
            .add_source(config::Environment::with_prefix("APP").separator("__"))
            .set_override_option("port", port)?
            .build()?;

        config.try_deserialize().map_err(|e| {
            AppError::ConfigError(anyhow::anyhow!(
                "invalid configuration (is {} set?): {}",
                PORT_ENV,
                e
            ))
        })
    }

    pub fn shutdown_grace(&self) -> Duration {
        Duration::from_secs(self.shutdown_grace_secs)
    }

    /// Configuration for tests: ephemeral port, no exporter.
    pub fn ephemeral() -> Self {
        Self {
            port: 0,
            log_level: default_log_level(),
            otlp_endpoint: None,
            shutdown_grace_secs: default_shutdown_grace_secs(),
        }
    }
}
