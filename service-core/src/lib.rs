//! service-core: Shared infrastructure for the fixture services.
pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod observability;
pub mod shutdown;

pub use axum;
pub use serde;
pub use serde_json;
pub use tokio;
pub use tokio_util;
pub use tower;
pub use tower_http;
pub use tracing;
