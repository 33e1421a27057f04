pub mod logging;
pub mod metrics;

pub use logging::{init_tracing, shutdown_tracing};
pub use metrics::{get_metrics, init_metrics};
