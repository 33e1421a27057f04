//! index-service: renders a static page echoing the proxy's routing headers.

pub mod handlers;
pub mod startup;

pub const SERVICE_NAME: &str = "index-service";
