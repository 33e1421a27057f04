//! factor-service: factors arbitrary-precision integers by trial division.

pub mod dtos;
pub mod handlers;
pub mod services;
pub mod startup;

pub const SERVICE_NAME: &str = "factor-service";
