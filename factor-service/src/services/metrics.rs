//! Factorization metrics, recorded through the `metrics` facade.

use crate::services::factorization::Factorization;
use metrics::{counter, histogram};
use service_core::error::AppError;
use std::time::Duration;

/// Terminal state label for a factor request.
pub fn outcome_label(result: &Result<Factorization, AppError>) -> &'static str {
    match result {
        Ok(_) => "completed",
        Err(AppError::Timeout) => "timed_out",
        Err(AppError::ServiceUnavailable) => "cancelled",
        Err(AppError::MissingParameter(_)) | Err(AppError::InvalidParameter(_)) => "rejected",
        Err(_) => "failed",
    }
}

pub fn record_factor_request(result: &Result<Factorization, AppError>, elapsed: Duration) {
    let outcome = outcome_label(result);

    counter!("factor_requests_total", "outcome" => outcome).increment(1);
    histogram!("factor_duration_seconds", "outcome" => outcome).record(elapsed.as_secs_f64());

    if let Ok(factorization) = result {
        histogram!("factor_count").record(factorization.factors.len() as f64);
    }
}
