use axum::{
    extract::{RawQuery, State},
    Json,
};
use service_core::error::AppError;
use std::time::Instant;

use crate::dtos::{FactorsQuery, FactorsResponse};
use crate::services::{metrics::record_factor_request, parse_number, Factorization};
use crate::startup::AppState;

const NUMBER_PARAM: &str = "number";

/// Factor the `number` query parameter.
///
/// GET /factors?number=<decimal integer>
#[tracing::instrument(skip_all, fields(query_len = query.as_deref().map(str::len).unwrap_or(0)))]
pub async fn factors(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> Result<Json<FactorsResponse>, AppError> {
    let start = Instant::now();
    let result = factor_query(&state, query.as_deref()).await;
    record_factor_request(&result, start.elapsed());

    result.map(|factorization| Json(factorization.into()))
}

async fn factor_query(state: &AppState, raw: Option<&str>) -> Result<Factorization, AppError> {
    let query = FactorsQuery::parse(raw).map_err(|e| {
        tracing::debug!(error = %e, "Rejected malformed query string");
        AppError::InvalidParameter(NUMBER_PARAM)
    })?;

    let text = match query.number.as_deref() {
        Some(text) if !text.is_empty() => text,
        _ => return Err(AppError::MissingParameter(NUMBER_PARAM)),
    };

    let number = parse_number(text).map_err(|e| {
        tracing::debug!(error = %e, "Rejected number parameter");
        AppError::InvalidParameter(NUMBER_PARAM)
    })?;

    state.factorizer.factor(number).await
}
