use axum::{
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Missing '{0}' parameter")]
    MissingParameter(&'static str),

    #[error("Invalid '{0}' parameter")]
    InvalidParameter(&'static str),

    #[error("Request timed out")]
    Timeout,

    #[error("Service unavailable")]
    ServiceUnavailable,

    #[error("Internal server error: {0}")]
    InternalError(#[from] anyhow::Error),

    #[error("Configuration error: {0}")]
    ConfigError(anyhow::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::MissingParameter(_) | AppError::InvalidParameter(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::Timeout => StatusCode::REQUEST_TIMEOUT,
            AppError::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            AppError::InternalError(_) | AppError::ConfigError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::ConfigError(anyhow::Error::new(err))
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::InternalError(anyhow::Error::new(err))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        // Internal details stay in the logs; clients only see the status text.
        let body = match &self {
            AppError::InternalError(err) | AppError::ConfigError(err) => {
                tracing::error!(error = ?err, %status, "server error http response");
                "Internal server error".to_string()
            }
            other => other.to_string(),
        };

        (
            status,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            body,
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_text(err: AppError) -> (StatusCode, String) {
        let res = err.into_response();
        let status = res.status();
        let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_missing_parameter_is_bad_request() {
        let (status, body) = body_text(AppError::MissingParameter("number")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, "Missing 'number' parameter");
    }

    #[tokio::test]
    async fn test_invalid_parameter_is_bad_request() {
        let (status, body) = body_text(AppError::InvalidParameter("number")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, "Invalid 'number' parameter");
    }

    #[tokio::test]
    async fn test_timeout_maps_to_408() {
        let (status, body) = body_text(AppError::Timeout).await;
        assert_eq!(status, StatusCode::REQUEST_TIMEOUT);
        assert_eq!(body, "Request timed out");
    }

    #[tokio::test]
    async fn test_internal_error_hides_details() {
        let err = AppError::InternalError(anyhow::anyhow!("worker panicked"));
        let (status, body) = body_text(err).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, "Internal server error");
    }
}
