use crate::services::factorization::{trial_division, Factorization};
use num_bigint::BigUint;
use service_core::error::AppError;
use std::time::Duration;
use tokio::sync::oneshot;
use tokio_util::sync::CancellationToken;

/// Wall-clock budget for a single factorization.
pub const FACTOR_TIMEOUT: Duration = Duration::from_secs(200);

/// Runs factorizations off the async runtime, bounded by a timeout.
#[derive(Clone)]
pub struct Factorizer {
    timeout: Duration,
    shutdown: CancellationToken,
}

impl Factorizer {
    /// `shutdown` is the process-wide token; cancelling it aborts every
    /// factorization still in progress.
    pub fn new(shutdown: CancellationToken) -> Self {
        Self::with_timeout(FACTOR_TIMEOUT, shutdown)
    }

    pub fn with_timeout(timeout: Duration, shutdown: CancellationToken) -> Self {
        Self { timeout, shutdown }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Races a blocking trial-division worker against the timeout.
    ///
    /// Each call owns a fresh result channel and cancellation token. Once this
    /// future resolves or is dropped the token is cancelled, so a worker that
    /// lost the race stops at its next candidate and its result goes nowhere.
    #[tracing::instrument(skip_all, fields(bits = number.bits()))]
    pub async fn factor(&self, number: BigUint) -> Result<Factorization, AppError> {
        let token = self.shutdown.child_token();
        let worker_token = token.clone();
        let _guard = token.drop_guard();

        let (tx, rx) = oneshot::channel();
        tokio::task::spawn_blocking(move || {
            let outcome = trial_division(number, &worker_token).map(Factorization::new);
            // Receiver is gone if the request stopped waiting.
            let _ = tx.send(outcome);
        });

        match tokio::time::timeout(self.timeout, rx).await {
            Ok(Ok(Some(factorization))) => {
                tracing::debug!(
                    factor_count = factorization.factors.len(),
                    "Factorization completed"
                );
                Ok(factorization)
            }
            Ok(Ok(None)) => {
                tracing::warn!("Factorization cancelled by shutdown");
                Err(AppError::ServiceUnavailable)
            }
            Ok(Err(_)) => Err(AppError::InternalError(anyhow::anyhow!(
                "factorization worker exited without a result"
            ))),
            Err(_) => {
                tracing::warn!(
                    timeout_secs = self.timeout.as_secs(),
                    "Factorization timed out, abandoning worker"
                );
                Err(AppError::Timeout)
            }
        }
    }
}
