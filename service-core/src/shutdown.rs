//! Termination signal handling shared by the service binaries.

use std::future::Future;
use std::time::Duration;
use tokio::signal;
use tokio_util::sync::CancellationToken;

/// Resolves on SIGINT or SIGTERM.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received SIGINT, starting graceful shutdown");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        },
    }
}

/// Graceful-shutdown future for `axum::serve`.
///
/// Resolves as soon as `signal` does, which stops the listener and starts
/// draining in-flight requests. Work still running after `grace` is cancelled
/// through `token` so the drain can finish.
pub async fn drain_then_cancel<F>(signal: F, token: CancellationToken, grace: Duration)
where
    F: Future<Output = ()>,
{
    signal.await;

    tokio::spawn(async move {
        tokio::select! {
            _ = tokio::time::sleep(grace) => {
                tracing::warn!(grace_secs = grace.as_secs(), "Grace period elapsed, cancelling in-flight work");
                token.cancel();
            }
            _ = token.cancelled() => {}
        }
    });
}
