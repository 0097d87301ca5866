use tokio::signal;

/// Resolves on SIGINT or SIGTERM; drives axum's graceful shutdown.
pub(crate) async fn shutdown_signal() {
    tokio::select! {
        _ = interrupt() => tracing::info!(signal = "SIGINT", "Stopping QuizForge API"),
        _ = terminate() => tracing::info!(signal = "SIGTERM", "Stopping QuizForge API"),
    }
}

async fn interrupt() {
    if let Err(err) = signal::ctrl_c().await {
        tracing::error!(error = %err, "Ctrl+C handler unavailable; relying on SIGTERM");
        std::future::pending::<()>().await;
    }
}

#[cfg(unix)]
async fn terminate() {
    match signal::unix::signal(signal::unix::SignalKind::terminate()) {
        Ok(mut sigterm) => {
            sigterm.recv().await;
        }
        Err(err) => {
            tracing::error!(error = %err, "SIGTERM handler unavailable");
            std::future::pending::<()>().await;
        }
    }
}

#[cfg(not(unix))]
async fn terminate() {
    std::future::pending::<()>().await;
}
