//! Graceful shutdown handling.

use tokio_util::sync::CancellationToken;

/// Stops the background progress logger and waits for it to exit.
pub async fn shutdown_gracefully(
    cancel: CancellationToken,
    logging_task: Option<tokio::task::JoinHandle<()>>,
) {
    cancel.cancel();
    if let Some(logging_task) = logging_task {
        let _ = logging_task.await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_shutdown_stops_logging_task() {
        let cancel = CancellationToken::new();
        let child = cancel.child_token();
        let task = tokio::spawn(async move {
            let mut interval = tokio::time::interval(Duration::from_millis(10));
            loop {
                tokio::select! {
                    _ = interval.tick() => {}
                    _ = child.cancelled() => break,
                }
            }
        });

        tokio::time::timeout(
            Duration::from_secs(1),
            shutdown_gracefully(cancel.clone(), Some(task)),
        )
        .await
        .expect("logging task should stop");
        assert!(cancel.is_cancelled());
    }
}
