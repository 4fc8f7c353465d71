//! Process supervisor: keeps the bot running by restarting failed attempts after a fixed delay.

use std::future::Future;
use std::time::Duration;

use tracing::{error, info, warn};

/// Restarts an attempt until one finishes cleanly.
///
/// `Ok(())` from an attempt is a graceful shutdown (e.g. Ctrl-C) and ends supervision. An `Err`
/// or a panic is logged with the attempt number; after `restart_delay` a fresh attempt is built.
/// No backoff and no crash ceiling.
#[derive(Debug, Clone, Copy)]
pub struct Supervisor {
    restart_delay: Duration,
}

impl Supervisor {
    pub fn new(restart_delay: Duration) -> Self {
        Self { restart_delay }
    }

    pub fn restart_delay(&self) -> Duration {
        self.restart_delay
    }

    /// Runs attempts built by `make_attempt` (called with the 1-based attempt number), each on its
    /// own task. Returns the number of attempts made once one of them returns `Ok(())`.
    pub async fn run<F, Fut>(&self, mut make_attempt: F) -> u64
    where
        F: FnMut(u64) -> Fut,
        Fut: Future<Output = anyhow::Result<()>> + Send + 'static,
    {
        let mut attempt: u64 = 0;
        loop {
            attempt += 1;
            info!(attempt, "Starting bot");

            match tokio::spawn(make_attempt(attempt)).await {
                Ok(Ok(())) => {
                    info!(attempt, "Bot stopped gracefully");
                    return attempt;
                }
                Ok(Err(e)) => {
                    error!(attempt, error = %format!("{:#}", e), "Bot crashed");
                }
                Err(join_err) if join_err.is_panic() => {
                    error!(attempt, error = %join_err, "Bot panicked");
                }
                Err(join_err) => {
                    warn!(attempt, error = %join_err, "Bot task cancelled");
                }
            }

            info!(
                attempt,
                delay_secs = self.restart_delay.as_secs_f64(),
                "Restarting after delay"
            );
            tokio::time::sleep(self.restart_delay).await;
        }
    }
}
