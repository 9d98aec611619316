use std::time::Duration;
use tokio::time::sleep;

// ============================================================================
// Exponential Backoff Retry Strategy
// ============================================================================
//
// Retries an async operation while its error reports itself as transient.
// Used for best-effort side effects (receipt delivery); never for charging.
//
// ============================================================================

#[derive(Clone, Debug, PartialEq)]
pub struct RetryConfig {
    /// Maximum number of attempts, including the first one
    pub max_attempts: u32,
    /// Initial delay before first retry
    pub initial_delay: Duration,
    /// Maximum delay between retries
    pub max_delay: Duration,
    /// Multiplier for exponential backoff
    pub multiplier: f64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            initial_delay: Duration::from_millis(100),
            max_delay: Duration::from_secs(10),
            multiplier: 2.0,
        }
    }
}

impl RetryConfig {
    fn first_delay(&self) -> Duration {
        self.initial_delay.min(self.max_delay)
    }

    /// Saturates at `max_delay`; a non-finite or negative product also lands there.
    fn next_delay(&self, delay: Duration) -> Duration {
        Duration::try_from_secs_f64(delay.as_secs_f64() * self.multiplier)
            .unwrap_or(self.max_delay)
            .min(self.max_delay)
    }
}

/// Result of a retry operation
#[derive(Debug)]
pub enum RetryResult<T, E> {
    /// Operation succeeded
    Success(T),
    /// Operation failed after all retries
    Failed(E),
    /// Operation permanently failed (should not retry)
    PermanentFailure(E),
}

/// Check if an error is transient (should retry) or permanent (should not retry)
pub trait IsTransient {
    fn is_transient(&self) -> bool;
}

/// Retry with transient error checking
pub async fn retry_on_transient<F, Fut, T, E>(
    config: &RetryConfig,
    mut operation: F,
) -> RetryResult<T, E>
where
    F: FnMut(u32) -> Fut,
    Fut: std::future::Future<Output = Result<T, E>>,
    E: std::fmt::Display + IsTransient,
{
    let max_attempts = config.max_attempts.max(1);
    let mut attempt = 0;
    let mut delay = config.first_delay();

    loop {
        attempt += 1;

        match operation(attempt).await {
            Ok(result) => {
                if attempt > 1 {
                    tracing::info!(
                        attempt = attempt,
                        "Operation succeeded after retry"
                    );
                }
                return RetryResult::Success(result);
            }
            Err(error) => {
                if !error.is_transient() {
                    tracing::error!(
                        error = %error,
                        "Permanent failure detected, not retrying"
                    );
                    return RetryResult::PermanentFailure(error);
                }

                if attempt >= max_attempts {
                    tracing::error!(
                        attempt = attempt,
                        error = %error,
                        "Operation failed after all retries"
                    );
                    return RetryResult::Failed(error);
                }

                tracing::warn!(
                    attempt = attempt,
                    error = %error,
                    delay_ms = delay.as_millis(),
                    "Transient failure, retrying after delay"
                );

                sleep(delay).await;
                delay = config.next_delay(delay);
            }
        }
    }
}
