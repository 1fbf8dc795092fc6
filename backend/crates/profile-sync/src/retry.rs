use std::fmt::Display;
use std::time::Duration;

use async_trait::async_trait;

// 1 initial attempt + 3 retries, 5 seconds apart
const DEFAULT_MAX_RETRIES: u32 = 3;
const DEFAULT_DELAY_SECS: u64 = 5;

/// Fixed-delay retry budget. There is no backoff growth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Retries after the first attempt
    pub max_retries: u32,
    /// Wait between consecutive attempts
    pub delay: Duration,
}

impl RetryPolicy {
    pub fn new(max_retries: u32, delay: Duration) -> Self {
        Self { max_retries, delay }
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_retries.saturating_add(1)
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: DEFAULT_MAX_RETRIES,
            delay: Duration::from_secs(DEFAULT_DELAY_SECS),
        }
    }
}

/// What to do after a failed attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NextStep {
    RetryAfter(Duration),
    GiveUp,
}

/// Attempt counter for one unit of work. Lives in memory only.
#[derive(Debug, Clone)]
pub struct RetryState {
    policy: RetryPolicy,
    attempts: u32,
}

impl RetryState {
    pub fn new(policy: RetryPolicy) -> Self {
        Self {
            policy,
            attempts: 0,
        }
    }

    /// Start the next attempt; returns its 1-based number.
    pub fn begin_attempt(&mut self) -> u32 {
        self.attempts += 1;
        self.attempts
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn max_attempts(&self) -> u32 {
        self.policy.max_attempts()
    }

    pub fn on_failure(&self) -> NextStep {
        if self.attempts >= self.policy.max_attempts() {
            NextStep::GiveUp
        } else {
            NextStep::RetryAfter(self.policy.delay)
        }
    }
}

/// Suspends the caller between attempts; swapped out in tests.
#[async_trait]
pub trait Delay: Send + Sync {
    async fn wait(&self, duration: Duration);
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TokioDelay;

#[async_trait]
impl Delay for TokioDelay {
    async fn wait(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

#[derive(Debug)]
pub enum RetryOutcome<T, E> {
    Succeeded { value: T, attempts: u32 },
    Exhausted { error: E, attempts: u32 },
}

/// Run `operation` until it succeeds or the policy's attempts are used up.
///
/// Every error counts as a failure. The last error is returned on exhaustion.
pub async fn run_with_retry<F, Fut, T, E>(
    policy: &RetryPolicy,
    delay: &dyn Delay,
    operation_name: &str,
    mut operation: F,
) -> RetryOutcome<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: Display,
{
    let mut state = RetryState::new(*policy);

    loop {
        let attempt = state.begin_attempt();

        match operation().await {
            Ok(value) => {
                if attempt > 1 {
                    log::info!("{} succeeded after {} attempts", operation_name, attempt);
                }
                return RetryOutcome::Succeeded {
                    value,
                    attempts: attempt,
                };
            }
            Err(e) => match state.on_failure() {
                NextStep::GiveUp => {
                    log::warn!(
                        "{} failed after {} attempts: {}",
                        operation_name,
                        attempt,
                        e
                    );
                    return RetryOutcome::Exhausted {
                        error: e,
                        attempts: attempt,
                    };
                }
                NextStep::RetryAfter(wait) => {
                    log::warn!(
                        "{} attempt {}/{} failed: {}. Retrying in {:?}",
                        operation_name,
                        attempt,
                        state.max_attempts(),
                        e,
                        wait
                    );
                    delay.wait(wait).await;
                }
            },
        }
    }
}
