use crate::{
    Delay, InboundEvent, Reconciler, Result as SyncResult, RetryOutcome, RetryPolicy, UserCreated,
    run_with_retry,
};

use std::sync::Arc;

use async_trait::async_trait;
use log::{error, info, warn};

/// Application-side handlers for each known event type.
#[async_trait]
pub trait EventHandler: Send + Sync {
    async fn user_created(&self, event: &UserCreated) -> SyncResult<()>;
}

#[async_trait]
impl EventHandler for Reconciler {
    async fn user_created(&self, event: &UserCreated) -> SyncResult<()> {
        info!(
            "Processing UserCreated event for user {} ({})",
            event.user_id, event.username
        );
        self.ensure(event.user_id).await.map(|_| ())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeadLetterReason {
    /// Body is not a valid event envelope; retrying cannot help.
    Malformed,
    RetriesExhausted { attempts: u32 },
}

/// Final verdict for one delivery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    /// Positive acknowledge.
    Ack,
    /// Negative acknowledge without requeue; the broker dead-letters it.
    DeadLetter(DeadLetterReason),
}

/// Turns a raw message body into a [`Disposition`].
pub struct MessageProcessor {
    handler: Arc<dyn EventHandler>,
    policy: RetryPolicy,
    delay: Arc<dyn Delay>,
}

impl MessageProcessor {
    pub fn new(handler: Arc<dyn EventHandler>, policy: RetryPolicy, delay: Arc<dyn Delay>) -> Self {
        Self {
            handler,
            policy,
            delay,
        }
    }

    pub fn policy(&self) -> &RetryPolicy {
        &self.policy
    }

    pub async fn process(&self, body: &[u8]) -> Disposition {
        let event = match InboundEvent::parse(body) {
            Ok(event) => event,
            Err(e) => {
                warn!("Dead-lettering malformed message: {}", e);
                metrics::counter!("profile_events_total", "outcome" => "malformed").increment(1);
                return Disposition::DeadLetter(DeadLetterReason::Malformed);
            }
        };

        match event {
            InboundEvent::Unknown { event_type } => {
                info!("Unknown event type: {}, acknowledging", event_type);
                metrics::counter!("profile_events_total", "outcome" => "ignored").increment(1);
                Disposition::Ack
            }
            InboundEvent::UserCreated(user_created) => {
                let outcome = run_with_retry(
                    &self.policy,
                    self.delay.as_ref(),
                    "UserCreated handler",
                    || self.handler.user_created(&user_created),
                )
                .await;

                match outcome {
                    RetryOutcome::Succeeded { .. } => {
                        metrics::counter!("profile_events_total", "outcome" => "handled")
                            .increment(1);
                        Disposition::Ack
                    }
                    RetryOutcome::Exhausted { error, attempts } => {
                        error!(
                            "Dead-lettering UserCreated for user {} after {} attempts: {}",
                            user_created.user_id, attempts, error
                        );
                        metrics::counter!("profile_events_total", "outcome" => "dead_lettered")
                            .increment(1);
                        Disposition::DeadLetter(DeadLetterReason::RetriesExhausted { attempts })
                    }
                }
            }
        }
    }
}
