//! Keeps the local user-reference table consistent with the identity service.
//!
//! Two paths write references: [`Reconciler::ensure`] on the request path, and
//! the [`EventConsumer`] reacting to `UserCreated` events. Delivery is
//! at-least-once and the retry counter lives only in process memory, so a crash
//! mid-retry restarts the count when the broker redelivers. Every write is
//! therefore idempotent per user id; that property is what makes redelivery safe.

pub mod consumer;
pub mod consumer_status;
pub mod error;
pub mod event;
pub mod processor;
pub mod reconciler;
pub mod retry;
pub mod shutdown_coordinator;
pub mod shutdown_guard;


pub use consumer::{ConsumerSettings, EventConsumer, InboundDelivery, consume_loop};
pub use consumer_status::{ConsumerState, ConsumerStatus};
pub use error::{Result, SyncError};
pub use event::{InboundEvent, USER_CREATED, UserCreated};
pub use processor::{DeadLetterReason, Disposition, EventHandler, MessageProcessor};
pub use reconciler::Reconciler;
pub use retry::{Delay, NextStep, RetryOutcome, RetryPolicy, RetryState, TokioDelay, run_with_retry};
pub use shutdown_coordinator::ShutdownCoordinator;
pub use shutdown_guard::ShutdownGuard;
