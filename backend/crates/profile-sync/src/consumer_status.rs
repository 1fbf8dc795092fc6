use std::sync::Arc;

use serde::Serialize;
use tokio::sync::watch;

/// Lifecycle of the queue consumer. There is no automatic reconnect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConsumerState {
    Disconnected,
    Connecting,
    Consuming,
}

impl ConsumerState {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Disconnected => "disconnected",
            Self::Connecting => "connecting",
            Self::Consuming => "consuming",
        }
    }
}

impl std::fmt::Display for ConsumerState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Shared, observable handle on the consumer's current state.
#[derive(Clone)]
pub struct ConsumerStatus {
    tx: Arc<watch::Sender<ConsumerState>>,
}

impl ConsumerStatus {
    pub fn new() -> Self {
        let (tx, _) = watch::channel(ConsumerState::Disconnected);
        Self { tx: Arc::new(tx) }
    }

    pub fn set(&self, state: ConsumerState) {
        let previous = self.tx.send_replace(state);
        if previous != state {
            log::info!("Event consumer state: {} -> {}", previous, state);
        }
    }

    pub fn current(&self) -> ConsumerState {
        *self.tx.borrow()
    }

    pub fn subscribe(&self) -> watch::Receiver<ConsumerState> {
        self.tx.subscribe()
    }
}

impl Default for ConsumerStatus {
    fn default() -> Self {
        Self::new()
    }
}
