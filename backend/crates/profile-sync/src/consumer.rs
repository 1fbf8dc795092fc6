use crate::{
    ConsumerState, ConsumerStatus, Disposition, MessageProcessor, Result as SyncResult,
    ShutdownCoordinator, ShutdownGuard, SyncError,
};

use std::sync::Arc;

use async_trait::async_trait;
use futures::{Stream, StreamExt};
use lapin::options::{
    BasicAckOptions, BasicConsumeOptions, BasicNackOptions, BasicQosOptions, QueueDeclareOptions,
};
use lapin::types::{AMQPValue, FieldTable};
use lapin::{Channel, Connection, ConnectionProperties};
use tokio::task::JoinHandle;

const DEAD_LETTER_EXCHANGE_ARG: &str = "x-dead-letter-exchange";
const DEAD_LETTER_ROUTING_KEY_ARG: &str = "x-dead-letter-routing-key";
const REPLY_SUCCESS: u16 = 200;

/// Broker connection settings for the event consumer
#[derive(Debug, Clone)]
pub struct ConsumerSettings {
    pub url: String,
    pub queue_name: String,
    pub dead_letter_queue: String,
    pub prefetch: u16,
    pub consumer_tag: String,
}

impl ConsumerSettings {
    pub fn new(
        url: impl Into<String>,
        queue_name: impl Into<String>,
        dead_letter_queue: impl Into<String>,
        prefetch: u16,
    ) -> Self {
        Self {
            url: url.into(),
            queue_name: queue_name.into(),
            dead_letter_queue: dead_letter_queue.into(),
            prefetch,
            consumer_tag: format!("profile-service-{}", uuid::Uuid::new_v4()),
        }
    }
}

/// One message handed to the consumer loop, settled exactly once.
#[async_trait]
pub trait InboundDelivery: Send + Sync {
    fn body(&self) -> &[u8];

    async fn ack(&self) -> SyncResult<()>;

    /// Negative acknowledge without requeue.
    async fn dead_letter(&self) -> SyncResult<()>;
}

struct AmqpDelivery {
    inner: lapin::message::Delivery,
}

#[async_trait]
impl InboundDelivery for AmqpDelivery {
    fn body(&self) -> &[u8] {
        &self.inner.data
    }

    async fn ack(&self) -> SyncResult<()> {
        self.inner.acker.ack(BasicAckOptions::default()).await?;
        Ok(())
    }

    async fn dead_letter(&self) -> SyncResult<()> {
        self.inner
            .acker
            .nack(BasicNackOptions {
                multiple: false,
                requeue: false,
            })
            .await?;
        Ok(())
    }
}

/// Process deliveries one at a time until the stream ends, errors, or shutdown fires.
pub async fn consume_loop<S, D>(
    deliveries: S,
    processor: &MessageProcessor,
    status: &ConsumerStatus,
    mut shutdown_guard: ShutdownGuard,
) where
    S: Stream<Item = SyncResult<D>> + Send,
    D: InboundDelivery,
{
    let mut deliveries = std::pin::pin!(deliveries);

    loop {
        tokio::select! {
            biased;

            _ = shutdown_guard.wait() => {
                log::info!("Event consumer stopping for shutdown");
                break;
            }

            next = deliveries.next() => {
                match next {
                    Some(Ok(delivery)) => settle(&delivery, processor).await,
                    Some(Err(e)) => {
                        log::error!("Event consumer stream failed: {}", e);
                        break;
                    }
                    None => {
                        log::warn!("Event consumer stream closed by broker");
                        break;
                    }
                }
            }
        }
    }

    status.set(ConsumerState::Disconnected);
}

async fn settle<D: InboundDelivery>(delivery: &D, processor: &MessageProcessor) {
    let result = match processor.process(delivery.body()).await {
        Disposition::Ack => delivery.ack().await,
        Disposition::DeadLetter(reason) => {
            log::debug!("Rejecting delivery without requeue: {:?}", reason);
            delivery.dead_letter().await
        }
    };

    // The broker redelivers unsettled messages, and handling is idempotent.
    if let Err(e) = result {
        log::error!("Failed to settle delivery: {}", e);
    }
}

/// Long-running AMQP subscriber feeding [`MessageProcessor`].
pub struct EventConsumer {
    settings: ConsumerSettings,
    processor: Arc<MessageProcessor>,
    status: ConsumerStatus,
}

impl EventConsumer {
    pub fn new(
        settings: ConsumerSettings,
        processor: Arc<MessageProcessor>,
        status: ConsumerStatus,
    ) -> Self {
        Self {
            settings,
            processor,
            status,
        }
    }

    /// Connect and spawn the consumer task.
    ///
    /// A broker that cannot be reached leaves the status `Disconnected` and
    /// returns `None`; the rest of the service keeps running.
    pub async fn start(self, shutdown: &ShutdownCoordinator) -> Option<JoinHandle<()>> {
        self.status.set(ConsumerState::Connecting);

        let (connection, consumer) = match self.subscribe().await {
            Ok(subscribed) => subscribed,
            Err(e) => {
                log::warn!(
                    "Event consumer unavailable, continuing without event consumption: {}",
                    e
                );
                self.status.set(ConsumerState::Disconnected);
                return None;
            }
        };

        self.status.set(ConsumerState::Consuming);
        log::info!(
            "Consuming events from queue '{}' (dead letters to '{}')",
            self.settings.queue_name,
            self.settings.dead_letter_queue
        );

        let shutdown_guard = shutdown.subscribe_guard();
        let processor = self.processor;
        let status = self.status;

        Some(tokio::spawn(async move {
            let deliveries = consumer.map(|next| {
                next.map(|inner| AmqpDelivery { inner })
                    .map_err(SyncError::from)
            });

            consume_loop(deliveries, &processor, &status, shutdown_guard).await;

            if let Err(e) = connection.close(REPLY_SUCCESS, "shutdown").await {
                log::warn!("Error closing broker connection: {}", e);
            } else {
                log::info!("Broker connection closed");
            }
        }))
    }

    async fn subscribe(&self) -> SyncResult<(Connection, lapin::Consumer)> {
        let connection =
            Connection::connect(&self.settings.url, ConnectionProperties::default()).await?;
        let channel = connection.create_channel().await?;

        self.declare_queues(&channel).await?;

        channel
            .basic_qos(self.settings.prefetch, BasicQosOptions::default())
            .await?;

        let consumer = channel
            .basic_consume(
                &self.settings.queue_name,
                &self.settings.consumer_tag,
                BasicConsumeOptions::default(),
                FieldTable::default(),
            )
            .await?;

        Ok((connection, consumer))
    }

    async fn declare_queues(&self, channel: &Channel) -> SyncResult<()> {
        let durable = QueueDeclareOptions {
            durable: true,
            ..QueueDeclareOptions::default()
        };

        channel
            .queue_declare(
                &self.settings.dead_letter_queue,
                durable,
                FieldTable::default(),
            )
            .await?;

        // Rejected messages route through the default exchange to the dead-letter queue
        let mut arguments = FieldTable::default();
        arguments.insert(
            DEAD_LETTER_EXCHANGE_ARG.into(),
            AMQPValue::LongString("".into()),
        );
        arguments.insert(
            DEAD_LETTER_ROUTING_KEY_ARG.into(),
            AMQPValue::LongString(self.settings.dead_letter_queue.as_str().into()),
        );

        channel
            .queue_declare(&self.settings.queue_name, durable, arguments)
            .await?;

        Ok(())
    }
}
