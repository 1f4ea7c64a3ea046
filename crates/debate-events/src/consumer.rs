//! Kafka consumer for identity-service user events.
//!
//! Subscribes to the four user topics and applies each message to the local
//! user projection. Offsets are committed only after a message is handled,
//! so a database outage replays the message after reconnecting.

use std::sync::Arc;
use std::time::Duration;

use debate_common::KafkaConfig;
use debate_core::UserTopic;
use debate_service::{ServiceContext, UserSyncService};
use rdkafka::config::ClientConfig;
use rdkafka::consumer::{CommitMode, Consumer, StreamConsumer};
use rdkafka::message::Message;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::error::{EventError, EventResult};

/// Consumer configuration
#[derive(Debug, Clone)]
pub struct ConsumerConfig {
    /// Comma-separated bootstrap servers
    pub brokers: String,
    pub group_id: String,
    /// Reconnection delay in milliseconds
    pub reconnect_delay_ms: u64,
}

impl Default for ConsumerConfig {
    fn default() -> Self {
        Self {
            brokers: "localhost:9092".to_string(),
            group_id: "eum-debate".to_string(),
            reconnect_delay_ms: 1000,
        }
    }
}

impl From<&KafkaConfig> for ConsumerConfig {
    fn from(config: &KafkaConfig) -> Self {
        Self {
            brokers: config.brokers.clone(),
            group_id: config.group_id.clone(),
            ..Self::default()
        }
    }
}

impl ConsumerConfig {
    /// librdkafka settings for the stream consumer
    pub fn client_config(&self) -> ClientConfig {
        let mut client = ClientConfig::new();
        client
            .set("bootstrap.servers", &self.brokers)
            .set("group.id", &self.group_id)
            .set("enable.auto.commit", "false")
            .set("auto.offset.reset", "earliest");
        client
    }
}

/// Topic names the consumer subscribes to
pub fn user_topics() -> Vec<&'static str> {
    UserTopic::ALL.iter().map(|t| t.name()).collect()
}

/// Handle to a running consumer
pub struct ConsumerHandle {
    control_tx: mpsc::Sender<()>,
    join: JoinHandle<()>,
}

impl ConsumerHandle {
    /// Ask the consumer to stop and wait for it
    pub async fn shutdown(self) -> EventResult<()> {
        self.control_tx
            .send(())
            .await
            .map_err(|_| EventError::ChannelClosed)?;
        if let Err(e) = self.join.await {
            tracing::warn!(error = %e, "User event consumer task ended abnormally");
        }
        Ok(())
    }
}

/// Applies user events to the projection
pub struct UserEventConsumer {
    config: ConsumerConfig,
    ctx: Arc<ServiceContext>,
}

impl UserEventConsumer {
    /// Create a consumer over `ctx`
    pub fn new(config: ConsumerConfig, ctx: Arc<ServiceContext>) -> Self {
        Self { config, ctx }
    }

    /// Start the background listener
    pub fn spawn(self) -> ConsumerHandle {
        let (control_tx, control_rx) = mpsc::channel(1);
        let join = tokio::spawn(self.listener_loop(control_rx));
        ConsumerHandle { control_tx, join }
    }

    /// Reconnect until shut down
    async fn listener_loop(self, mut control_rx: mpsc::Receiver<()>) {
        loop {
            match self.run_consumer(&mut control_rx).await {
                Ok(()) => {
                    tracing::info!("User event consumer shutting down");
                    break;
                }
                Err(e) => {
                    tracing::error!(error = %e, "User event consumer error, reconnecting...");
                    tokio::select! {
                        () = tokio::time::sleep(Duration::from_millis(self.config.reconnect_delay_ms)) => {}
                        _ = control_rx.recv() => {
                            tracing::info!("User event consumer shutting down");
                            break;
                        }
                    }
                }
            }
        }
    }

    /// Consume until error or shutdown
    async fn run_consumer(&self, control_rx: &mut mpsc::Receiver<()>) -> EventResult<()> {
        let consumer: StreamConsumer = self.config.client_config().create()?;
        let topics = user_topics();
        consumer.subscribe(&topics)?;

        tracing::info!(
            brokers = %self.config.brokers,
            group_id = %self.config.group_id,
            ?topics,
            "User event consumer connected"
        );

        let sync = UserSyncService::new(&self.ctx);

        loop {
            tokio::select! {
                msg = consumer.recv() => {
                    let msg = msg?;
                    let payload = msg.payload().unwrap_or_default();

                    let outcome = sync.handle(msg.topic(), payload).await?;
                    tracing::debug!(
                        topic = msg.topic(),
                        partition = msg.partition(),
                        offset = msg.offset(),
                        ?outcome,
                        "User event handled"
                    );

                    consumer.commit_message(&msg, CommitMode::Async)?;
                }
                _ = control_rx.recv() => {
                    return Ok(());
                }
            }
        }
    }
}
