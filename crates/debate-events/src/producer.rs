//! Reply notification producers.

use std::time::Duration;

use async_trait::async_trait;
use debate_common::KafkaConfig;
use debate_core::{DomainError, NotificationPublisher, RepoResult, ReplyNotification};
use rdkafka::config::ClientConfig;
use rdkafka::producer::{FutureProducer, FutureRecord};

use crate::error::EventResult;

const SEND_TIMEOUT: Duration = Duration::from_secs(5);

/// Publishes reply notifications to Kafka, keyed by receiver
#[derive(Clone)]
pub struct KafkaReplyPublisher {
    producer: FutureProducer,
    topic: String,
}

impl KafkaReplyPublisher {
    /// Create a producer for `config.reply_topic`
    pub fn new(config: &KafkaConfig) -> EventResult<Self> {
        let producer: FutureProducer = ClientConfig::new()
            .set("bootstrap.servers", &config.brokers)
            .set("message.timeout.ms", "5000")
            .create()?;

        Ok(Self {
            producer,
            topic: config.reply_topic.clone(),
        })
    }

    /// Target topic
    pub fn topic(&self) -> &str {
        &self.topic
    }
}

#[async_trait]
impl NotificationPublisher for KafkaReplyPublisher {
    async fn publish_reply(&self, notification: &ReplyNotification) -> RepoResult<()> {
        let payload = serde_json::to_string(notification)
            .map_err(|e| DomainError::MessagingError(e.to_string()))?;
        let key = notification.receiver_id.to_string();

        let record = FutureRecord::to(&self.topic).key(&key).payload(&payload);
        let (partition, offset) = self
            .producer
            .send(record, SEND_TIMEOUT)
            .await
            .map_err(|(e, _)| DomainError::MessagingError(e.to_string()))?;

        tracing::debug!(
            topic = %self.topic,
            partition,
            offset,
            receiver_id = notification.receiver_id,
            "Published reply notification"
        );

        Ok(())
    }
}

/// Used when Kafka is disabled; notifications are only logged
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledPublisher;

#[async_trait]
impl NotificationPublisher for DisabledPublisher {
    async fn publish_reply(&self, notification: &ReplyNotification) -> RepoResult<()> {
        tracing::debug!(
            receiver_id = notification.receiver_id,
            sender_id = notification.sender_id,
            "Kafka disabled, dropping reply notification"
        );
        Ok(())
    }
}
