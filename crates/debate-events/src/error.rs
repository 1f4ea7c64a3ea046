//! Event layer errors

use debate_core::DomainError;
use debate_service::ServiceError;

/// Error type for consumer and producer operations
#[derive(Debug, thiserror::Error)]
pub enum EventError {
    #[error("Kafka error: {0}")]
    Kafka(#[from] rdkafka::error::KafkaError),

    #[error("Failed to encode event: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("Failed to apply event: {0}")]
    Service(#[from] ServiceError),

    #[error("Control channel closed")]
    ChannelClosed,
}

/// Result type for event operations
pub type EventResult<T> = Result<T, EventError>;

impl From<EventError> for DomainError {
    fn from(err: EventError) -> Self {
        DomainError::MessagingError(err.to_string())
    }
}
