//! # debate-events
//!
//! Kafka plumbing for the debate server:
//! - A consumer that keeps the local user projection in sync with the
//!   identity service
//! - A producer that announces replies to comment authors

pub mod consumer;
pub mod error;
pub mod producer;

pub use consumer::{ConsumerConfig, ConsumerHandle, UserEventConsumer};
pub use error::{EventError, EventResult};
pub use producer::{DisabledPublisher, KafkaReplyPublisher};
