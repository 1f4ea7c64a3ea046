//! Event payloads exchanged with other services

mod user_event;

pub use user_event::{ReplyNotification, UserEvent, UserTopic};
