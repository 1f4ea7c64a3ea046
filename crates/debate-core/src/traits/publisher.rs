//! Outbound notification port

use async_trait::async_trait;

use super::repositories::RepoResult;
use crate::events::ReplyNotification;

/// Publishes notifications to other services
#[async_trait]
pub trait NotificationPublisher: Send + Sync {
    /// Announce a reply to the comment author
    async fn publish_reply(&self, notification: &ReplyNotification) -> RepoResult<()>;
}
