//! User projection sync
//!
//! Applies identity-service events to the local user table. Malformed
//! payloads and events for unknown users are logged and skipped so one bad
//! message never stalls the consumer.

use debate_core::events::{UserEvent, UserTopic};
use tracing::{info, instrument, warn};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// What happened to one event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOutcome {
    Applied,
    /// Update or delete for a user the projection does not know
    UnknownUser,
    /// Payload did not parse
    Malformed,
    /// Topic is not a user topic
    Ignored,
}

/// User sync service
pub struct UserSyncService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserSyncService<'a> {
    /// Create a new UserSyncService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Handle a raw message from `topic`
    #[instrument(skip(self, payload), fields(bytes = payload.len()))]
    pub async fn handle(&self, topic: &str, payload: &[u8]) -> ServiceResult<SyncOutcome> {
        let Some(topic) = UserTopic::from_topic(topic) else {
            warn!(topic, "Message on unexpected topic");
            return Ok(SyncOutcome::Ignored);
        };

        let event = match UserEvent::from_slice(payload) {
            Ok(event) => event,
            Err(e) => {
                warn!(topic = topic.name(), error = %e, "Skipping malformed user event");
                return Ok(SyncOutcome::Malformed);
            }
        };

        self.apply(topic, event).await
    }

    /// Apply a parsed event
    pub async fn apply(&self, topic: UserTopic, event: UserEvent) -> ServiceResult<SyncOutcome> {
        let user_id = event.user_id;
        let repo = self.ctx.user_repo();

        let found = match topic {
            UserTopic::Create => {
                repo.upsert(&event.into_user()).await?;
                true
            }
            UserTopic::Update => repo.update_profile(&event.into_user()).await?,
            UserTopic::UpdateLanguage => repo.update_language(user_id, &event.language).await?,
            UserTopic::Delete => repo.delete(user_id).await?,
        };

        if !found {
            warn!(user_id, topic = topic.name(), "Skipping event for unknown user");
            return Ok(SyncOutcome::UnknownUser);
        }

        info!(user_id, topic = topic.name(), "User projection updated");
        Ok(SyncOutcome::Applied)
    }
}
