//! Reply service
//!
//! Replies under comments. Replying to someone else's comment notifies them.

use debate_core::entities::{validate_content, ReplyView, User};
use debate_core::error::DomainError;
use debate_core::events::ReplyNotification;
use debate_core::value_objects::PageRequest;
use tracing::{info, instrument, warn};

use crate::dto::{ReplyListResponse, ReplyResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Reply service
pub struct ReplyService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ReplyService<'a> {
    /// Create a new ReplyService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Reply to a comment
    #[instrument(skip(self, author, content), fields(author_id = author.id))]
    pub async fn add(
        &self,
        author: &User,
        comment_id: i64,
        content: &str,
    ) -> ServiceResult<ReplyResponse> {
        validate_content(content)?;

        let comment = self
            .ctx
            .comment_repo()
            .find_by_id(comment_id)
            .await?
            .ok_or(DomainError::CommentNotFound(comment_id))?;

        let reply = self
            .ctx
            .reply_repo()
            .create(comment_id, author.id, content)
            .await?;

        info!(reply_id = reply.id, comment_id, "Reply created");

        if !comment.is_author(author.id) {
            self.notify(
                reply.id,
                ReplyNotification {
                    receiver_id: comment.user_id,
                    sender_id: author.id,
                },
            );
        }

        Ok(ReplyView {
            reply,
            user_name: author.name.clone(),
            nation: author.nation.clone(),
        }
        .into())
    }

    /// Publish on a detached task; the reply never waits on or fails with the broker
    fn notify(&self, reply_id: i64, notification: ReplyNotification) {
        let publisher = self.ctx.publisher_handle();
        tokio::spawn(async move {
            if let Err(e) = publisher.publish_reply(&notification).await {
                warn!(
                    reply_id,
                    receiver_id = notification.receiver_id,
                    error = %e,
                    "Failed to publish reply notification"
                );
            }
        });
    }

    /// Page through a comment's replies, oldest first
    #[instrument(skip(self))]
    pub async fn list(&self, comment_id: i64, page: PageRequest) -> ServiceResult<ReplyListResponse> {
        if self.ctx.comment_repo().find_by_id(comment_id).await?.is_none() {
            return Err(DomainError::CommentNotFound(comment_id).into());
        }

        let page = self.ctx.reply_repo().list(comment_id, page).await?;
        Ok(page.into())
    }

    /// Delete one's own reply
    #[instrument(skip(self, author), fields(author_id = author.id))]
    pub async fn delete(&self, author: &User, reply_id: i64) -> ServiceResult<()> {
        let reply = self
            .ctx
            .reply_repo()
            .find_by_id(reply_id)
            .await?
            .ok_or(DomainError::ReplyNotFound(reply_id))?;

        if reply.user_id != author.id {
            return Err(DomainError::NotReplyAuthor.into());
        }

        self.ctx.reply_repo().delete(reply_id).await?;

        info!(reply_id, comment_id = reply.comment_id, "Reply deleted");
        Ok(())
    }
}
