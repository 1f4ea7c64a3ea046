//! Comment service
//!
//! Comments on debates, their like/dislike toggle, and author-only edits.

use debate_core::entities::{validate_content, Comment, CommentView, User};
use debate_core::error::DomainError;
use debate_core::value_objects::{CommentEmotion, CommentSort, PageRequest, ReactionToggle};
use tracing::{info, instrument};

use crate::dto::{CommentListResponse, CommentReactionResponse, CommentResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Comment service
pub struct CommentService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CommentService<'a> {
    /// Create a new CommentService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Comment on a debate
    #[instrument(skip(self, author, content), fields(author_id = author.id))]
    pub async fn add(
        &self,
        author: &User,
        debate_id: i64,
        content: &str,
    ) -> ServiceResult<CommentResponse> {
        validate_content(content)?;

        let comment = self
            .ctx
            .comment_repo()
            .create(debate_id, author.id, content)
            .await?;

        info!(comment_id = comment.id, debate_id, "Comment created");

        Ok(view_of(comment, author, None).into())
    }

    /// Page through a debate's comments
    #[instrument(skip(self, viewer), fields(viewer_id = viewer.id))]
    pub async fn list(
        &self,
        viewer: &User,
        debate_id: i64,
        sort: Option<&str>,
        page: PageRequest,
    ) -> ServiceResult<CommentListResponse> {
        if self.ctx.debate_repo().find_by_id(debate_id).await?.is_none() {
            return Err(DomainError::DebateNotFound(debate_id).into());
        }

        let page = self
            .ctx
            .comment_repo()
            .list(debate_id, viewer.id, CommentSort::parse(sort), page)
            .await?;

        Ok(page.into())
    }

    /// Replace the content of one's own comment
    #[instrument(skip(self, author, content), fields(author_id = author.id))]
    pub async fn update(
        &self,
        author: &User,
        comment_id: i64,
        content: &str,
    ) -> ServiceResult<CommentResponse> {
        self.owned_comment(author, comment_id).await?;
        validate_content(content)?;

        let updated = self
            .ctx
            .comment_repo()
            .update_content(comment_id, content)
            .await?;
        let my_reaction = self
            .ctx
            .reaction_repo()
            .find_comment_reaction(author.id, comment_id)
            .await?;

        info!(comment_id, "Comment updated");

        Ok(view_of(updated, author, my_reaction).into())
    }

    /// Delete one's own comment with its reactions and replies
    #[instrument(skip(self, author), fields(author_id = author.id))]
    pub async fn delete(&self, author: &User, comment_id: i64) -> ServiceResult<()> {
        let comment = self.owned_comment(author, comment_id).await?;

        self.ctx.comment_repo().delete(comment_id).await?;

        info!(comment_id, debate_id = comment.debate_id, "Comment deleted");
        Ok(())
    }

    /// Toggle like/dislike; a different existing reaction is a conflict
    #[instrument(skip(self, viewer), fields(viewer_id = viewer.id, emotion = emotion.as_str()))]
    pub async fn react(
        &self,
        viewer: &User,
        comment_id: i64,
        emotion: CommentEmotion,
    ) -> ServiceResult<CommentReactionResponse> {
        let (toggle, comment) = self
            .ctx
            .reaction_repo()
            .toggle_comment_reaction(viewer.id, comment_id, emotion)
            .await?;

        let is_state = match toggle {
            ReactionToggle::Add(added) => Some(added),
            ReactionToggle::Remove(_) => None,
            ReactionToggle::Reject { existing } => {
                return Err(DomainError::ReactionConflict {
                    existing: existing.label().to_string(),
                }
                .into());
            }
        };

        info!(comment_id, ?toggle, "Comment reaction toggled");

        Ok(CommentReactionResponse {
            like: comment.like_count,
            dislike: comment.dislike_count,
            is_state,
        })
    }

    async fn owned_comment(&self, author: &User, comment_id: i64) -> ServiceResult<Comment> {
        let comment = self
            .ctx
            .comment_repo()
            .find_by_id(comment_id)
            .await?
            .ok_or(DomainError::CommentNotFound(comment_id))?;

        if !comment.is_author(author.id) {
            return Err(DomainError::NotCommentAuthor.into());
        }
        Ok(comment)
    }
}

fn view_of(comment: Comment, author: &User, my_reaction: Option<CommentEmotion>) -> CommentView {
    CommentView {
        comment,
        user_name: author.name.clone(),
        nation: author.nation.clone(),
        my_reaction,
    }
}
