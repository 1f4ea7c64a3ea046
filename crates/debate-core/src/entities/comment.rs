//! Comment entity

use chrono::{DateTime, Utc};

use crate::error::DomainError;
use crate::value_objects::CommentEmotion;

/// Maximum comment length in characters
pub const MAX_COMMENT_LENGTH: usize = 1000;

/// Check comment or reply text: non-blank and at most [`MAX_COMMENT_LENGTH`] characters
pub fn validate_content(content: &str) -> Result<(), DomainError> {
    if content.trim().is_empty() {
        return Err(DomainError::ValidationError(
            "content must not be empty".to_string(),
        ));
    }
    if content.chars().count() > MAX_COMMENT_LENGTH {
        return Err(DomainError::ContentTooLong {
            max: MAX_COMMENT_LENGTH,
        });
    }
    Ok(())
}

/// Comment on a debate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id: i64,
    pub debate_id: i64,
    pub user_id: i64,
    pub content: String,
    pub like_count: i64,
    pub dislike_count: i64,
    pub reply_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Comment {
    #[inline]
    pub fn is_author(&self, user_id: i64) -> bool {
        self.user_id == user_id
    }
}

/// Comment joined with its author and the caller's reaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentView {
    pub comment: Comment,
    pub user_name: String,
    pub nation: String,
    pub my_reaction: Option<CommentEmotion>,
}
