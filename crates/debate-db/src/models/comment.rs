//! Comment database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for comments table
#[derive(Debug, Clone, FromRow)]
pub struct CommentModel {
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

/// Comment joined with author and the viewer's reaction
#[derive(Debug, Clone, FromRow)]
pub struct CommentViewModel {
    #[sqlx(flatten)]
    pub comment: CommentModel,
    pub user_name: String,
    pub nation: String,
    pub my_reaction: Option<String>,
}
