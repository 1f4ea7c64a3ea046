//! Reply database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for replies table
#[derive(Debug, Clone, FromRow)]
pub struct ReplyModel {
    pub id: i64,
    pub comment_id: i64,
    pub user_id: i64,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// Reply joined with its author
#[derive(Debug, Clone, FromRow)]
pub struct ReplyViewModel {
    #[sqlx(flatten)]
    pub reply: ReplyModel,
    pub user_name: String,
    pub nation: String,
}
