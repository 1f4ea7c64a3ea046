//! Reaction database models (debate emotions and comment likes share a shape)

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Row of debate_reactions or comment_reactions
#[derive(Debug, Clone, FromRow)]
pub struct ReactionModel {
    pub id: i64,
    pub user_id: i64,
    pub target_id: i64,
    pub emotion: String,
    pub created_at: DateTime<Utc>,
}

/// Aggregated emotion count (from query)
#[derive(Debug, Clone, FromRow)]
pub struct EmotionCountModel {
    pub emotion: String,
    pub count: i64,
}
