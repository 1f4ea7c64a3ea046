//! Vote database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for votes table
#[derive(Debug, Clone, FromRow)]
pub struct VoteModel {
    pub id: i64,
    pub user_id: i64,
    pub debate_id: i64,
    pub option: String,
    pub created_at: DateTime<Utc>,
}

/// Per-nation vote counts (from query)
#[derive(Debug, Clone, FromRow)]
pub struct NationVotesModel {
    pub nation: String,
    pub agree: i64,
    pub disagree: i64,
}
