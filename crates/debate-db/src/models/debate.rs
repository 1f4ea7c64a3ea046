//! Debate and translation database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for debates table
#[derive(Debug, Clone, FromRow)]
pub struct DebateModel {
    pub id: i64,
    pub category: String,
    pub views: i64,
    pub vote_count: i64,
    pub comment_count: i64,
    pub agree_count: i64,
    pub disagree_count: i64,
    pub created_at: DateTime<Utc>,
}

/// Database model for translated_debates table
#[derive(Debug, Clone, FromRow)]
pub struct TranslationModel {
    pub id: i64,
    pub debate_id: i64,
    pub language: String,
    pub title: String,
    pub content: String,
}

/// Debate joined with its localized text and top-voting nation
#[derive(Debug, Clone, FromRow)]
pub struct DebateSummaryModel {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub category: String,
    pub views: i64,
    pub vote_count: i64,
    pub comment_count: i64,
    pub agree_count: i64,
    pub disagree_count: i64,
    pub created_at: DateTime<Utc>,
    pub nation: Option<String>,
}
