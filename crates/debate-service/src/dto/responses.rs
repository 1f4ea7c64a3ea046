//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` with camelCase field names.
//! Option fields are rendered as their Korean labels.

use chrono::{DateTime, Utc};
use debate_core::value_objects::{CommentEmotion, Emotion, VoteOption};
use serde::Serialize;

// ============================================================================
// Debate Responses
// ============================================================================

/// One row of a debate listing
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DebateSummaryResponse {
    pub debate_id: i64,
    pub title: String,
    pub views: i64,
    pub vote_cnt: i64,
    pub comment_cnt: i64,
    pub agree_percent: f64,
    pub disagree_percent: f64,
    pub created_at: DateTime<Utc>,
    pub category: String,
    /// Nation that cast the most votes
    pub nation: Option<String>,
}

/// A page of debates
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DebateListResponse {
    pub debate_list: Vec<DebateSummaryResponse>,
    pub total: i64,
}

/// Today's debates plus the weekly rankings
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TodayResponse {
    pub today_debate_list: Vec<DebateSummaryResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_debate: Option<DebateSummaryResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub balanced_debate: Option<DebateSummaryResponse>,
}

/// Emotion counters of a debate
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct EmotionCountsResponse {
    pub like: i64,
    pub dislike: i64,
    pub sad: i64,
    pub angry: i64,
    /// 글쎄요
    pub hm: i64,
}

/// Full debate with the caller's state
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DebateDetailResponse {
    pub debate_id: i64,
    pub title: String,
    pub content: String,
    pub views: i64,
    pub vote_cnt: i64,
    pub comment_cnt: i64,
    pub agree_percent: f64,
    pub disagree_percent: f64,
    pub created_at: DateTime<Utc>,
    pub category: String,
    pub nation: Option<String>,
    #[serde(flatten)]
    pub emotions: EmotionCountsResponse,
    /// The caller's emotion
    pub is_state: Option<Emotion>,
    /// The caller's vote
    pub is_voted_state: Option<VoteOption>,
}

// ============================================================================
// Vote Responses
// ============================================================================

/// Votes of one nation
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NationVoteResponse {
    pub nation: String,
    pub agree_cnt: i64,
    pub disagree_cnt: i64,
}

/// Vote counters and percentages of a debate
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VoteTallyResponse {
    pub debate_id: i64,
    pub vote_cnt: i64,
    pub agree_cnt: i64,
    pub disagree_cnt: i64,
    pub agree_percent: f64,
    pub disagree_percent: f64,
    pub nation: Option<String>,
    pub nations: Vec<NationVoteResponse>,
    /// The caller's vote after the request; absent on plain reads
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_voted_state: Option<VoteOption>,
}

// ============================================================================
// Comment Responses
// ============================================================================

/// Comment with its author and the caller's reaction
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentResponse {
    pub comment_id: i64,
    pub debate_id: i64,
    pub like: i64,
    pub dislike: i64,
    pub reply: i64,
    pub is_state: Option<CommentEmotion>,
    pub content: String,
    pub user_id: i64,
    pub user_name: String,
    pub nation: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A page of comments
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentListResponse {
    pub comment_list: Vec<CommentResponse>,
    pub total: i64,
}

/// Comment counters after a like/dislike toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentReactionResponse {
    pub like: i64,
    pub dislike: i64,
    pub is_state: Option<CommentEmotion>,
}

// ============================================================================
// Reply Responses
// ============================================================================

/// Reply with its author
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplyResponse {
    pub reply_id: i64,
    pub comment_id: i64,
    pub content: String,
    pub user_id: i64,
    pub user_name: String,
    pub nation: String,
    pub created_at: DateTime<Utc>,
}

/// A page of replies
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplyListResponse {
    pub reply_list: Vec<ReplyResponse>,
    pub total: i64,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Basic health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each dependency
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: String,
}

impl ReadinessResponse {
    pub fn ready(database_healthy: bool) -> Self {
        Self {
            status: if database_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: if database_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }

    pub fn is_ready(&self) -> bool {
        self.status == "ready"
    }
}
