//! Test fixtures and data generators
//!
//! Request bodies use the same camelCase shape as a real client; response
//! types only declare the fields the tests look at.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicI64, Ordering};

/// Counter for unique test data
static COUNTER: AtomicI64 = AtomicI64::new(1);

/// An id no other test run is likely to have used
pub fn unique_id() -> i64 {
    let base = chrono::Utc::now().timestamp_micros() % 1_000_000_000_000;
    base * 1000 + COUNTER.fetch_add(1, Ordering::SeqCst) % 1000
}

// ============================================================================
// Requests
// ============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WriteDebateRequest {
    pub title: String,
    pub content: String,
    pub category: String,
    pub language: Option<String>,
}

impl WriteDebateRequest {
    pub fn unique(category: &str) -> Self {
        let id = unique_id();
        Self {
            title: format!("토론 {id}"),
            content: format!("토론 본문 {id}"),
            category: category.to_string(),
            language: Some("ko".to_string()),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VoteRequest {
    pub debate_id: i64,
    pub option: String,
}

impl VoteRequest {
    pub fn new(debate_id: i64, option: &str) -> Self {
        Self {
            debate_id,
            option: option.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct EmotionRequest {
    pub emotion: String,
}

impl EmotionRequest {
    pub fn new(emotion: &str) -> Self {
        Self {
            emotion: emotion.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentRequest {
    pub debate_id: i64,
    pub content: String,
}

#[derive(Debug, Serialize)]
pub struct UpdateCommentRequest {
    pub content: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplyRequest {
    pub comment_id: i64,
    pub content: String,
}

// ============================================================================
// Responses
// ============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DebateSummary {
    pub debate_id: i64,
    pub title: String,
    pub views: i64,
    pub vote_cnt: i64,
    pub comment_cnt: i64,
    pub agree_percent: f64,
    pub disagree_percent: f64,
    pub category: String,
    pub nation: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DebateList {
    pub debate_list: Vec<DebateSummary>,
    pub total: i64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodayDebates {
    pub today_debate_list: Vec<DebateSummary>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DebateDetail {
    pub debate_id: i64,
    pub title: String,
    pub content: String,
    pub views: i64,
    pub vote_cnt: i64,
    pub like: i64,
    pub is_state: Option<String>,
    pub is_voted_state: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct EmotionCounts {
    pub like: i64,
    pub dislike: i64,
    pub sad: i64,
    pub angry: i64,
    pub hm: i64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NationVotes {
    pub nation: String,
    pub agree_cnt: i64,
    pub disagree_cnt: i64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoteTally {
    pub debate_id: i64,
    pub vote_cnt: i64,
    pub agree_cnt: i64,
    pub disagree_cnt: i64,
    pub agree_percent: f64,
    pub disagree_percent: f64,
    pub nation: Option<String>,
    pub nations: Vec<NationVotes>,
    pub is_voted_state: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub comment_id: i64,
    pub debate_id: i64,
    pub like: i64,
    pub dislike: i64,
    pub reply: i64,
    pub is_state: Option<String>,
    pub content: String,
    pub user_id: i64,
    pub nation: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentList {
    pub comment_list: Vec<Comment>,
    pub total: i64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentReaction {
    pub like: i64,
    pub dislike: i64,
    pub is_state: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reply {
    pub reply_id: i64,
    pub comment_id: i64,
    pub content: String,
    pub user_id: i64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplyList {
    pub reply_list: Vec<Reply>,
    pub total: i64,
}

/// `{"error": {"code": ..., "message": ...}}`
#[derive(Debug, Deserialize)]
pub struct ErrorEnvelope {
    pub error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}
