//! Request DTOs for API endpoints
//!
//! Bodies use camelCase field names. Option fields (vote option, emotion)
//! deserialize from either the Korean label or the English key.

use debate_core::value_objects::{CommentEmotion, Emotion, VoteOption};
use serde::Deserialize;
use validator::Validate;

// ============================================================================
// Debate Requests
// ============================================================================

/// Publish a debate (administrators only)
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct WriteDebateRequest {
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: String,

    #[validate(length(min = 1, max = 10000, message = "Content must be 1-10000 characters"))]
    pub content: String,

    #[validate(length(min = 1, max = 50, message = "Category must be 1-50 characters"))]
    pub category: String,

    /// Source language; defaults to the author's language
    #[validate(length(min = 2, max = 10, message = "Language must be 2-10 characters"))]
    pub language: Option<String>,
}

/// Toggle an emotion on a debate
#[derive(Debug, Clone, Copy, Deserialize, Validate)]
pub struct EmotionRequest {
    pub emotion: Emotion,
}

// ============================================================================
// Vote Requests
// ============================================================================

/// Cast, switch, or retract a vote
#[derive(Debug, Clone, Copy, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct VoteRequest {
    #[validate(range(min = 1, message = "debateId must be positive"))]
    pub debate_id: i64,
    pub option: VoteOption,
}

// ============================================================================
// Comment Requests
// ============================================================================

/// Comment on a debate
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CommentRequest {
    pub debate_id: i64,

    #[validate(length(min = 1, max = 1000, message = "Comment must be 1-1000 characters"))]
    pub content: String,
}

/// Edit a comment
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateCommentRequest {
    #[validate(length(min = 1, max = 1000, message = "Comment must be 1-1000 characters"))]
    pub content: String,
}

/// Like or dislike a comment
#[derive(Debug, Clone, Copy, Deserialize, Validate)]
pub struct CommentEmotionRequest {
    pub emotion: CommentEmotion,
}

// ============================================================================
// Reply Requests
// ============================================================================

/// Reply to a comment
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ReplyRequest {
    pub comment_id: i64,

    #[validate(length(min = 1, max = 1000, message = "Reply must be 1-1000 characters"))]
    pub content: String,
}
