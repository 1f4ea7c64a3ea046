//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Request DTOs with validation for API inputs
//! - Response DTOs for serializing API outputs
//! - Mappers for converting domain entities to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

pub use requests::{
    CommentEmotionRequest, CommentRequest, EmotionRequest, ReplyRequest, UpdateCommentRequest,
    VoteRequest, WriteDebateRequest,
};

pub use responses::{
    CommentListResponse, CommentReactionResponse, CommentResponse, DebateDetailResponse,
    DebateListResponse, DebateSummaryResponse, EmotionCountsResponse, HealthChecks,
    HealthResponse, NationVoteResponse, ReadinessResponse, ReplyListResponse, ReplyResponse,
    TodayResponse, VoteTallyResponse,
};
