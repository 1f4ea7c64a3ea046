//! Domain errors - error types for the domain layer

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("User not found: {0}")]
    UserNotFound(i64),

    #[error("Debate not found: {0}")]
    DebateNotFound(i64),

    #[error("Comment not found: {0}")]
    CommentNotFound(i64),

    #[error("Reply not found: {0}")]
    ReplyNotFound(i64),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid option: {0:?}")]
    InvalidOption(String),

    #[error("Content too long: max {max} characters")]
    ContentTooLong { max: usize },

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("Only administrators can publish debates")]
    AdminOnly,

    #[error("Not comment author")]
    NotCommentAuthor,

    #[error("Not reply author")]
    NotReplyAuthor,

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("A different reaction already exists: {existing}")]
    ReactionConflict { existing: String },

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Messaging error: {0}")]
    MessagingError(String),

    #[error("Translation error: {0}")]
    TranslationError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::DebateNotFound(_) => "UNKNOWN_DEBATE",
            Self::CommentNotFound(_) => "UNKNOWN_COMMENT",
            Self::ReplyNotFound(_) => "UNKNOWN_REPLY",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::InvalidOption(_) => "INVALID_OPTION",
            Self::ContentTooLong { .. } => "CONTENT_TOO_LONG",

            // Authorization
            Self::AdminOnly => "ADMIN_ONLY",
            Self::NotCommentAuthor => "NOT_COMMENT_AUTHOR",
            Self::NotReplyAuthor => "NOT_REPLY_AUTHOR",

            // Conflict
            Self::ReactionConflict { .. } => "REACTION_CONFLICT",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::MessagingError(_) => "MESSAGING_ERROR",
            Self::TranslationError(_) => "TRANSLATION_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::UserNotFound(_)
                | Self::DebateNotFound(_)
                | Self::CommentNotFound(_)
                | Self::ReplyNotFound(_)
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_) | Self::InvalidOption(_) | Self::ContentTooLong { .. }
        )
    }

    /// Check if this is an authorization error
    pub fn is_authorization(&self) -> bool {
        matches!(
            self,
            Self::AdminOnly | Self::NotCommentAuthor | Self::NotReplyAuthor
        )
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::ReactionConflict { .. })
    }
}
