//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation. Operations that touch a row and a counter
//! together are single methods so the implementation can run them in one
//! transaction.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::entities::{
    Comment, CommentView, Debate, DebateSummary, EmotionCounts, NationVotes, NewDebate, Reply,
    ReplyView, TranslatedDebate, User, Vote,
};
use crate::error::DomainError;
use crate::value_objects::{
    CommentEmotion, CommentSort, DebateSort, Emotion, Page, PageRequest, ReactionToggle,
    SearchField, VoteOption, VoteTransition,
};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<User>>;

    /// Insert or fully replace a user
    async fn upsert(&self, user: &User) -> RepoResult<()>;

    /// Overwrite name/nation/language/role/address; `false` when the user is unknown
    async fn update_profile(&self, user: &User) -> RepoResult<bool>;

    /// Overwrite the preferred language; `false` when the user is unknown
    async fn update_language(&self, id: i64, language: &str) -> RepoResult<bool>;

    /// Delete a user, first subtracting their votes from debate counters.
    /// Returns `false` when the user is unknown.
    async fn delete(&self, id: i64) -> RepoResult<bool>;
}

// ============================================================================
// Debate Repository
// ============================================================================

#[async_trait]
pub trait DebateRepository: Send + Sync {
    /// Create a debate with zeroed counters and its source-language translation
    async fn create(&self, debate: &NewDebate) -> RepoResult<Debate>;

    /// Find debate by ID
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Debate>>;

    /// Bump the view counter
    async fn increment_views(&self, id: i64) -> RepoResult<()>;

    /// Page through debates, localized to `language`
    async fn list(
        &self,
        language: &str,
        category: Option<&str>,
        sort: DebateSort,
        page: PageRequest,
    ) -> RepoResult<Page<DebateSummary>>;

    /// Case-insensitive keyword search within `language`
    async fn search(
        &self,
        language: &str,
        category: Option<&str>,
        sort: DebateSort,
        keyword: &str,
        field: SearchField,
        page: PageRequest,
    ) -> RepoResult<Page<DebateSummary>>;

    /// Debates created in `[from, to)`, newest first
    async fn created_between(
        &self,
        language: &str,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> RepoResult<Vec<DebateSummary>>;

    /// Debate with the most votes among those created since `since`
    async fn most_voted_since(
        &self,
        language: &str,
        since: DateTime<Utc>,
    ) -> RepoResult<Option<DebateSummary>>;

    /// Debate with the smallest agree/disagree gap among voted debates created since `since`
    async fn most_balanced_since(
        &self,
        language: &str,
        since: DateTime<Utc>,
    ) -> RepoResult<Option<DebateSummary>>;

    /// Debates a user voted on, newest vote first
    async fn voted_by(
        &self,
        language: &str,
        user_id: i64,
        page: PageRequest,
    ) -> RepoResult<Page<DebateSummary>>;
}

// ============================================================================
// Translation Repository
// ============================================================================

#[async_trait]
pub trait TranslationRepository: Send + Sync {
    /// Translation for `language`, falling back to the source text
    async fn find_for(&self, debate_id: i64, language: &str)
        -> RepoResult<Option<TranslatedDebate>>;

    /// The first-inserted (source) translation
    async fn find_source(&self, debate_id: i64) -> RepoResult<Option<TranslatedDebate>>;

    /// Insert or replace the translation for one language
    async fn upsert(
        &self,
        debate_id: i64,
        language: &str,
        title: &str,
        content: &str,
    ) -> RepoResult<TranslatedDebate>;
}

// ============================================================================
// Vote Repository
// ============================================================================

#[async_trait]
pub trait VoteRepository: Send + Sync {
    /// Find a user's vote on a debate
    async fn find(&self, user_id: i64, debate_id: i64) -> RepoResult<Option<Vote>>;

    /// Apply a vote request and the matching counter deltas atomically.
    /// Returns the transition taken and the debate after the update.
    async fn cast(
        &self,
        user_id: i64,
        debate_id: i64,
        option: VoteOption,
    ) -> RepoResult<(VoteTransition, Debate)>;

    /// Per-nation vote counts for a debate
    async fn nation_breakdown(&self, debate_id: i64) -> RepoResult<Vec<NationVotes>>;
}

// ============================================================================
// Reaction Repository
// ============================================================================

#[async_trait]
pub trait ReactionRepository: Send + Sync {
    /// The caller's emotion on a debate
    async fn find_debate_reaction(&self, user_id: i64, debate_id: i64)
        -> RepoResult<Option<Emotion>>;

    /// Toggle a debate emotion under the exclusive rule
    async fn toggle_debate_reaction(
        &self,
        user_id: i64,
        debate_id: i64,
        emotion: Emotion,
    ) -> RepoResult<ReactionToggle<Emotion>>;

    /// Count emotions on a debate
    async fn emotion_counts(&self, debate_id: i64) -> RepoResult<EmotionCounts>;

    /// The caller's reaction on a comment
    async fn find_comment_reaction(
        &self,
        user_id: i64,
        comment_id: i64,
    ) -> RepoResult<Option<CommentEmotion>>;

    /// Toggle a comment like/dislike and update the comment counters
    async fn toggle_comment_reaction(
        &self,
        user_id: i64,
        comment_id: i64,
        emotion: CommentEmotion,
    ) -> RepoResult<(ReactionToggle<CommentEmotion>, Comment)>;
}

// ============================================================================
// Comment Repository
// ============================================================================

#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Create a comment and bump the debate's comment counter
    async fn create(&self, debate_id: i64, user_id: i64, content: &str) -> RepoResult<Comment>;

    /// Find comment by ID
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Comment>>;

    /// Page through a debate's comments with the viewer's reaction state
    async fn list(
        &self,
        debate_id: i64,
        viewer_id: i64,
        sort: CommentSort,
        page: PageRequest,
    ) -> RepoResult<Page<CommentView>>;

    /// Replace the content
    async fn update_content(&self, id: i64, content: &str) -> RepoResult<Comment>;

    /// Delete a comment with its reactions and replies; decrements the debate's counter
    async fn delete(&self, id: i64) -> RepoResult<()>;
}

// ============================================================================
// Reply Repository
// ============================================================================

#[async_trait]
pub trait ReplyRepository: Send + Sync {
    /// Create a reply and bump the comment's reply counter
    async fn create(&self, comment_id: i64, user_id: i64, content: &str) -> RepoResult<Reply>;

    /// Find reply by ID
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Reply>>;

    /// Page through a comment's replies, oldest first
    async fn list(&self, comment_id: i64, page: PageRequest) -> RepoResult<Page<ReplyView>>;

    /// Delete a reply and decrement the comment's reply counter
    async fn delete(&self, id: i64) -> RepoResult<()>;
}
