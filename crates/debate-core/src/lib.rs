//! # debate-core
//!
//! Domain layer containing entities, value objects, vote/reaction arithmetic,
//! repository traits, and the event payloads exchanged with the identity service.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod events;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    Comment, CommentView, Debate, DebateReaction, DebateSummary, EmotionCounts, NationVotes,
    NewDebate, Reply, ReplyView, TranslatedDebate, User, Vote,
};
pub use error::DomainError;
pub use events::{ReplyNotification, UserEvent, UserTopic};
pub use traits::{
    CommentRepository, DebateRepository, NotificationPublisher, ReactionRepository, RepoResult,
    ReplyRepository, TranslationRepository, Translator, UserRepository, VoteRepository,
};
pub use value_objects::{
    top_nation, Category, CommentEmotion, CommentSort, DebateSort, Emotion, Page, PageRequest,
    ReactionToggle, SearchField, VoteOption, VotePercent, VoteTally, VoteTransition,
};
