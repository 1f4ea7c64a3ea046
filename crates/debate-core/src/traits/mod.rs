//! Ports implemented by the infrastructure crates

mod publisher;
mod repositories;
mod translator;

pub use publisher::NotificationPublisher;
pub use repositories::{
    CommentRepository, DebateRepository, ReactionRepository, RepoResult, ReplyRepository,
    TranslationRepository, UserRepository, VoteRepository,
};
pub use translator::Translator;
