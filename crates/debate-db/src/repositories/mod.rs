//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in debate-core.
//! Each repository handles database operations for a specific domain entity.

mod comment;
mod debate;
mod error;
mod reaction;
mod reply;
mod translation;
mod user;
mod vote;

pub use comment::PgCommentRepository;
pub use debate::PgDebateRepository;
pub use reaction::PgReactionRepository;
pub use reply::PgReplyRepository;
pub use translation::PgTranslationRepository;
pub use user::PgUserRepository;
pub use vote::PgVoteRepository;
