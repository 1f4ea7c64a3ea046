//! Domain entities - core business objects

mod comment;
mod debate;
mod reaction;
mod reply;
mod translation;
mod user;
mod vote;

pub use comment::{validate_content, Comment, CommentView, MAX_COMMENT_LENGTH};
pub use debate::{Debate, DebateSummary, NewDebate};
pub use reaction::{DebateReaction, EmotionCounts};
pub use reply::{Reply, ReplyView};
pub use translation::TranslatedDebate;
pub use user::{User, ADMIN_ROLE};
pub use vote::{NationVotes, Vote};
