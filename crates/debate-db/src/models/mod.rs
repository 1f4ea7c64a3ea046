//! Database models - SQLx-compatible structs for PostgreSQL tables

mod comment;
mod debate;
mod reaction;
mod reply;
mod user;
mod vote;

pub use comment::{CommentModel, CommentViewModel};
pub use debate::{DebateModel, DebateSummaryModel, TranslationModel};
pub use reaction::{EmotionCountModel, ReactionModel};
pub use reply::{ReplyModel, ReplyViewModel};
pub use user::UserModel;
pub use vote::{NationVotesModel, VoteModel};
