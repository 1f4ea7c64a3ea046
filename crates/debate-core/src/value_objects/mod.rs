//! Value objects - immutable types that represent domain concepts

mod options;
mod paging;
mod query;
mod tally;

pub use options::{CommentEmotion, Emotion, VoteOption};
pub use paging::{Page, PageRequest};
pub use query::{Category, CommentSort, DebateSort, SearchField};
pub use tally::{top_nation, ReactionToggle, VotePercent, VoteTally, VoteTransition};
