//! Vote entity and per-nation breakdown

use chrono::{DateTime, Utc};

use crate::value_objects::VoteOption;

/// One user's vote on one debate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vote {
    pub id: i64,
    pub user_id: i64,
    pub debate_id: i64,
    pub option: VoteOption,
    pub created_at: DateTime<Utc>,
}

/// Agree/disagree counts from voters of one nation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NationVotes {
    pub nation: String,
    pub agree: i64,
    pub disagree: i64,
}

impl NationVotes {
    #[inline]
    pub fn total(&self) -> i64 {
        self.agree + self.disagree
    }
}
