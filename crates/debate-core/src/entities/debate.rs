//! Debate entity and its listing projection

use chrono::{DateTime, Utc};

use crate::value_objects::{VotePercent, VoteTally};

/// Debate entity; title/content live in translations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Debate {
    pub id: i64,
    pub category: String,
    pub views: i64,
    pub vote_count: i64,
    pub comment_count: i64,
    pub agree_count: i64,
    pub disagree_count: i64,
    pub created_at: DateTime<Utc>,
}

impl Debate {
    pub fn tally(&self) -> VoteTally {
        VoteTally {
            vote_count: self.vote_count,
            agree_count: self.agree_count,
            disagree_count: self.disagree_count,
        }
    }

    pub fn percentages(&self) -> VotePercent {
        self.tally().percentages()
    }
}

/// Data for a new debate in its source language
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDebate {
    pub category: String,
    pub language: String,
    pub title: String,
    pub content: String,
}

/// Debate as shown in lists: counters plus the localized title
#[derive(Debug, Clone, PartialEq)]
pub struct DebateSummary {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub category: String,
    pub views: i64,
    pub vote_count: i64,
    pub comment_count: i64,
    pub agree_count: i64,
    pub disagree_count: i64,
    pub created_at: DateTime<Utc>,
    pub nation: Option<String>,
}

impl DebateSummary {
    pub fn percentages(&self) -> VotePercent {
        VoteTally::percentages_of(self.agree_count, self.disagree_count)
    }
}
