//! Debate reaction entity - an emotion attached to a debate

use chrono::{DateTime, Utc};

use crate::value_objects::Emotion;

/// One user's emotion on one debate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DebateReaction {
    pub id: i64,
    pub user_id: i64,
    pub debate_id: i64,
    pub emotion: Emotion,
    pub created_at: DateTime<Utc>,
}

/// Per-emotion counts for a debate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EmotionCounts {
    pub like: i64,
    pub dislike: i64,
    pub sad: i64,
    pub angry: i64,
    pub unsure: i64,
}

impl EmotionCounts {
    /// Build from `(emotion, count)` rows, ignoring missing emotions
    pub fn from_rows<I>(rows: I) -> Self
    where
        I: IntoIterator<Item = (Emotion, i64)>,
    {
        let mut counts = Self::default();
        for (emotion, count) in rows {
            *counts.slot(emotion) += count;
        }
        counts
    }

    pub fn get(&self, emotion: Emotion) -> i64 {
        match emotion {
            Emotion::Like => self.like,
            Emotion::Dislike => self.dislike,
            Emotion::Sad => self.sad,
            Emotion::Angry => self.angry,
            Emotion::Unsure => self.unsure,
        }
    }

    fn slot(&mut self, emotion: Emotion) -> &mut i64 {
        match emotion {
            Emotion::Like => &mut self.like,
            Emotion::Dislike => &mut self.dislike,
            Emotion::Sad => &mut self.sad,
            Emotion::Angry => &mut self.angry,
            Emotion::Unsure => &mut self.unsure,
        }
    }
}
