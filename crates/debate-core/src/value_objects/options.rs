//! Choice enums shared by votes and reactions
//!
//! Each option has two spellings: a stable storage key (`as_str`) used in the
//! database, and the Korean label (`label`) the web client sends and expects.
//! Parsing accepts either spelling.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

// ============================================================================
// Vote option
// ============================================================================

/// Agree/disagree stance on a debate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VoteOption {
    Agree,
    Disagree,
}

impl VoteOption {
    pub const ALL: [Self; 2] = [Self::Agree, Self::Disagree];

    /// Storage key
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Agree => "agree",
            Self::Disagree => "disagree",
        }
    }

    /// Client-facing label
    pub const fn label(self) -> &'static str {
        match self {
            Self::Agree => "찬성",
            Self::Disagree => "반대",
        }
    }
}

impl FromStr for VoteOption {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "agree" | "찬성" => Ok(Self::Agree),
            "disagree" | "반대" => Ok(Self::Disagree),
            other => Err(DomainError::InvalidOption(other.to_string())),
        }
    }
}

// ============================================================================
// Debate emotion
// ============================================================================

/// Emotion a user can attach to a debate (one per user per debate)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Emotion {
    Like,
    Dislike,
    Sad,
    Angry,
    Unsure,
}

impl Emotion {
    pub const ALL: [Self; 5] = [
        Self::Like,
        Self::Dislike,
        Self::Sad,
        Self::Angry,
        Self::Unsure,
    ];

    /// Storage key
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Like => "like",
            Self::Dislike => "dislike",
            Self::Sad => "sad",
            Self::Angry => "angry",
            Self::Unsure => "unsure",
        }
    }

    /// Client-facing label
    pub const fn label(self) -> &'static str {
        match self {
            Self::Like => "좋아요",
            Self::Dislike => "싫어요",
            Self::Sad => "슬퍼요",
            Self::Angry => "화나요",
            Self::Unsure => "글쎄요",
        }
    }
}

impl FromStr for Emotion {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "like" | "좋아요" => Ok(Self::Like),
            "dislike" | "싫어요" => Ok(Self::Dislike),
            "sad" | "슬퍼요" => Ok(Self::Sad),
            "angry" | "화나요" => Ok(Self::Angry),
            "unsure" | "hm" | "글쎄요" => Ok(Self::Unsure),
            other => Err(DomainError::InvalidOption(other.to_string())),
        }
    }
}

// ============================================================================
// Comment emotion
// ============================================================================

/// Like/dislike on a comment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommentEmotion {
    Like,
    Dislike,
}

impl CommentEmotion {
    /// Storage key
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Like => "like",
            Self::Dislike => "dislike",
        }
    }

    /// Client-facing label
    pub const fn label(self) -> &'static str {
        match self {
            Self::Like => "좋아요",
            Self::Dislike => "싫어요",
        }
    }
}

impl FromStr for CommentEmotion {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "like" | "좋아요" => Ok(Self::Like),
            "dislike" | "싫어요" => Ok(Self::Dislike),
            other => Err(DomainError::InvalidOption(other.to_string())),
        }
    }
}

// ============================================================================
// Shared trait impls
// ============================================================================

macro_rules! labelled_option {
    ($ty:ty) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }

        // Serialize as the client label
        impl Serialize for $ty {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: Serializer,
            {
                serializer.serialize_str(self.label())
            }
        }

        // Deserialize from either label or storage key
        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: Deserializer<'de>,
            {
                let raw = String::deserialize(deserializer)?;
                raw.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

labelled_option!(VoteOption);
labelled_option!(Emotion);
labelled_option!(CommentEmotion);
