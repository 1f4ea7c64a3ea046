//! Listing filters and sort orders

use serde::{Deserialize, Serialize};

/// Debate category filter
///
/// Categories are free text; the sentinel `전체` (or `all`) disables the filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Category(String);

impl Category {
    pub const ALL: &'static str = "전체";

    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into().trim().to_string())
    }

    /// Whether this category matches every debate
    pub fn is_all(&self) -> bool {
        self.0.is_empty() || self.0 == Self::ALL || self.0.eq_ignore_ascii_case("all")
    }

    /// Category to filter on, `None` when unfiltered
    pub fn filter(&self) -> Option<&str> {
        if self.is_all() {
            None
        } else {
            Some(&self.0)
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Category {
    fn default() -> Self {
        Self(Self::ALL.to_string())
    }
}

impl From<Option<String>> for Category {
    fn from(raw: Option<String>) -> Self {
        raw.map(Self::new).unwrap_or_default()
    }
}

/// Debate listing order (always descending)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DebateSort {
    #[default]
    Latest,
    Views,
    Comments,
    Votes,
}

impl DebateSort {
    /// Parse the client's sort key; unknown keys fall back to latest
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some("view" | "views") => Self::Views,
            Some("comment" | "comments") => Self::Comments,
            Some("vote" | "votes") => Self::Votes,
            _ => Self::Latest,
        }
    }

    /// Column name used in ORDER BY
    pub const fn column(self) -> &'static str {
        match self {
            Self::Latest => "created_at",
            Self::Views => "views",
            Self::Comments => "comment_count",
            Self::Votes => "vote_count",
        }
    }
}

/// Field a search keyword is matched against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchField {
    Title,
    Content,
    #[default]
    Both,
}

impl SearchField {
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some("제목" | "title") => Self::Title,
            Some("내용" | "content") => Self::Content,
            _ => Self::Both,
        }
    }
}

/// Comment listing order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CommentSort {
    #[default]
    Latest,
    Oldest,
    Popular,
}

impl CommentSort {
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some("oldest" | "오래된순") => Self::Oldest,
            Some("popular" | "인기순") => Self::Popular,
            _ => Self::Latest,
        }
    }

    /// ORDER BY clause body
    pub const fn order_by(self) -> &'static str {
        match self {
            Self::Latest => "c.created_at DESC, c.id DESC",
            Self::Oldest => "c.created_at ASC, c.id ASC",
            Self::Popular => "c.like_count DESC, c.created_at DESC, c.id DESC",
        }
    }
}
