//! Localized title/content of a debate

/// One language's version of a debate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslatedDebate {
    pub id: i64,
    pub debate_id: i64,
    pub language: String,
    pub title: String,
    pub content: String,
}
