//! Reply entity - a response to a comment

use chrono::{DateTime, Utc};

/// Reply to a comment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub id: i64,
    pub comment_id: i64,
    pub user_id: i64,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// Reply joined with its author
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplyView {
    pub reply: Reply,
    pub user_name: String,
    pub nation: String,
}
