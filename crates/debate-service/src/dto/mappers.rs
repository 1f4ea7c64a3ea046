//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use debate_core::entities::{CommentView, DebateSummary, EmotionCounts, NationVotes, ReplyView};
use debate_core::value_objects::Page;

use super::responses::{
    CommentListResponse, CommentResponse, DebateListResponse, DebateSummaryResponse,
    EmotionCountsResponse, NationVoteResponse, ReplyListResponse, ReplyResponse,
};

// ============================================================================
// Debate Mappers
// ============================================================================

impl From<&DebateSummary> for DebateSummaryResponse {
    fn from(debate: &DebateSummary) -> Self {
        let percent = debate.percentages();
        Self {
            debate_id: debate.id,
            title: debate.title.clone(),
            views: debate.views,
            vote_cnt: debate.vote_count,
            comment_cnt: debate.comment_count,
            agree_percent: percent.agree,
            disagree_percent: percent.disagree,
            created_at: debate.created_at,
            category: debate.category.clone(),
            nation: debate.nation.clone(),
        }
    }
}

impl From<DebateSummary> for DebateSummaryResponse {
    fn from(debate: DebateSummary) -> Self {
        Self::from(&debate)
    }
}

impl From<Page<DebateSummary>> for DebateListResponse {
    fn from(page: Page<DebateSummary>) -> Self {
        let page = page.map(DebateSummaryResponse::from);
        Self {
            debate_list: page.items,
            total: page.total,
        }
    }
}

impl From<EmotionCounts> for EmotionCountsResponse {
    fn from(counts: EmotionCounts) -> Self {
        Self {
            like: counts.like,
            dislike: counts.dislike,
            sad: counts.sad,
            angry: counts.angry,
            hm: counts.unsure,
        }
    }
}

// ============================================================================
// Vote Mappers
// ============================================================================

impl From<&NationVotes> for NationVoteResponse {
    fn from(votes: &NationVotes) -> Self {
        Self {
            nation: votes.nation.clone(),
            agree_cnt: votes.agree,
            disagree_cnt: votes.disagree,
        }
    }
}

// ============================================================================
// Comment Mappers
// ============================================================================

impl From<CommentView> for CommentResponse {
    fn from(view: CommentView) -> Self {
        let comment = view.comment;
        Self {
            comment_id: comment.id,
            debate_id: comment.debate_id,
            like: comment.like_count,
            dislike: comment.dislike_count,
            reply: comment.reply_count,
            is_state: view.my_reaction,
            content: comment.content,
            user_id: comment.user_id,
            user_name: view.user_name,
            nation: view.nation,
            created_at: comment.created_at,
            updated_at: comment.updated_at,
        }
    }
}

impl From<Page<CommentView>> for CommentListResponse {
    fn from(page: Page<CommentView>) -> Self {
        let page = page.map(CommentResponse::from);
        Self {
            comment_list: page.items,
            total: page.total,
        }
    }
}

// ============================================================================
// Reply Mappers
// ============================================================================

impl From<ReplyView> for ReplyResponse {
    fn from(view: ReplyView) -> Self {
        let reply = view.reply;
        Self {
            reply_id: reply.id,
            comment_id: reply.comment_id,
            content: reply.content,
            user_id: reply.user_id,
            user_name: view.user_name,
            nation: view.nation,
            created_at: reply.created_at,
        }
    }
}

impl From<Page<ReplyView>> for ReplyListResponse {
    fn from(page: Page<ReplyView>) -> Self {
        let page = page.map(ReplyResponse::from);
        Self {
            reply_list: page.items,
            total: page.total,
        }
    }
}
