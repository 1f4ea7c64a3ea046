//! Debate entity <-> model mappers

use debate_core::entities::{Debate, DebateSummary, TranslatedDebate};

use crate::models::{DebateModel, DebateSummaryModel, TranslationModel};

impl From<DebateModel> for Debate {
    fn from(model: DebateModel) -> Self {
        Debate {
            id: model.id,
            category: model.category,
            views: model.views,
            vote_count: model.vote_count,
            comment_count: model.comment_count,
            agree_count: model.agree_count,
            disagree_count: model.disagree_count,
            created_at: model.created_at,
        }
    }
}

impl From<TranslationModel> for TranslatedDebate {
    fn from(model: TranslationModel) -> Self {
        TranslatedDebate {
            id: model.id,
            debate_id: model.debate_id,
            language: model.language,
            title: model.title,
            content: model.content,
        }
    }
}

impl From<DebateSummaryModel> for DebateSummary {
    fn from(model: DebateSummaryModel) -> Self {
        DebateSummary {
            id: model.id,
            title: model.title,
            content: model.content,
            category: model.category,
            views: model.views,
            vote_count: model.vote_count,
            comment_count: model.comment_count,
            agree_count: model.agree_count,
            disagree_count: model.disagree_count,
            created_at: model.created_at,
            nation: model.nation.filter(|n| !n.is_empty()),
        }
    }
}
