//! Reply entity <-> model mappers

use debate_core::entities::{Reply, ReplyView};

use crate::models::{ReplyModel, ReplyViewModel};

impl From<ReplyModel> for Reply {
    fn from(model: ReplyModel) -> Self {
        Reply {
            id: model.id,
            comment_id: model.comment_id,
            user_id: model.user_id,
            content: model.content,
            created_at: model.created_at,
        }
    }
}

impl From<ReplyViewModel> for ReplyView {
    fn from(model: ReplyViewModel) -> Self {
        ReplyView {
            reply: model.reply.into(),
            user_name: model.user_name,
            nation: model.nation,
        }
    }
}
