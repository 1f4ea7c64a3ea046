//! Comment entity <-> model mappers

use debate_core::entities::{Comment, CommentView};

use crate::models::{CommentModel, CommentViewModel};

impl From<CommentModel> for Comment {
    fn from(model: CommentModel) -> Self {
        Comment {
            id: model.id,
            debate_id: model.debate_id,
            user_id: model.user_id,
            content: model.content,
            like_count: model.like_count,
            dislike_count: model.dislike_count,
            reply_count: model.reply_count,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl From<CommentViewModel> for CommentView {
    fn from(model: CommentViewModel) -> Self {
        CommentView {
            comment: model.comment.into(),
            user_name: model.user_name,
            nation: model.nation,
            my_reaction: model.my_reaction.and_then(|raw| raw.parse().ok()),
        }
    }
}
