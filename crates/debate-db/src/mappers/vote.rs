//! Vote entity <-> model mappers

use debate_core::entities::{NationVotes, Vote};
use debate_core::error::DomainError;

use super::reaction::parse_stored;
use crate::models::{NationVotesModel, VoteModel};

impl TryFrom<VoteModel> for Vote {
    type Error = DomainError;

    fn try_from(model: VoteModel) -> Result<Self, Self::Error> {
        Ok(Vote {
            id: model.id,
            user_id: model.user_id,
            debate_id: model.debate_id,
            option: parse_stored(&model.option)?,
            created_at: model.created_at,
        })
    }
}

impl From<NationVotesModel> for NationVotes {
    fn from(model: NationVotesModel) -> Self {
        NationVotes {
            nation: model.nation,
            agree: model.agree,
            disagree: model.disagree,
        }
    }
}
