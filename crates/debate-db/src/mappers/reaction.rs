//! Reaction entity <-> model mappers

use std::str::FromStr;

use debate_core::entities::DebateReaction;
use debate_core::error::DomainError;

use crate::models::ReactionModel;

/// Parse an enum stored as its key; a bad key means the row is corrupt
pub fn parse_stored<T>(raw: &str) -> Result<T, DomainError>
where
    T: FromStr<Err = DomainError>,
{
    raw.parse()
        .map_err(|_| DomainError::DatabaseError(format!("unexpected stored value {raw:?}")))
}

impl TryFrom<ReactionModel> for DebateReaction {
    type Error = DomainError;

    fn try_from(model: ReactionModel) -> Result<Self, Self::Error> {
        Ok(DebateReaction {
            id: model.id,
            user_id: model.user_id,
            debate_id: model.target_id,
            emotion: parse_stored(&model.emotion)?,
            created_at: model.created_at,
        })
    }
}
