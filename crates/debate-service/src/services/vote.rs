//! Vote service
//!
//! Cast, switch, and retract agree/disagree votes and report the tally.

use debate_core::entities::{Debate, User};
use debate_core::error::DomainError;
use debate_core::value_objects::{top_nation, VoteOption};
use tracing::{info, instrument};

use crate::dto::{NationVoteResponse, VoteTallyResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Vote service
pub struct VoteService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> VoteService<'a> {
    /// Create a new VoteService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Apply a vote request: no vote casts, the same option retracts,
    /// the other option switches.
    #[instrument(skip(self, voter), fields(voter_id = voter.id, option = option.as_str()))]
    pub async fn vote(
        &self,
        voter: &User,
        debate_id: i64,
        option: VoteOption,
    ) -> ServiceResult<VoteTallyResponse> {
        let (transition, debate) = self
            .ctx
            .vote_repo()
            .cast(voter.id, debate_id, option)
            .await?;

        info!(
            debate_id,
            ?transition,
            vote_count = debate.vote_count,
            "Vote applied"
        );

        let mut response = self.tally_of(debate).await?;
        response.is_voted_state = transition.stored_option();
        Ok(response)
    }

    /// Current tally with the per-nation breakdown
    #[instrument(skip(self))]
    pub async fn tally(&self, debate_id: i64) -> ServiceResult<VoteTallyResponse> {
        let debate = self
            .ctx
            .debate_repo()
            .find_by_id(debate_id)
            .await?
            .ok_or(DomainError::DebateNotFound(debate_id))?;

        self.tally_of(debate).await
    }

    async fn tally_of(&self, debate: Debate) -> ServiceResult<VoteTallyResponse> {
        let nations = self.ctx.vote_repo().nation_breakdown(debate.id).await?;
        let nation = top_nation(nations.iter().map(|n| (n.nation.as_str(), n.total())));
        let percent = debate.percentages();

        Ok(VoteTallyResponse {
            debate_id: debate.id,
            vote_cnt: debate.vote_count,
            agree_cnt: debate.agree_count,
            disagree_cnt: debate.disagree_count,
            agree_percent: percent.agree,
            disagree_percent: percent.disagree,
            nation,
            nations: nations.iter().map(NationVoteResponse::from).collect(),
            is_voted_state: None,
        })
    }
}
