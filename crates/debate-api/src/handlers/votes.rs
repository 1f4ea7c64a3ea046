//! Vote handlers

use axum::{extract::State, Json};
use debate_service::{VoteRequest, VoteService, VoteTallyResponse};
use serde::Deserialize;

use crate::extractors::{AuthUser, QueryParams, ValidatedJson};
use crate::response::ApiResult;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TallyQuery {
    pub debate_id: i64,
}

/// Cast, switch, or retract a vote
///
/// POST /debate/vote
pub async fn vote(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    ValidatedJson(request): ValidatedJson<VoteRequest>,
) -> ApiResult<Json<VoteTallyResponse>> {
    let service = VoteService::new(state.service_context());
    let response = service
        .vote(&user, request.debate_id, request.option)
        .await?;
    Ok(Json(response))
}

/// Tally with per-nation breakdown
///
/// GET /debate/vote?debateId=
pub async fn tally(
    State(state): State<AppState>,
    _auth: AuthUser,
    QueryParams(query): QueryParams<TallyQuery>,
) -> ApiResult<Json<VoteTallyResponse>> {
    let service = VoteService::new(state.service_context());
    Ok(Json(service.tally(query.debate_id).await?))
}
