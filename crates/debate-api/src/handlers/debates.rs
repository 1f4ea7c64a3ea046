//! Debate handlers
//!
//! Endpoints for publishing, browsing, searching, and reacting to debates.

use axum::{extract::State, Json};
use debate_service::{
    DebateDetailResponse, DebateListResponse, DebateService, DebateSummaryResponse,
    EmotionCountsResponse, EmotionRequest, TodayResponse, WriteDebateRequest,
};
use serde::Deserialize;

use crate::extractors::{AuthUser, IdPath, Pagination, QueryParams, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// `sort` and `category` for listings
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    pub sort: Option<String>,
    pub category: Option<String>,
}

/// Search parameters
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchQuery {
    pub keyword: String,
    pub search_by: Option<String>,
    pub sort: Option<String>,
    pub category: Option<String>,
}

/// Whose votes to list; defaults to the caller
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VotedQuery {
    pub user_id: Option<i64>,
}

/// Publish a debate (admin only)
///
/// POST /debate
pub async fn write_debate(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    ValidatedJson(request): ValidatedJson<WriteDebateRequest>,
) -> ApiResult<Created<Json<DebateSummaryResponse>>> {
    let service = DebateService::new(state.service_context());
    let response = service.write(&user, request).await?;
    Ok(Created(Json(response)))
}

/// List debates
///
/// GET /debate?page=&size=&sort=&category=
pub async fn list_debates(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Pagination(page): Pagination,
    QueryParams(query): QueryParams<ListQuery>,
) -> ApiResult<Json<DebateListResponse>> {
    let service = DebateService::new(state.service_context());
    let response = service
        .list(&user, page, query.sort.as_deref(), query.category)
        .await?;
    Ok(Json(response))
}

/// Today's debates plus the weekly rankings
///
/// GET /debate/today
pub async fn today(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
) -> ApiResult<Json<TodayResponse>> {
    let service = DebateService::new(state.service_context());
    Ok(Json(service.today(&user).await?))
}

/// Keyword search
///
/// GET /debate/search?keyword=&searchBy=&page=&size=&sort=&category=
pub async fn search_debates(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Pagination(page): Pagination,
    QueryParams(query): QueryParams<SearchQuery>,
) -> ApiResult<Json<DebateListResponse>> {
    let service = DebateService::new(state.service_context());
    let response = service
        .search(
            &user,
            page,
            query.sort.as_deref(),
            query.category,
            &query.keyword,
            query.search_by.as_deref(),
        )
        .await?;
    Ok(Json(response))
}

/// Debates a user voted on
///
/// GET /debate/voted?userId=&page=&size=
pub async fn voted_debates(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Pagination(page): Pagination,
    QueryParams(query): QueryParams<VotedQuery>,
) -> ApiResult<Json<DebateListResponse>> {
    let target = query.user_id.unwrap_or(user.id);
    let service = DebateService::new(state.service_context());
    Ok(Json(service.voted(&user, target, page).await?))
}

/// Debate detail; counts a view
///
/// GET /debate/{debate_id}
pub async fn get_debate(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    IdPath(debate_id): IdPath,
) -> ApiResult<Json<DebateDetailResponse>> {
    let service = DebateService::new(state.service_context());
    Ok(Json(service.detail(&user, debate_id).await?))
}

/// Toggle an emotion
///
/// POST /debate/{debate_id}/emotion
pub async fn react_to_debate(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    IdPath(debate_id): IdPath,
    ValidatedJson(request): ValidatedJson<EmotionRequest>,
) -> ApiResult<Json<EmotionCountsResponse>> {
    let service = DebateService::new(state.service_context());
    let response = service.react(&user, debate_id, request.emotion).await?;
    Ok(Json(response))
}
