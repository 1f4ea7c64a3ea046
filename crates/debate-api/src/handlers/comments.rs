//! Comment handlers

use axum::{extract::State, Json};
use debate_service::{
    CommentEmotionRequest, CommentListResponse, CommentReactionResponse, CommentRequest,
    CommentResponse, CommentService, UpdateCommentRequest,
};
use serde::Deserialize;

use crate::extractors::{AuthUser, IdPath, Pagination, QueryParams, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentListQuery {
    pub debate_id: i64,
    pub sort: Option<String>,
}

/// Comment on a debate
///
/// POST /debate/comment
pub async fn add_comment(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    ValidatedJson(request): ValidatedJson<CommentRequest>,
) -> ApiResult<Created<Json<CommentResponse>>> {
    let service = CommentService::new(state.service_context());
    let response = service
        .add(&user, request.debate_id, &request.content)
        .await?;
    Ok(Created(Json(response)))
}

/// Page through a debate's comments
///
/// GET /debate/comment?debateId=&sort=&page=&size=
pub async fn list_comments(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Pagination(page): Pagination,
    QueryParams(query): QueryParams<CommentListQuery>,
) -> ApiResult<Json<CommentListResponse>> {
    let service = CommentService::new(state.service_context());
    let response = service
        .list(&user, query.debate_id, query.sort.as_deref(), page)
        .await?;
    Ok(Json(response))
}

/// Edit one's own comment
///
/// PATCH /debate/comment/{comment_id}
pub async fn update_comment(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    IdPath(comment_id): IdPath,
    ValidatedJson(request): ValidatedJson<UpdateCommentRequest>,
) -> ApiResult<Json<CommentResponse>> {
    let service = CommentService::new(state.service_context());
    let response = service.update(&user, comment_id, &request.content).await?;
    Ok(Json(response))
}

/// Delete one's own comment
///
/// DELETE /debate/comment/{comment_id}
pub async fn delete_comment(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    IdPath(comment_id): IdPath,
) -> ApiResult<NoContent> {
    let service = CommentService::new(state.service_context());
    service.delete(&user, comment_id).await?;
    Ok(NoContent)
}

/// Toggle like/dislike
///
/// POST /debate/comment/{comment_id}
pub async fn react_to_comment(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    IdPath(comment_id): IdPath,
    ValidatedJson(request): ValidatedJson<CommentEmotionRequest>,
) -> ApiResult<Json<CommentReactionResponse>> {
    let service = CommentService::new(state.service_context());
    let response = service.react(&user, comment_id, request.emotion).await?;
    Ok(Json(response))
}
