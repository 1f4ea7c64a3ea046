//! Reply handlers

use axum::{extract::State, Json};
use debate_service::{ReplyListResponse, ReplyRequest, ReplyResponse, ReplyService};
use serde::Deserialize;

use crate::extractors::{AuthUser, IdPath, Pagination, QueryParams, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplyListQuery {
    pub comment_id: i64,
}

/// Reply to a comment
///
/// POST /debate/reply
pub async fn add_reply(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    ValidatedJson(request): ValidatedJson<ReplyRequest>,
) -> ApiResult<Created<Json<ReplyResponse>>> {
    let service = ReplyService::new(state.service_context());
    let response = service
        .add(&user, request.comment_id, &request.content)
        .await?;
    Ok(Created(Json(response)))
}

/// Replies under a comment, oldest first
///
/// GET /debate/reply?commentId=&page=&size=
pub async fn list_replies(
    State(state): State<AppState>,
    _auth: AuthUser,
    Pagination(page): Pagination,
    QueryParams(query): QueryParams<ReplyListQuery>,
) -> ApiResult<Json<ReplyListResponse>> {
    let service = ReplyService::new(state.service_context());
    Ok(Json(service.list(query.comment_id, page).await?))
}

/// Delete one's own reply
///
/// DELETE /debate/reply/{reply_id}
pub async fn delete_reply(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    IdPath(reply_id): IdPath,
) -> ApiResult<NoContent> {
    let service = ReplyService::new(state.service_context());
    service.delete(&user, reply_id).await?;
    Ok(NoContent)
}
