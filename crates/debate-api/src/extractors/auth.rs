//! Authentication extractor
//!
//! Decodes the JWT from the Authorization header (the `Bearer ` prefix is
//! optional) and loads the caller from the local user projection.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::{header::AUTHORIZATION, request::Parts},
};
use debate_core::User;

use crate::response::ApiError;
use crate::state::AppState;

/// Authenticated caller
#[derive(Debug, Clone)]
pub struct AuthUser(pub User);

impl AuthUser {
    pub fn user(&self) -> &User {
        &self.0
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .filter(|v| !v.trim().is_empty())
            .ok_or(ApiError::MissingAuth)?;

        let app_state = AppState::from_ref(state);

        let user_id = app_state.jwt_service().user_id(token).map_err(|e| {
            tracing::warn!(error = %e, "Rejected access token");
            ApiError::App(e)
        })?;

        let user = app_state
            .service_context()
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| {
                tracing::warn!(user_id, "Token for a user missing from the projection");
                ApiError::UnknownUser(user_id)
            })?;

        Ok(AuthUser(user))
    }
}
