//! Route definitions
//!
//! Everything lives under /debate; health probes are mounted separately.

use axum::{
    routing::{delete, get, patch, post},
    Router,
};

use crate::handlers::{comments, debates, health, replies, votes};
use crate::state::AppState;

/// Debate API routes (health excluded so it skips rate limiting)
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/debate", debate_routes())
}

/// Health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

fn debate_routes() -> Router<AppState> {
    Router::new()
        // Static segments are matched before `/:debate_id`
        .route("/", get(debates::list_debates).post(debates::write_debate))
        .route("/today", get(debates::today))
        .route("/search", get(debates::search_debates))
        .route("/voted", get(debates::voted_debates))
        .route("/vote", get(votes::tally).post(votes::vote))
        .merge(comment_routes())
        .merge(reply_routes())
        .route("/:debate_id", get(debates::get_debate))
        .route("/:debate_id/emotion", post(debates::react_to_debate))
}

fn comment_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/comment",
            get(comments::list_comments).post(comments::add_comment),
        )
        .route(
            "/comment/:comment_id",
            patch(comments::update_comment)
                .delete(comments::delete_comment)
                .post(comments::react_to_comment),
        )
}

fn reply_routes() -> Router<AppState> {
    Router::new()
        .route("/reply", get(replies::list_replies).post(replies::add_reply))
        .route("/reply/:reply_id", delete(replies::delete_reply))
}
