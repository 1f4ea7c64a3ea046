//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Environment variables: DATABASE_URL, JWT_SECRET
//!
//! Kafka and the external translator are disabled for these runs.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    assert_json, assert_status, check_test_env, fixtures::*, unique_id, TestServer, TestUser,
};
use reqwest::StatusCode;

/// Publish a debate in its own category so listings stay isolated between tests
async fn publish(server: &TestServer, admin: &TestUser, category: &str) -> DebateSummary {
    let response = server
        .post_auth("/debate", &admin.token, &WriteDebateRequest::unique(category))
        .await
        .unwrap();
    assert_json(response, StatusCode::CREATED).await.unwrap()
}

fn unique_category() -> String {
    format!("cat{}", unique_id())
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Auth Tests
// ============================================================================

#[tokio::test]
async fn test_missing_token() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let response = server.get("/debate").await.unwrap();

    let body: ErrorEnvelope = assert_json(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(body.error.code, "MISSING_AUTHORIZATION");
}

#[tokio::test]
async fn test_token_for_unknown_user() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let token = server.token_for_unknown_user().unwrap();
    let response = server.get_auth("/debate", &token).await.unwrap();

    let body: ErrorEnvelope = assert_json(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(body.error.code, "UNKNOWN_USER");
}

// ============================================================================
// Debate Tests
// ============================================================================

#[tokio::test]
async fn test_write_requires_admin() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let user = server.seed_user("Korea", "ko").await.unwrap();

    let response = server
        .post_auth("/debate", &user.token, &WriteDebateRequest::unique("정치"))
        .await
        .unwrap();

    let body: ErrorEnvelope = assert_json(response, StatusCode::FORBIDDEN).await.unwrap();
    assert_eq!(body.error.code, "ADMIN_ONLY");
}

#[tokio::test]
async fn test_write_rejects_all_category() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let admin = server.seed_admin("ko").await.unwrap();

    let response = server
        .post_auth("/debate", &admin.token, &WriteDebateRequest::unique("전체"))
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_write_and_list_by_category() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let admin = server.seed_admin("ko").await.unwrap();
    let category = unique_category();

    let first = publish(&server, &admin, &category).await;
    let second = publish(&server, &admin, &category).await;
    assert_eq!(first.vote_cnt, 0);
    assert_eq!(first.category, category);

    let response = server
        .get_auth(&format!("/debate?category={category}"), &admin.token)
        .await
        .unwrap();
    let list: DebateList = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(list.total, 2);
    let ids: Vec<i64> = list.debate_list.iter().map(|d| d.debate_id).collect();
    assert_eq!(ids, vec![second.debate_id, first.debate_id]);
}

#[tokio::test]
async fn test_today_includes_new_debate() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let admin = server.seed_admin("ko").await.unwrap();
    let debate = publish(&server, &admin, &unique_category()).await;

    let response = server.get_auth("/debate/today", &admin.token).await.unwrap();
    let today: TodayDebates = assert_json(response, StatusCode::OK).await.unwrap();

    assert!(today
        .today_debate_list
        .iter()
        .any(|d| d.debate_id == debate.debate_id));
}

#[tokio::test]
async fn test_detail_counts_views() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let admin = server.seed_admin("ko").await.unwrap();
    let debate = publish(&server, &admin, &unique_category()).await;
    let path = format!("/debate/{}", debate.debate_id);

    let response = server.get_auth(&path, &admin.token).await.unwrap();
    let first: DebateDetail = assert_json(response, StatusCode::OK).await.unwrap();
    let response = server.get_auth(&path, &admin.token).await.unwrap();
    let second: DebateDetail = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(first.title, debate.title);
    assert_eq!(second.views, first.views + 1);
    assert!(second.is_state.is_none());
    assert!(second.is_voted_state.is_none());
}

#[tokio::test]
async fn test_unknown_debate() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let user = server.seed_user("Korea", "ko").await.unwrap();

    let response = server.get_auth("/debate/0", &user.token).await.unwrap();
    let body: ErrorEnvelope = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(body.error.code, "UNKNOWN_DEBATE");
}

#[tokio::test]
async fn test_invalid_debate_id() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let user = server.seed_user("Korea", "ko").await.unwrap();

    let response = server.get_auth("/debate/abc", &user.token).await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_search_by_title() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let admin = server.seed_admin("ko").await.unwrap();
    let category = unique_category();
    let debate = publish(&server, &admin, &category).await;
    let keyword = debate.title.trim_start_matches("토론 ");

    let response = server
        .get_auth(
            &format!("/debate/search?keyword={keyword}&searchBy=title&category={category}"),
            &admin.token,
        )
        .await
        .unwrap();
    let list: DebateList = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(list.total, 1);
    assert_eq!(list.debate_list[0].debate_id, debate.debate_id);
}

#[tokio::test]
async fn test_search_blank_keyword() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let user = server.seed_user("Korea", "ko").await.unwrap();

    let response = server
        .get_auth("/debate/search?keyword=%20", &user.token)
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

// ============================================================================
// Emotion Tests
// ============================================================================

#[tokio::test]
async fn test_emotion_toggle_and_conflict() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let admin = server.seed_admin("ko").await.unwrap();
    let user = server.seed_user("Japan", "ja").await.unwrap();
    let debate = publish(&server, &admin, &unique_category()).await;
    let path = format!("/debate/{}/emotion", debate.debate_id);

    let response = server
        .post_auth(&path, &user.token, &EmotionRequest::new("좋아요"))
        .await
        .unwrap();
    let counts: EmotionCounts = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(counts.like, 1);

    let response = server
        .post_auth(&path, &user.token, &EmotionRequest::new("슬퍼요"))
        .await
        .unwrap();
    let body: ErrorEnvelope = assert_json(response, StatusCode::CONFLICT).await.unwrap();
    assert_eq!(body.error.code, "REACTION_CONFLICT");

    let response = server
        .post_auth(&path, &user.token, &EmotionRequest::new("like"))
        .await
        .unwrap();
    let counts: EmotionCounts = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(
        (counts.like, counts.dislike, counts.sad, counts.angry, counts.hm),
        (0, 0, 0, 0, 0)
    );
}

#[tokio::test]
async fn test_unknown_emotion_label() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let admin = server.seed_admin("ko").await.unwrap();
    let debate = publish(&server, &admin, &unique_category()).await;

    let response = server
        .post_auth(
            &format!("/debate/{}/emotion", debate.debate_id),
            &admin.token,
            &EmotionRequest::new("최고예요"),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

// ============================================================================
// Vote Tests
// ============================================================================

#[tokio::test]
async fn test_vote_cast_switch_retract() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let admin = server.seed_admin("ko").await.unwrap();
    let voter = server.seed_user("Korea", "ko").await.unwrap();
    let debate = publish(&server, &admin, &unique_category()).await;
    let id = debate.debate_id;

    let response = server
        .post_auth("/debate/vote", &voter.token, &VoteRequest::new(id, "찬성"))
        .await
        .unwrap();
    let tally: VoteTally = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!((tally.vote_cnt, tally.agree_cnt), (1, 1));
    assert_eq!(tally.is_voted_state.as_deref(), Some("찬성"));
    assert_eq!(tally.nation.as_deref(), Some("Korea"));

    let response = server
        .post_auth("/debate/vote", &voter.token, &VoteRequest::new(id, "disagree"))
        .await
        .unwrap();
    let tally: VoteTally = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!((tally.vote_cnt, tally.agree_cnt, tally.disagree_cnt), (1, 0, 1));
    assert!((tally.disagree_percent - 100.0).abs() < f64::EPSILON);

    let response = server
        .post_auth("/debate/vote", &voter.token, &VoteRequest::new(id, "반대"))
        .await
        .unwrap();
    let tally: VoteTally = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(tally.vote_cnt, 0);
    assert!(tally.is_voted_state.is_none());
    assert!(tally.nation.is_none());
}

#[tokio::test]
async fn test_vote_tally_by_nation() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let admin = server.seed_admin("ko").await.unwrap();
    let debate = publish(&server, &admin, &unique_category()).await;
    let id = debate.debate_id;

    for (nation, option) in [("Japan", "찬성"), ("Japan", "반대"), ("Korea", "찬성")] {
        let voter = server.seed_user(nation, "ko").await.unwrap();
        let response = server
            .post_auth("/debate/vote", &voter.token, &VoteRequest::new(id, option))
            .await
            .unwrap();
        assert_status(response, StatusCode::OK).await.unwrap();
    }

    let response = server
        .get_auth(&format!("/debate/vote?debateId={id}"), &admin.token)
        .await
        .unwrap();
    let tally: VoteTally = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(tally.debate_id, id);
    assert_eq!((tally.vote_cnt, tally.agree_cnt, tally.disagree_cnt), (3, 2, 1));
    assert_eq!(tally.nation.as_deref(), Some("Japan"));
    let japan = tally.nations.iter().find(|n| n.nation == "Japan").unwrap();
    assert_eq!((japan.agree_cnt, japan.disagree_cnt), (1, 1));
    assert!(tally.is_voted_state.is_none());
    assert!((tally.agree_percent + tally.disagree_percent - 100.0).abs() < 0.01);
}

#[tokio::test]
async fn test_voted_debates() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let admin = server.seed_admin("ko").await.unwrap();
    let voter = server.seed_user("Korea", "ko").await.unwrap();
    let debate = publish(&server, &admin, &unique_category()).await;

    let response = server
        .post_auth(
            "/debate/vote",
            &voter.token,
            &VoteRequest::new(debate.debate_id, "찬성"),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server.get_auth("/debate/voted", &voter.token).await.unwrap();
    let own: DebateList = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(own.total, 1);
    assert_eq!(own.debate_list[0].debate_id, debate.debate_id);

    let response = server
        .get_auth(&format!("/debate/voted?userId={}", voter.id()), &admin.token)
        .await
        .unwrap();
    let theirs: DebateList = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(theirs.total, 1);
}

// ============================================================================
// Comment Tests
// ============================================================================

#[tokio::test]
async fn test_comment_lifecycle() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let admin = server.seed_admin("ko").await.unwrap();
    let author = server.seed_user("Korea", "ko").await.unwrap();
    let other = server.seed_user("Japan", "ja").await.unwrap();
    let debate = publish(&server, &admin, &unique_category()).await;

    let response = server
        .post_auth(
            "/debate/comment",
            &author.token,
            &CommentRequest {
                debate_id: debate.debate_id,
                content: "첫 댓글".to_string(),
            },
        )
        .await
        .unwrap();
    let comment: Comment = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(comment.user_id, author.id());
    assert_eq!(comment.nation, "Korea");
    let path = format!("/debate/comment/{}", comment.comment_id);

    // Only the author may edit
    let edit = UpdateCommentRequest {
        content: "수정된 댓글".to_string(),
    };
    let response = server.patch_auth(&path, &other.token, &edit).await.unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
    let response = server.patch_auth(&path, &author.token, &edit).await.unwrap();
    let updated: Comment = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(updated.content, "수정된 댓글");

    let response = server
        .post_auth(&path, &other.token, &EmotionRequest::new("좋아요"))
        .await
        .unwrap();
    let reaction: CommentReaction = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!((reaction.like, reaction.dislike), (1, 0));
    assert_eq!(reaction.is_state.as_deref(), Some("좋아요"));

    let response = server
        .get_auth(
            &format!("/debate/comment?debateId={}", debate.debate_id),
            &other.token,
        )
        .await
        .unwrap();
    let list: CommentList = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(list.total, 1);
    assert_eq!(list.comment_list[0].like, 1);
    assert_eq!(list.comment_list[0].is_state.as_deref(), Some("좋아요"));

    let response = server
        .get_auth(&format!("/debate/{}", debate.debate_id), &admin.token)
        .await
        .unwrap();
    let detail: DebateDetail = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(detail.debate_id, debate.debate_id);

    let response = server.delete_auth(&path, &other.token).await.unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
    let response = server.delete_auth(&path, &author.token).await.unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server
        .get_auth(
            &format!("/debate/comment?debateId={}", debate.debate_id),
            &author.token,
        )
        .await
        .unwrap();
    let list: CommentList = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(list.total, 0);
}

#[tokio::test]
async fn test_comment_counter_on_debate() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let admin = server.seed_admin("ko").await.unwrap();
    let category = unique_category();
    let debate = publish(&server, &admin, &category).await;

    for content in ["하나", "둘"] {
        let response = server
            .post_auth(
                "/debate/comment",
                &admin.token,
                &CommentRequest {
                    debate_id: debate.debate_id,
                    content: content.to_string(),
                },
            )
            .await
            .unwrap();
        assert_status(response, StatusCode::CREATED).await.unwrap();
    }

    let response = server
        .get_auth(&format!("/debate?category={category}"), &admin.token)
        .await
        .unwrap();
    let list: DebateList = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(list.debate_list[0].comment_cnt, 2);
}

#[tokio::test]
async fn test_comment_on_unknown_debate() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let user = server.seed_user("Korea", "ko").await.unwrap();

    let response = server
        .post_auth(
            "/debate/comment",
            &user.token,
            &CommentRequest {
                debate_id: 0,
                content: "댓글".to_string(),
            },
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Reply Tests
// ============================================================================

#[tokio::test]
async fn test_reply_lifecycle() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let admin = server.seed_admin("ko").await.unwrap();
    let commenter = server.seed_user("Korea", "ko").await.unwrap();
    let replier = server.seed_user("Japan", "ja").await.unwrap();
    let debate = publish(&server, &admin, &unique_category()).await;

    let response = server
        .post_auth(
            "/debate/comment",
            &commenter.token,
            &CommentRequest {
                debate_id: debate.debate_id,
                content: "댓글".to_string(),
            },
        )
        .await
        .unwrap();
    let comment: Comment = assert_json(response, StatusCode::CREATED).await.unwrap();

    let mut reply_ids = Vec::new();
    for content in ["첫 답글", "두 번째 답글"] {
        let response = server
            .post_auth(
                "/debate/reply",
                &replier.token,
                &ReplyRequest {
                    comment_id: comment.comment_id,
                    content: content.to_string(),
                },
            )
            .await
            .unwrap();
        let reply: Reply = assert_json(response, StatusCode::CREATED).await.unwrap();
        assert_eq!(reply.comment_id, comment.comment_id);
        assert_eq!(reply.user_id, replier.id());
        reply_ids.push(reply.reply_id);
    }

    let list_path = format!("/debate/reply?commentId={}", comment.comment_id);
    let response = server.get_auth(&list_path, &commenter.token).await.unwrap();
    let list: ReplyList = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(list.total, 2);
    let listed: Vec<i64> = list.reply_list.iter().map(|r| r.reply_id).collect();
    assert_eq!(listed, reply_ids);
    assert_eq!(list.reply_list[0].content, "첫 답글");

    let response = server
        .get_auth(
            &format!("/debate/comment?debateId={}", debate.debate_id),
            &commenter.token,
        )
        .await
        .unwrap();
    let comments: CommentList = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(comments.comment_list[0].reply, 2);

    let delete_path = format!("/debate/reply/{}", reply_ids[0]);
    let response = server.delete_auth(&delete_path, &commenter.token).await.unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
    let response = server.delete_auth(&delete_path, &replier.token).await.unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server.get_auth(&list_path, &commenter.token).await.unwrap();
    let list: ReplyList = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(list.total, 1);
}

#[tokio::test]
async fn test_reply_validation() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let user = server.seed_user("Korea", "ko").await.unwrap();

    let response = server
        .post_auth(
            "/debate/reply",
            &user.token,
            &ReplyRequest {
                comment_id: 1,
                content: String::new(),
            },
        )
        .await
        .unwrap();
    let body: ErrorEnvelope = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body.error.code, "VALIDATION_ERROR");
    assert!(!body.error.message.is_empty());
}
