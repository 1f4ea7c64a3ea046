//! PostgreSQL implementation of ReplyRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use debate_core::entities::{Reply, ReplyView};
use debate_core::error::DomainError;
use debate_core::traits::{ReplyRepository, RepoResult};
use debate_core::value_objects::{Page, PageRequest};

use crate::models::{ReplyModel, ReplyViewModel};

use super::error::map_db_error;

/// PostgreSQL implementation of ReplyRepository
#[derive(Clone)]
pub struct PgReplyRepository {
    pool: PgPool,
}

impl PgReplyRepository {
    /// Create a new PgReplyRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReplyRepository for PgReplyRepository {
    #[instrument(skip(self, content))]
    async fn create(&self, comment_id: i64, user_id: i64, content: &str) -> RepoResult<Reply> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let bumped = sqlx::query_scalar::<_, i64>(
            r#"
            UPDATE comments SET reply_count = reply_count + 1 WHERE id = $1 RETURNING id
            "#,
        )
        .bind(comment_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_db_error)?;

        if bumped.is_none() {
            return Err(DomainError::CommentNotFound(comment_id));
        }

        let reply = sqlx::query_as::<_, ReplyModel>(
            r#"
            INSERT INTO replies (comment_id, user_id, content)
            VALUES ($1, $2, $3)
            RETURNING id, comment_id, user_id, content, created_at
            "#,
        )
        .bind(comment_id)
        .bind(user_id)
        .bind(content)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;

        Ok(reply.into())
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Reply>> {
        let result = sqlx::query_as::<_, ReplyModel>(
            r#"
            SELECT id, comment_id, user_id, content, created_at
            FROM replies
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Reply::from))
    }

    #[instrument(skip(self))]
    async fn list(&self, comment_id: i64, page: PageRequest) -> RepoResult<Page<ReplyView>> {
        let rows = sqlx::query_as::<_, ReplyViewModel>(
            r#"
            SELECT r.id, r.comment_id, r.user_id, r.content, r.created_at,
                   u.name AS user_name, u.nation
            FROM replies r
            JOIN users u ON u.id = r.user_id
            WHERE r.comment_id = $1
            ORDER BY r.created_at ASC, r.id ASC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(comment_id)
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        let total = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*) FROM replies WHERE comment_id = $1
            "#,
        )
        .bind(comment_id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(Page::new(
            rows.into_iter().map(ReplyView::from).collect(),
            total,
        ))
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let comment_id = sqlx::query_scalar::<_, i64>(
            r#"
            DELETE FROM replies WHERE id = $1 RETURNING comment_id
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_db_error)?
        .ok_or(DomainError::ReplyNotFound(id))?;

        sqlx::query(
            r#"
            UPDATE comments SET reply_count = GREATEST(reply_count - 1, 0) WHERE id = $1
            "#,
        )
        .bind(comment_id)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;

        Ok(())
    }
}
