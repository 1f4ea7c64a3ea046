//! PostgreSQL implementation of CommentRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use debate_core::entities::{Comment, CommentView};
use debate_core::error::DomainError;
use debate_core::traits::{CommentRepository, RepoResult};
use debate_core::value_objects::{CommentSort, Page, PageRequest};

use crate::models::{CommentModel, CommentViewModel};

use super::error::map_db_error;

/// PostgreSQL implementation of CommentRepository
#[derive(Clone)]
pub struct PgCommentRepository {
    pool: PgPool,
}

impl PgCommentRepository {
    /// Create a new PgCommentRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CommentRepository for PgCommentRepository {
    #[instrument(skip(self, content))]
    async fn create(&self, debate_id: i64, user_id: i64, content: &str) -> RepoResult<Comment> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let bumped = sqlx::query_scalar::<_, i64>(
            r#"
            UPDATE debates SET comment_count = comment_count + 1 WHERE id = $1 RETURNING id
            "#,
        )
        .bind(debate_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_db_error)?;

        if bumped.is_none() {
            return Err(DomainError::DebateNotFound(debate_id));
        }

        let comment = sqlx::query_as::<_, CommentModel>(
            r#"
            INSERT INTO comments (debate_id, user_id, content)
            VALUES ($1, $2, $3)
            RETURNING id, debate_id, user_id, content, like_count, dislike_count, reply_count,
                      created_at, updated_at
            "#,
        )
        .bind(debate_id)
        .bind(user_id)
        .bind(content)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;

        Ok(comment.into())
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Comment>> {
        let result = sqlx::query_as::<_, CommentModel>(
            r#"
            SELECT id, debate_id, user_id, content, like_count, dislike_count, reply_count,
                   created_at, updated_at
            FROM comments
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Comment::from))
    }

    #[instrument(skip(self))]
    async fn list(
        &self,
        debate_id: i64,
        viewer_id: i64,
        sort: CommentSort,
        page: PageRequest,
    ) -> RepoResult<Page<CommentView>> {
        let sql = format!(
            r#"
            SELECT c.id, c.debate_id, c.user_id, c.content, c.like_count, c.dislike_count,
                   c.reply_count, c.created_at, c.updated_at,
                   u.name AS user_name, u.nation, r.emotion AS my_reaction
            FROM comments c
            JOIN users u ON u.id = c.user_id
            LEFT JOIN comment_reactions r ON r.comment_id = c.id AND r.user_id = $2
            WHERE c.debate_id = $1
            ORDER BY {}
            LIMIT $3 OFFSET $4
            "#,
            sort.order_by()
        );

        let rows = sqlx::query_as::<_, CommentViewModel>(&sql)
            .bind(debate_id)
            .bind(viewer_id)
            .bind(page.limit())
            .bind(page.offset())
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        let total = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*) FROM comments WHERE debate_id = $1
            "#,
        )
        .bind(debate_id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(Page::new(
            rows.into_iter().map(CommentView::from).collect(),
            total,
        ))
    }

    #[instrument(skip(self, content))]
    async fn update_content(&self, id: i64, content: &str) -> RepoResult<Comment> {
        let result = sqlx::query_as::<_, CommentModel>(
            r#"
            UPDATE comments SET content = $2, updated_at = NOW()
            WHERE id = $1
            RETURNING id, debate_id, user_id, content, like_count, dislike_count, reply_count,
                      created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(content)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result
            .map(Comment::from)
            .ok_or(DomainError::CommentNotFound(id))
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        // Reactions and replies go with the comment (ON DELETE CASCADE)
        let debate_id = sqlx::query_scalar::<_, i64>(
            r#"
            DELETE FROM comments WHERE id = $1 RETURNING debate_id
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_db_error)?
        .ok_or(DomainError::CommentNotFound(id))?;

        sqlx::query(
            r#"
            UPDATE debates SET comment_count = GREATEST(comment_count - 1, 0) WHERE id = $1
            "#,
        )
        .bind(debate_id)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;

        Ok(())
    }
}
