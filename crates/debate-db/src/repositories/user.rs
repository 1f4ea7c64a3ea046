//! PostgreSQL implementation of UserRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{debug, instrument};

use debate_core::entities::User;
use debate_core::traits::{RepoResult, UserRepository};

use crate::models::UserModel;

use super::error::map_db_error;

/// PostgreSQL implementation of UserRepository
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    /// Create a new PgUserRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<User>> {
        let result = sqlx::query_as::<_, UserModel>(
            r#"
            SELECT id, name, nation, language, role, address, created_at, updated_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(User::from))
    }

    #[instrument(skip(self, user), fields(user_id = user.id))]
    async fn upsert(&self, user: &User) -> RepoResult<()> {
        sqlx::query(
            r#"
            INSERT INTO users (id, name, nation, language, role, address)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (id) DO UPDATE SET
                name = EXCLUDED.name,
                nation = EXCLUDED.nation,
                language = EXCLUDED.language,
                role = EXCLUDED.role,
                address = EXCLUDED.address,
                updated_at = NOW()
            "#,
        )
        .bind(user.id)
        .bind(&user.name)
        .bind(&user.nation)
        .bind(&user.language)
        .bind(&user.role)
        .bind(&user.address)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self, user), fields(user_id = user.id))]
    async fn update_profile(&self, user: &User) -> RepoResult<bool> {
        let result = sqlx::query(
            r#"
            UPDATE users
            SET name = $2, nation = $3, language = $4, role = $5, address = $6, updated_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(user.id)
        .bind(&user.name)
        .bind(&user.nation)
        .bind(&user.language)
        .bind(&user.role)
        .bind(&user.address)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn update_language(&self, id: i64, language: &str) -> RepoResult<bool> {
        let result = sqlx::query(
            r#"
            UPDATE users SET language = $2, updated_at = NOW() WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(language)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> RepoResult<bool> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        // Writers lock the debate or comment row before touching the user row
        // (the foreign key check), so take locks in the same order.
        sqlx::query(
            r#"
            SELECT id FROM debates
            WHERE id IN (
                SELECT debate_id FROM votes WHERE user_id = $1
                UNION
                SELECT debate_id FROM comments WHERE user_id = $1
            )
            ORDER BY id
            FOR UPDATE
            "#,
        )
        .bind(id)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        sqlx::query(
            r#"
            SELECT id FROM comments
            WHERE id IN (
                SELECT comment_id FROM comment_reactions WHERE user_id = $1
                UNION
                SELECT comment_id FROM replies WHERE user_id = $1
            )
            ORDER BY id
            FOR UPDATE
            "#,
        )
        .bind(id)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        let exists = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT id FROM users WHERE id = $1 FOR UPDATE
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_db_error)?;

        if exists.is_none() {
            return Ok(false);
        }

        // Votes
        let votes = sqlx::query(
            r#"
            UPDATE debates d
            SET vote_count = d.vote_count - 1,
                agree_count = d.agree_count - CASE WHEN v.option = 'agree' THEN 1 ELSE 0 END,
                disagree_count = d.disagree_count - CASE WHEN v.option = 'disagree' THEN 1 ELSE 0 END
            FROM votes v
            WHERE v.debate_id = d.id AND v.user_id = $1
            "#,
        )
        .bind(id)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        // Comment reactions on other users' comments
        sqlx::query(
            r#"
            UPDATE comments c
            SET like_count = c.like_count - CASE WHEN r.emotion = 'like' THEN 1 ELSE 0 END,
                dislike_count = c.dislike_count - CASE WHEN r.emotion = 'dislike' THEN 1 ELSE 0 END
            FROM comment_reactions r
            WHERE r.comment_id = c.id AND r.user_id = $1 AND c.user_id <> $1
            "#,
        )
        .bind(id)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        // Replies on other users' comments
        sqlx::query(
            r#"
            UPDATE comments c
            SET reply_count = c.reply_count - sub.n
            FROM (
                SELECT comment_id, COUNT(*) AS n FROM replies WHERE user_id = $1 GROUP BY comment_id
            ) sub
            WHERE sub.comment_id = c.id AND c.user_id <> $1
            "#,
        )
        .bind(id)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        // The user's own comments
        sqlx::query(
            r#"
            UPDATE debates d
            SET comment_count = d.comment_count - sub.n
            FROM (
                SELECT debate_id, COUNT(*) AS n FROM comments WHERE user_id = $1 GROUP BY debate_id
            ) sub
            WHERE sub.debate_id = d.id
            "#,
        )
        .bind(id)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        // Cascades remove votes, reactions, comments and replies
        sqlx::query(
            r#"
            DELETE FROM users WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;

        debug!(debates_adjusted = votes.rows_affected(), "User removed");
        Ok(true)
    }
}
