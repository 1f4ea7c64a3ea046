//! PostgreSQL implementation of ReactionRepository
//!
//! Toggles lock the parent row (debate or comment) first so that two requests
//! from the same user cannot both observe "no reaction".

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{debug, instrument};

use debate_core::entities::{Comment, DebateReaction, EmotionCounts};
use debate_core::error::DomainError;
use debate_core::traits::{ReactionRepository, RepoResult};
use debate_core::value_objects::{CommentEmotion, Emotion, ReactionToggle};

use crate::mappers::parse_stored;
use crate::models::{CommentModel, EmotionCountModel, ReactionModel};

use super::error::map_db_error;

/// PostgreSQL implementation of ReactionRepository
#[derive(Clone)]
pub struct PgReactionRepository {
    pool: PgPool,
}

impl PgReactionRepository {
    /// Create a new PgReactionRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReactionRepository for PgReactionRepository {
    #[instrument(skip(self))]
    async fn find_debate_reaction(
        &self,
        user_id: i64,
        debate_id: i64,
    ) -> RepoResult<Option<Emotion>> {
        let result = sqlx::query_as::<_, ReactionModel>(
            r#"
            SELECT id, user_id, debate_id AS target_id, emotion, created_at
            FROM debate_reactions
            WHERE user_id = $1 AND debate_id = $2
            "#,
        )
        .bind(user_id)
        .bind(debate_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result
            .map(DebateReaction::try_from)
            .transpose()?
            .map(|reaction| reaction.emotion))
    }

    #[instrument(skip(self), fields(emotion = emotion.as_str()))]
    async fn toggle_debate_reaction(
        &self,
        user_id: i64,
        debate_id: i64,
        emotion: Emotion,
    ) -> RepoResult<ReactionToggle<Emotion>> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let locked = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT id FROM debates WHERE id = $1 FOR UPDATE
            "#,
        )
        .bind(debate_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_db_error)?;

        if locked.is_none() {
            return Err(DomainError::DebateNotFound(debate_id));
        }

        let existing = sqlx::query_scalar::<_, String>(
            r#"
            SELECT emotion FROM debate_reactions WHERE user_id = $1 AND debate_id = $2
            "#,
        )
        .bind(user_id)
        .bind(debate_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_db_error)?
        .map(|raw| parse_stored::<Emotion>(&raw))
        .transpose()?;

        let toggle = ReactionToggle::resolve(existing, emotion);

        match toggle {
            ReactionToggle::Add(added) => {
                sqlx::query(
                    r#"
                    INSERT INTO debate_reactions (user_id, debate_id, emotion)
                    VALUES ($1, $2, $3)
                    "#,
                )
                .bind(user_id)
                .bind(debate_id)
                .bind(added.as_str())
                .execute(&mut *tx)
                .await
                .map_err(map_db_error)?;
            }
            ReactionToggle::Remove(_) => {
                sqlx::query(
                    r#"
                    DELETE FROM debate_reactions WHERE user_id = $1 AND debate_id = $2
                    "#,
                )
                .bind(user_id)
                .bind(debate_id)
                .execute(&mut *tx)
                .await
                .map_err(map_db_error)?;
            }
            ReactionToggle::Reject { .. } => {}
        }

        tx.commit().await.map_err(map_db_error)?;

        debug!(?toggle, "Debate reaction toggled");
        Ok(toggle)
    }

    #[instrument(skip(self))]
    async fn emotion_counts(&self, debate_id: i64) -> RepoResult<EmotionCounts> {
        let rows = sqlx::query_as::<_, EmotionCountModel>(
            r#"
            SELECT emotion, COUNT(*) AS count
            FROM debate_reactions
            WHERE debate_id = $1
            GROUP BY emotion
            "#,
        )
        .bind(debate_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        let rows = rows
            .into_iter()
            .map(|row| parse_stored::<Emotion>(&row.emotion).map(|emotion| (emotion, row.count)))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(EmotionCounts::from_rows(rows))
    }

    #[instrument(skip(self))]
    async fn find_comment_reaction(
        &self,
        user_id: i64,
        comment_id: i64,
    ) -> RepoResult<Option<CommentEmotion>> {
        let result = sqlx::query_as::<_, ReactionModel>(
            r#"
            SELECT id, user_id, comment_id AS target_id, emotion, created_at
            FROM comment_reactions
            WHERE user_id = $1 AND comment_id = $2
            "#,
        )
        .bind(user_id)
        .bind(comment_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result
            .map(|row| parse_stored::<CommentEmotion>(&row.emotion))
            .transpose()
    }

    #[instrument(skip(self), fields(emotion = emotion.as_str()))]
    async fn toggle_comment_reaction(
        &self,
        user_id: i64,
        comment_id: i64,
        emotion: CommentEmotion,
    ) -> RepoResult<(ReactionToggle<CommentEmotion>, Comment)> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let locked = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT id FROM comments WHERE id = $1 FOR UPDATE
            "#,
        )
        .bind(comment_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_db_error)?;

        if locked.is_none() {
            return Err(DomainError::CommentNotFound(comment_id));
        }

        let existing = sqlx::query_scalar::<_, String>(
            r#"
            SELECT emotion FROM comment_reactions WHERE user_id = $1 AND comment_id = $2
            "#,
        )
        .bind(user_id)
        .bind(comment_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_db_error)?
        .map(|raw| parse_stored::<CommentEmotion>(&raw))
        .transpose()?;

        let toggle = ReactionToggle::resolve(existing, emotion);

        match toggle {
            ReactionToggle::Add(added) => {
                sqlx::query(
                    r#"
                    INSERT INTO comment_reactions (user_id, comment_id, emotion)
                    VALUES ($1, $2, $3)
                    "#,
                )
                .bind(user_id)
                .bind(comment_id)
                .bind(added.as_str())
                .execute(&mut *tx)
                .await
                .map_err(map_db_error)?;
            }
            ReactionToggle::Remove(_) => {
                sqlx::query(
                    r#"
                    DELETE FROM comment_reactions WHERE user_id = $1 AND comment_id = $2
                    "#,
                )
                .bind(user_id)
                .bind(comment_id)
                .execute(&mut *tx)
                .await
                .map_err(map_db_error)?;
            }
            ReactionToggle::Reject { .. } => {}
        }

        let delta = i64::from(toggle.delta());
        let (like_delta, dislike_delta) = match emotion {
            CommentEmotion::Like => (delta, 0),
            CommentEmotion::Dislike => (0, delta),
        };

        let comment = sqlx::query_as::<_, CommentModel>(
            r#"
            UPDATE comments
            SET like_count = like_count + $2, dislike_count = dislike_count + $3
            WHERE id = $1
            RETURNING id, debate_id, user_id, content, like_count, dislike_count, reply_count,
                      created_at, updated_at
            "#,
        )
        .bind(comment_id)
        .bind(like_delta)
        .bind(dislike_delta)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;

        debug!(?toggle, "Comment reaction toggled");
        Ok((toggle, comment.into()))
    }
}
