//! PostgreSQL implementation of VoteRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{debug, instrument};

use debate_core::entities::{Debate, NationVotes, Vote};
use debate_core::error::DomainError;
use debate_core::traits::{RepoResult, VoteRepository};
use debate_core::value_objects::{VoteOption, VoteTransition};

use crate::mappers::parse_stored;
use crate::models::{DebateModel, NationVotesModel, VoteModel};

use super::error::map_db_error;

/// PostgreSQL implementation of VoteRepository
#[derive(Clone)]
pub struct PgVoteRepository {
    pool: PgPool,
}

impl PgVoteRepository {
    /// Create a new PgVoteRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VoteRepository for PgVoteRepository {
    #[instrument(skip(self))]
    async fn find(&self, user_id: i64, debate_id: i64) -> RepoResult<Option<Vote>> {
        let result = sqlx::query_as::<_, VoteModel>(
            r#"
            SELECT id, user_id, debate_id, option, created_at
            FROM votes
            WHERE user_id = $1 AND debate_id = $2
            "#,
        )
        .bind(user_id)
        .bind(debate_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Vote::try_from).transpose()
    }

    #[instrument(skip(self), fields(option = option.as_str()))]
    async fn cast(
        &self,
        user_id: i64,
        debate_id: i64,
        option: VoteOption,
    ) -> RepoResult<(VoteTransition, Debate)> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        // Lock the debate row so concurrent votes serialize on it
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

        let previous = sqlx::query_scalar::<_, String>(
            r#"
            SELECT option FROM votes WHERE user_id = $1 AND debate_id = $2
            "#,
        )
        .bind(user_id)
        .bind(debate_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_db_error)?
        .map(|raw| parse_stored::<VoteOption>(&raw))
        .transpose()?;

        let transition = VoteTransition::resolve(previous, option);

        match transition.stored_option() {
            Some(stored) => {
                sqlx::query(
                    r#"
                    INSERT INTO votes (user_id, debate_id, option)
                    VALUES ($1, $2, $3)
                    ON CONFLICT (user_id, debate_id) DO UPDATE SET
                        option = EXCLUDED.option,
                        created_at = NOW()
                    "#,
                )
                .bind(user_id)
                .bind(debate_id)
                .bind(stored.as_str())
                .execute(&mut *tx)
                .await
                .map_err(map_db_error)?;
            }
            None => {
                sqlx::query(
                    r#"
                    DELETE FROM votes WHERE user_id = $1 AND debate_id = $2
                    "#,
                )
                .bind(user_id)
                .bind(debate_id)
                .execute(&mut *tx)
                .await
                .map_err(map_db_error)?;
            }
        }

        let debate = sqlx::query_as::<_, DebateModel>(
            r#"
            UPDATE debates
            SET vote_count = vote_count + $2,
                agree_count = agree_count + $3,
                disagree_count = disagree_count + $4
            WHERE id = $1
            RETURNING id, category, views, vote_count, comment_count, agree_count,
                      disagree_count, created_at
            "#,
        )
        .bind(debate_id)
        .bind(i64::from(transition.vote_delta()))
        .bind(i64::from(transition.option_delta(VoteOption::Agree)))
        .bind(i64::from(transition.option_delta(VoteOption::Disagree)))
        .fetch_one(&mut *tx)
        .await
        .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;

        debug!(?transition, "Vote applied");
        Ok((transition, debate.into()))
    }

    #[instrument(skip(self))]
    async fn nation_breakdown(&self, debate_id: i64) -> RepoResult<Vec<NationVotes>> {
        let results = sqlx::query_as::<_, NationVotesModel>(
            r#"
            SELECT u.nation,
                   COUNT(*) FILTER (WHERE v.option = 'agree') AS agree,
                   COUNT(*) FILTER (WHERE v.option = 'disagree') AS disagree
            FROM votes v
            JOIN users u ON u.id = v.user_id
            WHERE v.debate_id = $1
            GROUP BY u.nation
            ORDER BY COUNT(*) DESC, u.nation ASC
            "#,
        )
        .bind(debate_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(NationVotes::from).collect())
    }
}
