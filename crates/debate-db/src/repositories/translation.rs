//! PostgreSQL implementation of TranslationRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use debate_core::entities::TranslatedDebate;
use debate_core::traits::{RepoResult, TranslationRepository};

use crate::models::TranslationModel;

use super::error::map_db_error;

/// PostgreSQL implementation of TranslationRepository
#[derive(Clone)]
pub struct PgTranslationRepository {
    pool: PgPool,
}

impl PgTranslationRepository {
    /// Create a new PgTranslationRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TranslationRepository for PgTranslationRepository {
    #[instrument(skip(self))]
    async fn find_for(
        &self,
        debate_id: i64,
        language: &str,
    ) -> RepoResult<Option<TranslatedDebate>> {
        let result = sqlx::query_as::<_, TranslationModel>(
            r#"
            SELECT id, debate_id, language, title, content
            FROM translated_debates
            WHERE debate_id = $1
            ORDER BY (language = $2) DESC, id ASC
            LIMIT 1
            "#,
        )
        .bind(debate_id)
        .bind(language)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(TranslatedDebate::from))
    }

    #[instrument(skip(self))]
    async fn find_source(&self, debate_id: i64) -> RepoResult<Option<TranslatedDebate>> {
        let result = sqlx::query_as::<_, TranslationModel>(
            r#"
            SELECT id, debate_id, language, title, content
            FROM translated_debates
            WHERE debate_id = $1
            ORDER BY id ASC
            LIMIT 1
            "#,
        )
        .bind(debate_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(TranslatedDebate::from))
    }

    #[instrument(skip(self, title, content))]
    async fn upsert(
        &self,
        debate_id: i64,
        language: &str,
        title: &str,
        content: &str,
    ) -> RepoResult<TranslatedDebate> {
        let row = sqlx::query_as::<_, TranslationModel>(
            r#"
            INSERT INTO translated_debates (debate_id, language, title, content)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (debate_id, language) DO UPDATE SET
                title = EXCLUDED.title,
                content = EXCLUDED.content
            RETURNING id, debate_id, language, title, content
            "#,
        )
        .bind(debate_id)
        .bind(language)
        .bind(title)
        .bind(content)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(row.into())
    }
}
