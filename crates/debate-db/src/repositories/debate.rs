//! PostgreSQL implementation of DebateRepository
//!
//! Listing queries join each debate with one translation (the caller's
//! language, else the first-inserted row) and with the nation that cast the
//! most votes on it.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::instrument;

use debate_core::entities::{Debate, DebateSummary, NewDebate};
use debate_core::traits::{DebateRepository, RepoResult};
use debate_core::value_objects::{DebateSort, Page, PageRequest, SearchField};

use crate::models::{DebateModel, DebateSummaryModel};

use super::error::{like_pattern, map_db_error};

/// Summary columns; `$1` is always the caller's language
const SUMMARY_SELECT: &str = r#"
    SELECT d.id, t.title, t.content, d.category, d.views, d.vote_count, d.comment_count,
           d.agree_count, d.disagree_count, d.created_at, n.nation
    FROM debates d
    CROSS JOIN LATERAL (
        SELECT td.title, td.content
        FROM translated_debates td
        WHERE td.debate_id = d.id
        ORDER BY (td.language = $1) DESC, td.id ASC
        LIMIT 1
    ) t
    LEFT JOIN LATERAL (
        SELECT u.nation
        FROM votes v
        JOIN users u ON u.id = v.user_id
        WHERE v.debate_id = d.id AND u.nation <> ''
        GROUP BY u.nation
        ORDER BY COUNT(*) DESC, u.nation ASC
        LIMIT 1
    ) n ON TRUE
"#;

/// Localized text only, for counting search matches
const TRANSLATION_JOIN: &str = r#"
    FROM debates d
    CROSS JOIN LATERAL (
        SELECT td.title, td.content
        FROM translated_debates td
        WHERE td.debate_id = d.id
        ORDER BY (td.language = $1) DESC, td.id ASC
        LIMIT 1
    ) t
"#;

fn search_condition(field: SearchField) -> &'static str {
    match field {
        SearchField::Title => "t.title ILIKE $3",
        SearchField::Content => "t.content ILIKE $3",
        SearchField::Both => "(t.title ILIKE $3 OR t.content ILIKE $3)",
    }
}

/// PostgreSQL implementation of DebateRepository
#[derive(Clone)]
pub struct PgDebateRepository {
    pool: PgPool,
}

impl PgDebateRepository {
    /// Create a new PgDebateRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn fetch_summaries(
        &self,
        sql: &str,
        language: &str,
        since: DateTime<Utc>,
    ) -> RepoResult<Vec<DebateSummary>> {
        let rows = sqlx::query_as::<_, DebateSummaryModel>(sql)
            .bind(language)
            .bind(since)
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(rows.into_iter().map(DebateSummary::from).collect())
    }
}

#[async_trait]
impl DebateRepository for PgDebateRepository {
    #[instrument(skip(self, debate), fields(category = %debate.category, language = %debate.language))]
    async fn create(&self, debate: &NewDebate) -> RepoResult<Debate> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let created = sqlx::query_as::<_, DebateModel>(
            r#"
            INSERT INTO debates (category)
            VALUES ($1)
            RETURNING id, category, views, vote_count, comment_count, agree_count,
                      disagree_count, created_at
            "#,
        )
        .bind(&debate.category)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_db_error)?;

        sqlx::query(
            r#"
            INSERT INTO translated_debates (debate_id, language, title, content)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(created.id)
        .bind(&debate.language)
        .bind(&debate.title)
        .bind(&debate.content)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;

        Ok(created.into())
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Debate>> {
        let result = sqlx::query_as::<_, DebateModel>(
            r#"
            SELECT id, category, views, vote_count, comment_count, agree_count,
                   disagree_count, created_at
            FROM debates
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Debate::from))
    }

    #[instrument(skip(self))]
    async fn increment_views(&self, id: i64) -> RepoResult<()> {
        sqlx::query(
            r#"
            UPDATE debates SET views = views + 1 WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn list(
        &self,
        language: &str,
        category: Option<&str>,
        sort: DebateSort,
        page: PageRequest,
    ) -> RepoResult<Page<DebateSummary>> {
        let sql = format!(
            "{SUMMARY_SELECT}
            WHERE ($2::text IS NULL OR d.category = $2)
            ORDER BY d.{} DESC, d.id DESC
            LIMIT $3 OFFSET $4",
            sort.column()
        );

        let rows = sqlx::query_as::<_, DebateSummaryModel>(&sql)
            .bind(language)
            .bind(category)
            .bind(page.limit())
            .bind(page.offset())
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        let total = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*) FROM debates WHERE ($1::text IS NULL OR category = $1)
            "#,
        )
        .bind(category)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(Page::new(
            rows.into_iter().map(DebateSummary::from).collect(),
            total,
        ))
    }

    #[instrument(skip(self))]
    async fn search(
        &self,
        language: &str,
        category: Option<&str>,
        sort: DebateSort,
        keyword: &str,
        field: SearchField,
        page: PageRequest,
    ) -> RepoResult<Page<DebateSummary>> {
        let condition = search_condition(field);
        let pattern = like_pattern(keyword);

        let sql = format!(
            "{SUMMARY_SELECT}
            WHERE ($2::text IS NULL OR d.category = $2) AND {condition}
            ORDER BY d.{} DESC, d.id DESC
            LIMIT $4 OFFSET $5",
            sort.column()
        );

        let rows = sqlx::query_as::<_, DebateSummaryModel>(&sql)
            .bind(language)
            .bind(category)
            .bind(&pattern)
            .bind(page.limit())
            .bind(page.offset())
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        let count_sql = format!(
            "SELECT COUNT(*) {TRANSLATION_JOIN}
            WHERE ($2::text IS NULL OR d.category = $2) AND {condition}"
        );

        let total = sqlx::query_scalar::<_, i64>(&count_sql)
            .bind(language)
            .bind(category)
            .bind(&pattern)
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(Page::new(
            rows.into_iter().map(DebateSummary::from).collect(),
            total,
        ))
    }

    #[instrument(skip(self))]
    async fn created_between(
        &self,
        language: &str,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> RepoResult<Vec<DebateSummary>> {
        let sql = format!(
            "{SUMMARY_SELECT}
            WHERE d.created_at >= $2 AND d.created_at < $3
            ORDER BY d.created_at DESC, d.id DESC"
        );

        let rows = sqlx::query_as::<_, DebateSummaryModel>(&sql)
            .bind(language)
            .bind(from)
            .bind(to)
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(rows.into_iter().map(DebateSummary::from).collect())
    }

    #[instrument(skip(self))]
    async fn most_voted_since(
        &self,
        language: &str,
        since: DateTime<Utc>,
    ) -> RepoResult<Option<DebateSummary>> {
        let sql = format!(
            "{SUMMARY_SELECT}
            WHERE d.created_at >= $2
            ORDER BY d.vote_count DESC, d.created_at DESC, d.id DESC
            LIMIT 1"
        );

        Ok(self
            .fetch_summaries(&sql, language, since)
            .await?
            .into_iter()
            .next())
    }

    #[instrument(skip(self))]
    async fn most_balanced_since(
        &self,
        language: &str,
        since: DateTime<Utc>,
    ) -> RepoResult<Option<DebateSummary>> {
        let sql = format!(
            "{SUMMARY_SELECT}
            WHERE d.created_at >= $2 AND d.vote_count > 0
            ORDER BY ABS(d.agree_count - d.disagree_count) ASC,
                     d.vote_count DESC,
                     d.created_at DESC,
                     d.id DESC
            LIMIT 1"
        );

        Ok(self
            .fetch_summaries(&sql, language, since)
            .await?
            .into_iter()
            .next())
    }

    #[instrument(skip(self))]
    async fn voted_by(
        &self,
        language: &str,
        user_id: i64,
        page: PageRequest,
    ) -> RepoResult<Page<DebateSummary>> {
        let sql = format!(
            "{SUMMARY_SELECT}
            JOIN votes mine ON mine.debate_id = d.id AND mine.user_id = $2
            ORDER BY mine.created_at DESC, mine.id DESC
            LIMIT $3 OFFSET $4"
        );

        let rows = sqlx::query_as::<_, DebateSummaryModel>(&sql)
            .bind(language)
            .bind(user_id)
            .bind(page.limit())
            .bind(page.offset())
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        let total = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*) FROM votes WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(Page::new(
            rows.into_iter().map(DebateSummary::from).collect(),
            total,
        ))
    }
}
