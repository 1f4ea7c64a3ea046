//! Debate service
//!
//! Publishing, listing, searching, and reading debates, plus emotion reactions.
//! Every read is localized to the caller's stored language.

use chrono::{DateTime, Duration, Utc};
use debate_core::entities::{DebateSummary, NewDebate, User};
use debate_core::error::DomainError;
use debate_core::value_objects::{
    top_nation, Category, DebateSort, Emotion, PageRequest, ReactionToggle, SearchField,
};
use tracing::{info, instrument};

use crate::dto::{
    DebateDetailResponse, DebateListResponse, DebateSummaryResponse, EmotionCountsResponse,
    TodayResponse, WriteDebateRequest,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Window for the weekly rankings on the today page
const RANKING_WINDOW_DAYS: i64 = 7;

/// Debate service
pub struct DebateService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> DebateService<'a> {
    /// Create a new DebateService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Publish a debate and queue its translations
    #[instrument(skip(self, author, request), fields(author_id = author.id))]
    pub async fn write(
        &self,
        author: &User,
        request: WriteDebateRequest,
    ) -> ServiceResult<DebateSummaryResponse> {
        if !author.is_admin() {
            return Err(DomainError::AdminOnly.into());
        }

        let language = self.source_language(author, request.language.as_deref());
        let category = request.category.trim().to_string();
        if Category::new(category.as_str()).is_all() {
            return Err(ServiceError::validation(format!(
                "{:?} is not a valid category",
                request.category
            )));
        }

        let new_debate = NewDebate {
            category,
            language: language.clone(),
            title: request.title,
            content: request.content,
        };

        let debate = self.ctx.debate_repo().create(&new_debate).await?;
        let queued = self
            .ctx
            .translation_queue()
            .enqueue_all(debate.id, &language);

        info!(
            debate_id = debate.id,
            category = %debate.category,
            language = %language,
            translations_queued = queued,
            "Debate published"
        );

        Ok(DebateSummaryResponse::from(DebateSummary {
            id: debate.id,
            title: new_debate.title,
            content: new_debate.content,
            category: debate.category,
            views: debate.views,
            vote_count: debate.vote_count,
            comment_count: debate.comment_count,
            agree_count: debate.agree_count,
            disagree_count: debate.disagree_count,
            created_at: debate.created_at,
            nation: None,
        }))
    }

    /// Page through debates
    #[instrument(skip(self, viewer), fields(viewer_id = viewer.id))]
    pub async fn list(
        &self,
        viewer: &User,
        page: PageRequest,
        sort: Option<&str>,
        category: Option<String>,
    ) -> ServiceResult<DebateListResponse> {
        let category = Category::from(category);
        let page = self
            .ctx
            .debate_repo()
            .list(
                &viewer.language,
                category.filter(),
                DebateSort::parse(sort),
                page,
            )
            .await?;

        Ok(page.into())
    }

    /// Today's debates plus the weekly most-voted and most-balanced debates
    pub async fn today(&self, viewer: &User) -> ServiceResult<TodayResponse> {
        self.today_at(viewer, Utc::now()).await
    }

    /// [`today`](Self::today) evaluated at a fixed instant
    #[instrument(skip(self, viewer), fields(viewer_id = viewer.id))]
    pub async fn today_at(&self, viewer: &User, now: DateTime<Utc>) -> ServiceResult<TodayResponse> {
        let day_start = now
            .date_naive()
            .and_hms_opt(0, 0, 0)
            .map(|midnight| midnight.and_utc())
            .ok_or_else(|| ServiceError::internal("midnight out of range"))?;
        let day_end = day_start + Duration::days(1);
        let week_ago = now - Duration::days(RANKING_WINDOW_DAYS);

        let repo = self.ctx.debate_repo();
        let language = viewer.language.as_str();

        let today = repo.created_between(language, day_start, day_end).await?;
        let top = repo.most_voted_since(language, week_ago).await?;
        let balanced = repo.most_balanced_since(language, week_ago).await?;

        Ok(TodayResponse {
            today_debate_list: today.iter().map(DebateSummaryResponse::from).collect(),
            top_debate: top.map(DebateSummaryResponse::from),
            balanced_debate: balanced.map(DebateSummaryResponse::from),
        })
    }

    /// Keyword search within the caller's language
    #[instrument(skip(self, viewer), fields(viewer_id = viewer.id))]
    pub async fn search(
        &self,
        viewer: &User,
        page: PageRequest,
        sort: Option<&str>,
        category: Option<String>,
        keyword: &str,
        search_by: Option<&str>,
    ) -> ServiceResult<DebateListResponse> {
        let keyword = keyword.trim();
        if keyword.is_empty() {
            return Err(ServiceError::validation("keyword must not be empty"));
        }

        let category = Category::from(category);
        let page = self
            .ctx
            .debate_repo()
            .search(
                &viewer.language,
                category.filter(),
                DebateSort::parse(sort),
                keyword,
                SearchField::parse(search_by),
                page,
            )
            .await?;

        Ok(page.into())
    }

    /// Full debate with the caller's emotion and vote; counts as a view
    #[instrument(skip(self, viewer), fields(viewer_id = viewer.id))]
    pub async fn detail(&self, viewer: &User, debate_id: i64) -> ServiceResult<DebateDetailResponse> {
        let repo = self.ctx.debate_repo();
        repo.increment_views(debate_id).await?;

        let debate = repo
            .find_by_id(debate_id)
            .await?
            .ok_or(DomainError::DebateNotFound(debate_id))?;

        let text = self
            .ctx
            .translation_repo()
            .find_for(debate_id, &viewer.language)
            .await?
            .ok_or(DomainError::DebateNotFound(debate_id))?;

        let reactions = self.ctx.reaction_repo();
        let emotions = reactions.emotion_counts(debate_id).await?;
        let my_emotion = reactions.find_debate_reaction(viewer.id, debate_id).await?;

        let votes = self.ctx.vote_repo();
        let my_vote = votes.find(viewer.id, debate_id).await?;
        let nations = votes.nation_breakdown(debate_id).await?;
        let nation = top_nation(nations.iter().map(|n| (n.nation.as_str(), n.total())));

        let percent = debate.percentages();

        Ok(DebateDetailResponse {
            debate_id: debate.id,
            title: text.title,
            content: text.content,
            views: debate.views,
            vote_cnt: debate.vote_count,
            comment_cnt: debate.comment_count,
            agree_percent: percent.agree,
            disagree_percent: percent.disagree,
            created_at: debate.created_at,
            category: debate.category,
            nation,
            emotions: emotions.into(),
            is_state: my_emotion,
            is_voted_state: my_vote.map(|vote| vote.option),
        })
    }

    /// Toggle an emotion; a different existing emotion is a conflict
    #[instrument(skip(self, viewer), fields(viewer_id = viewer.id, emotion = emotion.as_str()))]
    pub async fn react(
        &self,
        viewer: &User,
        debate_id: i64,
        emotion: Emotion,
    ) -> ServiceResult<EmotionCountsResponse> {
        let reactions = self.ctx.reaction_repo();

        match reactions
            .toggle_debate_reaction(viewer.id, debate_id, emotion)
            .await?
        {
            ReactionToggle::Reject { existing } => {
                return Err(DomainError::ReactionConflict {
                    existing: existing.label().to_string(),
                }
                .into());
            }
            toggle => info!(debate_id, ?toggle, "Debate reaction toggled"),
        }

        Ok(reactions.emotion_counts(debate_id).await?.into())
    }

    /// Debates a user voted on, newest vote first
    #[instrument(skip(self, viewer), fields(viewer_id = viewer.id))]
    pub async fn voted(
        &self,
        viewer: &User,
        user_id: i64,
        page: PageRequest,
    ) -> ServiceResult<DebateListResponse> {
        let page = self
            .ctx
            .debate_repo()
            .voted_by(&viewer.language, user_id, page)
            .await?;

        Ok(page.into())
    }

    /// Explicit language, else the author's, else the first supported one
    fn source_language(&self, author: &User, requested: Option<&str>) -> String {
        requested
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .or_else(|| Some(author.language.trim()).filter(|l| !l.is_empty()))
            .or_else(|| self.ctx.translation_queue().languages().first().map(String::as_str))
            .unwrap_or("ko")
            .to_string()
    }
}
