//! In-memory repositories for service tests
//!
//! `MemoryStore` implements every repository port over one mutex-guarded
//! state so counter side effects are visible across repositories, the same
//! way they are in PostgreSQL.

use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicBool, Ordering as AtomicOrdering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use debate_common::auth::JwtService;
use debate_core::entities::{
    Comment, CommentView, Debate, DebateSummary, EmotionCounts, NationVotes, NewDebate, Reply,
    ReplyView, TranslatedDebate, User, Vote,
};
use debate_core::error::DomainError;
use debate_core::events::ReplyNotification;
use debate_core::traits::{
    CommentRepository, DebateRepository, NotificationPublisher, ReactionRepository, RepoResult,
    ReplyRepository, TranslationRepository, Translator, UserRepository, VoteRepository,
};
use debate_core::value_objects::{
    top_nation, CommentEmotion, CommentSort, DebateSort, Emotion, Page, PageRequest,
    ReactionToggle, SearchField, VoteOption, VoteTransition,
};
use tokio::sync::mpsc;

use crate::services::ServiceContext;
use crate::translation::{TranslationJob, TranslationQueue};

#[derive(Default)]
struct State {
    next_id: i64,
    users: HashMap<i64, User>,
    debates: BTreeMap<i64, Debate>,
    translations: Vec<TranslatedDebate>,
    votes: Vec<Vote>,
    debate_reactions: HashMap<(i64, i64), Emotion>,
    comments: BTreeMap<i64, Comment>,
    comment_reactions: HashMap<(i64, i64), CommentEmotion>,
    replies: BTreeMap<i64, Reply>,
}

impl State {
    fn id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }

    fn text_for(&self, debate_id: i64, language: &str) -> Option<&TranslatedDebate> {
        let mut rows = self.translations.iter().filter(|t| t.debate_id == debate_id);
        let first = rows.clone().min_by_key(|t| t.id);
        rows.find(|t| t.language == language).or(first)
    }

    fn top_nation(&self, debate_id: i64) -> Option<String> {
        let mut counts: HashMap<&str, i64> = HashMap::new();
        for vote in self.votes.iter().filter(|v| v.debate_id == debate_id) {
            if let Some(user) = self.users.get(&vote.user_id) {
                *counts.entry(user.nation.as_str()).or_default() += 1;
            }
        }
        top_nation(counts)
    }

    fn summary(&self, debate: &Debate, language: &str) -> Option<DebateSummary> {
        let text = self.text_for(debate.id, language)?;
        Some(DebateSummary {
            id: debate.id,
            title: text.title.clone(),
            content: text.content.clone(),
            category: debate.category.clone(),
            views: debate.views,
            vote_count: debate.vote_count,
            comment_count: debate.comment_count,
            agree_count: debate.agree_count,
            disagree_count: debate.disagree_count,
            created_at: debate.created_at,
            nation: self.top_nation(debate.id),
        })
    }

    fn summaries<'a>(
        &self,
        debates: impl Iterator<Item = &'a Debate>,
        language: &str,
    ) -> Vec<DebateSummary> {
        debates.filter_map(|d| self.summary(d, language)).collect()
    }

    fn comment_view(&self, comment: &Comment, viewer_id: i64) -> Option<CommentView> {
        let author = self.users.get(&comment.user_id)?;
        Some(CommentView {
            comment: comment.clone(),
            user_name: author.name.clone(),
            nation: author.nation.clone(),
            my_reaction: self.comment_reactions.get(&(viewer_id, comment.id)).copied(),
        })
    }

    fn remove_comment(&mut self, comment_id: i64) -> Option<Comment> {
        let comment = self.comments.remove(&comment_id)?;
        self.comment_reactions.retain(|(_, c), _| *c != comment_id);
        self.replies.retain(|_, r| r.comment_id != comment_id);
        if let Some(debate) = self.debates.get_mut(&comment.debate_id) {
            debate.comment_count = (debate.comment_count - 1).max(0);
        }
        Some(comment)
    }
}

fn paginate<T>(items: Vec<T>, page: PageRequest) -> Page<T> {
    let total = items.len() as i64;
    let items = items
        .into_iter()
        .skip(page.offset() as usize)
        .take(page.limit() as usize)
        .collect();
    Page::new(items, total)
}

fn debate_order(sort: DebateSort) -> impl Fn(&&Debate, &&Debate) -> Ordering {
    move |a, b| {
        let primary = match sort {
            DebateSort::Latest => b.created_at.cmp(&a.created_at),
            DebateSort::Views => b.views.cmp(&a.views),
            DebateSort::Comments => b.comment_count.cmp(&a.comment_count),
            DebateSort::Votes => b.vote_count.cmp(&a.vote_count),
        };
        primary.then(b.id.cmp(&a.id))
    }
}

/// Every repository port in memory
#[derive(Default)]
pub struct MemoryStore {
    state: Mutex<State>,
}

impl MemoryStore {
    fn with<R>(&self, f: impl FnOnce(&mut State) -> R) -> R {
        f(&mut self.state.lock().unwrap())
    }

    pub fn user(&self, id: i64) -> Option<User> {
        self.with(|s| s.users.get(&id).cloned())
    }

    pub fn debate(&self, id: i64) -> Option<Debate> {
        self.with(|s| s.debates.get(&id).cloned())
    }

    pub fn comment(&self, id: i64) -> Option<Comment> {
        self.with(|s| s.comments.get(&id).cloned())
    }

    /// Exact-language translation, no fallback
    pub fn translation(&self, debate_id: i64, language: &str) -> Option<TranslatedDebate> {
        self.with(|s| {
            s.translations
                .iter()
                .find(|t| t.debate_id == debate_id && t.language == language)
                .cloned()
        })
    }

    pub fn add_translation(&self, debate_id: i64, language: &str, title: &str, content: &str) {
        self.with(|s| {
            let id = s.id();
            s.translations.push(TranslatedDebate {
                id,
                debate_id,
                language: language.to_string(),
                title: title.to_string(),
                content: content.to_string(),
            });
        });
    }

    pub fn insert_debate(&self, category: &str, created_at: DateTime<Utc>) -> i64 {
        self.with(|s| {
            let id = s.id();
            s.debates.insert(
                id,
                Debate {
                    id,
                    category: category.to_string(),
                    views: 0,
                    vote_count: 0,
                    comment_count: 0,
                    agree_count: 0,
                    disagree_count: 0,
                    created_at,
                },
            );
            id
        })
    }

    pub fn set_views(&self, debate_id: i64, views: i64) {
        self.with(|s| {
            if let Some(d) = s.debates.get_mut(&debate_id) {
                d.views = views;
            }
        });
    }

    /// Overwrite counters without vote rows
    pub fn set_votes(&self, debate_id: i64, agree: i64, disagree: i64) {
        self.with(|s| {
            if let Some(d) = s.debates.get_mut(&debate_id) {
                d.agree_count = agree;
                d.disagree_count = disagree;
                d.vote_count = agree + disagree;
            }
        });
    }
}

#[async_trait]
impl UserRepository for MemoryStore {
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<User>> {
        Ok(self.user(id))
    }

    async fn upsert(&self, user: &User) -> RepoResult<()> {
        self.with(|s| s.users.insert(user.id, user.clone()));
        Ok(())
    }

    async fn update_profile(&self, user: &User) -> RepoResult<bool> {
        Ok(self.with(|s| match s.users.get_mut(&user.id) {
            Some(existing) => {
                *existing = user.clone();
                true
            }
            None => false,
        }))
    }

    async fn update_language(&self, id: i64, language: &str) -> RepoResult<bool> {
        Ok(self.with(|s| match s.users.get_mut(&id) {
            Some(existing) => {
                existing.language = language.to_string();
                true
            }
            None => false,
        }))
    }

    async fn delete(&self, id: i64) -> RepoResult<bool> {
        Ok(self.with(|s| {
            if s.users.remove(&id).is_none() {
                return false;
            }

            let (mine, rest): (Vec<Vote>, Vec<Vote>) =
                s.votes.drain(..).partition(|v| v.user_id == id);
            s.votes = rest;
            for vote in mine {
                if let Some(d) = s.debates.get_mut(&vote.debate_id) {
                    let transition = VoteTransition::Retract(vote.option);
                    d.vote_count += i64::from(transition.vote_delta());
                    d.agree_count += i64::from(transition.option_delta(VoteOption::Agree));
                    d.disagree_count += i64::from(transition.option_delta(VoteOption::Disagree));
                }
            }

            s.debate_reactions.retain(|(user, _), _| *user != id);

            let reactions: Vec<(i64, CommentEmotion)> = s
                .comment_reactions
                .iter()
                .filter(|((user, _), _)| *user == id)
                .map(|((_, comment), emotion)| (*comment, *emotion))
                .collect();
            for (comment_id, emotion) in reactions {
                s.comment_reactions.remove(&(id, comment_id));
                if let Some(c) = s.comments.get_mut(&comment_id) {
                    match emotion {
                        CommentEmotion::Like => c.like_count -= 1,
                        CommentEmotion::Dislike => c.dislike_count -= 1,
                    }
                }
            }

            let replies: Vec<i64> = s
                .replies
                .values()
                .filter(|r| r.user_id == id)
                .map(|r| r.id)
                .collect();
            for reply_id in replies {
                if let Some(reply) = s.replies.remove(&reply_id) {
                    if let Some(c) = s.comments.get_mut(&reply.comment_id) {
                        c.reply_count -= 1;
                    }
                }
            }

            let comments: Vec<i64> = s
                .comments
                .values()
                .filter(|c| c.user_id == id)
                .map(|c| c.id)
                .collect();
            for comment_id in comments {
                s.remove_comment(comment_id);
            }
            true
        }))
    }
}

#[async_trait]
impl DebateRepository for MemoryStore {
    async fn create(&self, debate: &NewDebate) -> RepoResult<Debate> {
        let id = self.insert_debate(&debate.category, Utc::now());
        self.add_translation(id, &debate.language, &debate.title, &debate.content);
        self.debate(id)
            .ok_or_else(|| DomainError::InternalError("debate vanished".to_string()))
    }

    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Debate>> {
        Ok(self.debate(id))
    }

    async fn increment_views(&self, id: i64) -> RepoResult<()> {
        self.with(|s| {
            if let Some(d) = s.debates.get_mut(&id) {
                d.views += 1;
            }
        });
        Ok(())
    }

    async fn list(
        &self,
        language: &str,
        category: Option<&str>,
        sort: DebateSort,
        page: PageRequest,
    ) -> RepoResult<Page<DebateSummary>> {
        Ok(self.with(|s| {
            let mut debates: Vec<&Debate> = s
                .debates
                .values()
                .filter(|d| category.map_or(true, |c| d.category == c))
                .collect();
            debates.sort_by(debate_order(sort));
            paginate(s.summaries(debates.into_iter(), language), page)
        }))
    }

    async fn search(
        &self,
        language: &str,
        category: Option<&str>,
        sort: DebateSort,
        keyword: &str,
        field: SearchField,
        page: PageRequest,
    ) -> RepoResult<Page<DebateSummary>> {
        let needle = keyword.to_lowercase();
        Ok(self.with(|s| {
            let mut debates: Vec<&Debate> = s
                .debates
                .values()
                .filter(|d| category.map_or(true, |c| d.category == c))
                .filter(|d| {
                    s.text_for(d.id, language).is_some_and(|t| {
                        let title = t.title.to_lowercase().contains(&needle);
                        let content = t.content.to_lowercase().contains(&needle);
                        match field {
                            SearchField::Title => title,
                            SearchField::Content => content,
                            SearchField::Both => title || content,
                        }
                    })
                })
                .collect();
            debates.sort_by(debate_order(sort));
            paginate(s.summaries(debates.into_iter(), language), page)
        }))
    }

    async fn created_between(
        &self,
        language: &str,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> RepoResult<Vec<DebateSummary>> {
        Ok(self.with(|s| {
            let mut debates: Vec<&Debate> = s
                .debates
                .values()
                .filter(|d| d.created_at >= from && d.created_at < to)
                .collect();
            debates.sort_by(debate_order(DebateSort::Latest));
            s.summaries(debates.into_iter(), language)
        }))
    }

    async fn most_voted_since(
        &self,
        language: &str,
        since: DateTime<Utc>,
    ) -> RepoResult<Option<DebateSummary>> {
        Ok(self.with(|s| {
            s.debates
                .values()
                .filter(|d| d.created_at >= since)
                .max_by(|a, b| {
                    a.vote_count
                        .cmp(&b.vote_count)
                        .then(a.created_at.cmp(&b.created_at))
                        .then(a.id.cmp(&b.id))
                })
                .and_then(|d| s.summary(d, language))
        }))
    }

    async fn most_balanced_since(
        &self,
        language: &str,
        since: DateTime<Utc>,
    ) -> RepoResult<Option<DebateSummary>> {
        Ok(self.with(|s| {
            s.debates
                .values()
                .filter(|d| d.created_at >= since && d.vote_count > 0)
                .min_by(|a, b| {
                    a.tally()
                        .imbalance()
                        .cmp(&b.tally().imbalance())
                        .then(b.vote_count.cmp(&a.vote_count))
                        .then(b.created_at.cmp(&a.created_at))
                        .then(b.id.cmp(&a.id))
                })
                .and_then(|d| s.summary(d, language))
        }))
    }

    async fn voted_by(
        &self,
        language: &str,
        user_id: i64,
        page: PageRequest,
    ) -> RepoResult<Page<DebateSummary>> {
        Ok(self.with(|s| {
            let mut votes: Vec<&Vote> = s.votes.iter().filter(|v| v.user_id == user_id).collect();
            votes.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
            let debates = votes.iter().filter_map(|v| s.debates.get(&v.debate_id));
            paginate(s.summaries(debates, language), page)
        }))
    }
}

#[async_trait]
impl TranslationRepository for MemoryStore {
    async fn find_for(
        &self,
        debate_id: i64,
        language: &str,
    ) -> RepoResult<Option<TranslatedDebate>> {
        Ok(self.with(|s| s.text_for(debate_id, language).cloned()))
    }

    async fn find_source(&self, debate_id: i64) -> RepoResult<Option<TranslatedDebate>> {
        Ok(self.with(|s| {
            s.translations
                .iter()
                .filter(|t| t.debate_id == debate_id)
                .min_by_key(|t| t.id)
                .cloned()
        }))
    }

    async fn upsert(
        &self,
        debate_id: i64,
        language: &str,
        title: &str,
        content: &str,
    ) -> RepoResult<TranslatedDebate> {
        if let Some(mut existing) = self.translation(debate_id, language) {
            existing.title = title.to_string();
            existing.content = content.to_string();
            self.with(|s| {
                if let Some(row) = s.translations.iter_mut().find(|t| t.id == existing.id) {
                    *row = existing.clone();
                }
            });
            return Ok(existing);
        }
        self.add_translation(debate_id, language, title, content);
        self.translation(debate_id, language)
            .ok_or_else(|| DomainError::InternalError("translation vanished".to_string()))
    }
}

#[async_trait]
impl VoteRepository for MemoryStore {
    async fn find(&self, user_id: i64, debate_id: i64) -> RepoResult<Option<Vote>> {
        Ok(self.with(|s| {
            s.votes
                .iter()
                .find(|v| v.user_id == user_id && v.debate_id == debate_id)
                .cloned()
        }))
    }

    async fn cast(
        &self,
        user_id: i64,
        debate_id: i64,
        option: VoteOption,
    ) -> RepoResult<(VoteTransition, Debate)> {
        self.with(|s| {
            if !s.debates.contains_key(&debate_id) {
                return Err(DomainError::DebateNotFound(debate_id));
            }

            let position = s
                .votes
                .iter()
                .position(|v| v.user_id == user_id && v.debate_id == debate_id);
            let previous = position.map(|i| s.votes[i].option);
            let transition = VoteTransition::resolve(previous, option);

            match (position, transition.stored_option()) {
                (Some(i), Some(stored)) => {
                    s.votes[i].option = stored;
                    s.votes[i].created_at = Utc::now();
                }
                (Some(i), None) => {
                    s.votes.remove(i);
                }
                (None, Some(stored)) => {
                    let id = s.id();
                    s.votes.push(Vote {
                        id,
                        user_id,
                        debate_id,
                        option: stored,
                        created_at: Utc::now(),
                    });
                }
                (None, None) => {}
            }

            let debate = s
                .debates
                .get_mut(&debate_id)
                .ok_or(DomainError::DebateNotFound(debate_id))?;
            let mut tally = debate.tally();
            tally.apply_transition(transition);
            debate.vote_count = tally.vote_count;
            debate.agree_count = tally.agree_count;
            debate.disagree_count = tally.disagree_count;

            Ok((transition, debate.clone()))
        })
    }

    async fn nation_breakdown(&self, debate_id: i64) -> RepoResult<Vec<NationVotes>> {
        Ok(self.with(|s| {
            let mut by_nation: BTreeMap<String, NationVotes> = BTreeMap::new();
            for vote in s.votes.iter().filter(|v| v.debate_id == debate_id) {
                let Some(user) = s.users.get(&vote.user_id) else {
                    continue;
                };
                let entry = by_nation
                    .entry(user.nation.clone())
                    .or_insert_with(|| NationVotes {
                        nation: user.nation.clone(),
                        agree: 0,
                        disagree: 0,
                    });
                match vote.option {
                    VoteOption::Agree => entry.agree += 1,
                    VoteOption::Disagree => entry.disagree += 1,
                }
            }
            let mut rows: Vec<NationVotes> = by_nation.into_values().collect();
            rows.sort_by(|a, b| b.total().cmp(&a.total()).then(a.nation.cmp(&b.nation)));
            rows
        }))
    }
}

#[async_trait]
impl ReactionRepository for MemoryStore {
    async fn find_debate_reaction(
        &self,
        user_id: i64,
        debate_id: i64,
    ) -> RepoResult<Option<Emotion>> {
        Ok(self.with(|s| s.debate_reactions.get(&(user_id, debate_id)).copied()))
    }

    async fn toggle_debate_reaction(
        &self,
        user_id: i64,
        debate_id: i64,
        emotion: Emotion,
    ) -> RepoResult<ReactionToggle<Emotion>> {
        self.with(|s| {
            if !s.debates.contains_key(&debate_id) {
                return Err(DomainError::DebateNotFound(debate_id));
            }
            let key = (user_id, debate_id);
            let toggle = ReactionToggle::resolve(s.debate_reactions.get(&key).copied(), emotion);
            match toggle {
                ReactionToggle::Add(added) => {
                    s.debate_reactions.insert(key, added);
                }
                ReactionToggle::Remove(_) => {
                    s.debate_reactions.remove(&key);
                }
                ReactionToggle::Reject { .. } => {}
            }
            Ok(toggle)
        })
    }

    async fn emotion_counts(&self, debate_id: i64) -> RepoResult<EmotionCounts> {
        Ok(self.with(|s| {
            EmotionCounts::from_rows(
                s.debate_reactions
                    .iter()
                    .filter(|((_, d), _)| *d == debate_id)
                    .map(|(_, emotion)| (*emotion, 1)),
            )
        }))
    }

    async fn find_comment_reaction(
        &self,
        user_id: i64,
        comment_id: i64,
    ) -> RepoResult<Option<CommentEmotion>> {
        Ok(self.with(|s| s.comment_reactions.get(&(user_id, comment_id)).copied()))
    }

    async fn toggle_comment_reaction(
        &self,
        user_id: i64,
        comment_id: i64,
        emotion: CommentEmotion,
    ) -> RepoResult<(ReactionToggle<CommentEmotion>, Comment)> {
        self.with(|s| {
            let key = (user_id, comment_id);
            let existing = s.comment_reactions.get(&key).copied();
            let comment = s
                .comments
                .get_mut(&comment_id)
                .ok_or(DomainError::CommentNotFound(comment_id))?;

            let toggle = ReactionToggle::resolve(existing, emotion);
            let delta = i64::from(toggle.delta());
            match emotion {
                CommentEmotion::Like => comment.like_count += delta,
                CommentEmotion::Dislike => comment.dislike_count += delta,
            }
            let comment = comment.clone();

            match toggle {
                ReactionToggle::Add(added) => {
                    s.comment_reactions.insert(key, added);
                }
                ReactionToggle::Remove(_) => {
                    s.comment_reactions.remove(&key);
                }
                ReactionToggle::Reject { .. } => {}
            }
            Ok((toggle, comment))
        })
    }
}

#[async_trait]
impl CommentRepository for MemoryStore {
    async fn create(&self, debate_id: i64, user_id: i64, content: &str) -> RepoResult<Comment> {
        self.with(|s| {
            let debate = s
                .debates
                .get_mut(&debate_id)
                .ok_or(DomainError::DebateNotFound(debate_id))?;
            debate.comment_count += 1;

            let id = s.id();
            let now = Utc::now();
            let comment = Comment {
                id,
                debate_id,
                user_id,
                content: content.to_string(),
                like_count: 0,
                dislike_count: 0,
                reply_count: 0,
                created_at: now,
                updated_at: now,
            };
            s.comments.insert(id, comment.clone());
            Ok(comment)
        })
    }

    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Comment>> {
        Ok(self.comment(id))
    }

    async fn list(
        &self,
        debate_id: i64,
        viewer_id: i64,
        sort: CommentSort,
        page: PageRequest,
    ) -> RepoResult<Page<CommentView>> {
        Ok(self.with(|s| {
            let mut comments: Vec<&Comment> = s
                .comments
                .values()
                .filter(|c| c.debate_id == debate_id)
                .collect();
            comments.sort_by(|a, b| match sort {
                CommentSort::Latest => b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)),
                CommentSort::Oldest => a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)),
                CommentSort::Popular => b
                    .like_count
                    .cmp(&a.like_count)
                    .then(b.created_at.cmp(&a.created_at))
                    .then(b.id.cmp(&a.id)),
            });
            let views = comments
                .into_iter()
                .filter_map(|c| s.comment_view(c, viewer_id))
                .collect();
            paginate(views, page)
        }))
    }

    async fn update_content(&self, id: i64, content: &str) -> RepoResult<Comment> {
        self.with(|s| {
            let comment = s
                .comments
                .get_mut(&id)
                .ok_or(DomainError::CommentNotFound(id))?;
            comment.content = content.to_string();
            comment.updated_at = Utc::now();
            Ok(comment.clone())
        })
    }

    async fn delete(&self, id: i64) -> RepoResult<()> {
        self.with(|s| {
            s.remove_comment(id)
                .map(|_| ())
                .ok_or(DomainError::CommentNotFound(id))
        })
    }
}

#[async_trait]
impl ReplyRepository for MemoryStore {
    async fn create(&self, comment_id: i64, user_id: i64, content: &str) -> RepoResult<Reply> {
        self.with(|s| {
            let comment = s
                .comments
                .get_mut(&comment_id)
                .ok_or(DomainError::CommentNotFound(comment_id))?;
            comment.reply_count += 1;

            let id = s.id();
            let reply = Reply {
                id,
                comment_id,
                user_id,
                content: content.to_string(),
                created_at: Utc::now(),
            };
            s.replies.insert(id, reply.clone());
            Ok(reply)
        })
    }

    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Reply>> {
        Ok(self.with(|s| s.replies.get(&id).cloned()))
    }

    async fn list(&self, comment_id: i64, page: PageRequest) -> RepoResult<Page<ReplyView>> {
        Ok(self.with(|s| {
            let mut replies: Vec<&Reply> = s
                .replies
                .values()
                .filter(|r| r.comment_id == comment_id)
                .collect();
            replies.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
            let views = replies
                .into_iter()
                .filter_map(|r| {
                    let author = s.users.get(&r.user_id)?;
                    Some(ReplyView {
                        reply: r.clone(),
                        user_name: author.name.clone(),
                        nation: author.nation.clone(),
                    })
                })
                .collect();
            paginate(views, page)
        }))
    }

    async fn delete(&self, id: i64) -> RepoResult<()> {
        self.with(|s| {
            let reply = s.replies.remove(&id).ok_or(DomainError::ReplyNotFound(id))?;
            if let Some(c) = s.comments.get_mut(&reply.comment_id) {
                c.reply_count = (c.reply_count - 1).max(0);
            }
            Ok(())
        })
    }
}

/// Records published notifications; can be told to fail or hang once
#[derive(Default)]
pub struct RecordingPublisher {
    sent: Mutex<Vec<ReplyNotification>>,
    fail_next: AtomicBool,
    stall_next: AtomicBool,
}

impl RecordingPublisher {
    pub fn sent(&self) -> Vec<ReplyNotification> {
        self.sent.lock().unwrap().clone()
    }

    pub fn fail_next(&self) {
        self.fail_next.store(true, AtomicOrdering::SeqCst);
    }

    /// The next publish never completes
    pub fn stall_next(&self) {
        self.stall_next.store(true, AtomicOrdering::SeqCst);
    }

    /// Wait until `count` notifications were recorded, giving up after a second
    pub async fn wait_for(&self, count: usize) -> Vec<ReplyNotification> {
        let deadline = tokio::time::Instant::now() + std::time::Duration::from_secs(1);
        loop {
            let sent = self.sent();
            if sent.len() >= count || tokio::time::Instant::now() >= deadline {
                return sent;
            }
            tokio::time::sleep(std::time::Duration::from_millis(5)).await;
        }
    }
}

#[async_trait]
impl NotificationPublisher for RecordingPublisher {
    async fn publish_reply(&self, notification: &ReplyNotification) -> RepoResult<()> {
        if self.stall_next.swap(false, AtomicOrdering::SeqCst) {
            std::future::pending::<()>().await;
        }
        if self.fail_next.swap(false, AtomicOrdering::SeqCst) {
            return Err(DomainError::MessagingError("broker unavailable".to_string()));
        }
        self.sent.lock().unwrap().push(*notification);
        Ok(())
    }
}

/// Translator that always fails
pub struct FailingTranslator;

#[async_trait]
impl Translator for FailingTranslator {
    fn name(&self) -> &'static str {
        "failing"
    }

    async fn translate(&self, _text: &str, _source: Option<&str>, _target: &str) -> RepoResult<String> {
        Err(DomainError::TranslationError("service down".to_string()))
    }
}

/// A service context wired to one `MemoryStore`
pub struct Fixture {
    pub ctx: ServiceContext,
    pub store: Arc<MemoryStore>,
    pub publisher: Arc<RecordingPublisher>,
    pub jobs: mpsc::Receiver<TranslationJob>,
}

impl Fixture {
    pub fn new() -> Self {
        let store = Arc::new(MemoryStore::default());
        let publisher = Arc::new(RecordingPublisher::default());
        let languages = ["ko", "en", "ja"].iter().map(ToString::to_string).collect();
        let (queue, jobs) = TranslationQueue::new(16, languages);

        let ctx = ServiceContext::builder()
            .user_repo(store.clone())
            .debate_repo(store.clone())
            .translation_repo(store.clone())
            .vote_repo(store.clone())
            .reaction_repo(store.clone())
            .comment_repo(store.clone())
            .reply_repo(store.clone())
            .publisher(publisher.clone())
            .jwt_service(Arc::new(JwtService::new("test-secret", 3600)))
            .translation_queue(queue)
            .build()
            .unwrap();

        Self {
            ctx,
            store,
            publisher,
            jobs,
        }
    }

    pub fn seed_user(&self, id: i64, nation: &str, language: &str) -> User {
        let user = User::new(
            id,
            format!("user{id}"),
            nation.to_string(),
            language.to_string(),
        );
        self.store.with(|s| s.users.insert(id, user.clone()));
        user
    }

    pub fn seed_admin(&self, id: i64, language: &str) -> User {
        let mut user = self.seed_user(id, "Korea", language);
        user.role = debate_core::entities::ADMIN_ROLE.to_string();
        self.store.with(|s| s.users.insert(id, user.clone()));
        user
    }

    pub fn seed_debate(&self, category: &str, language: &str, title: &str, content: &str) -> i64 {
        let id = self.store.insert_debate(category, Utc::now());
        self.store.add_translation(id, language, title, content);
        id
    }

    pub fn seed_debate_at(&self, category: &str, title: &str, created_at: DateTime<Utc>) -> i64 {
        let id = self.store.insert_debate(category, created_at);
        self.store.add_translation(id, "ko", title, "본문");
        id
    }
}
