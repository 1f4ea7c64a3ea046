//! Service context - dependency container for services
//!
//! Holds all repositories, the notification publisher, and the translation
//! queue handle needed by services.

use std::sync::Arc;

use debate_common::auth::JwtService;
use debate_core::traits::{
    CommentRepository, DebateRepository, NotificationPublisher, ReactionRepository,
    ReplyRepository, TranslationRepository, UserRepository, VoteRepository,
};

use super::error::{ServiceError, ServiceResult};
use crate::translation::TranslationQueue;

/// Service context containing all dependencies
///
/// This is the main dependency container that gets passed to all services.
/// It provides access to:
/// - Database repositories
/// - Reply notification publisher
/// - JWT service for authentication
/// - Translation queue for newly written debates
#[derive(Clone)]
pub struct ServiceContext {
    // Repositories
    user_repo: Arc<dyn UserRepository>,
    debate_repo: Arc<dyn DebateRepository>,
    translation_repo: Arc<dyn TranslationRepository>,
    vote_repo: Arc<dyn VoteRepository>,
    reaction_repo: Arc<dyn ReactionRepository>,
    comment_repo: Arc<dyn CommentRepository>,
    reply_repo: Arc<dyn ReplyRepository>,

    // Messaging
    publisher: Arc<dyn NotificationPublisher>,

    // Services
    jwt_service: Arc<JwtService>,
    translation_queue: TranslationQueue,
}

impl ServiceContext {
    /// Start building a context
    pub fn builder() -> ServiceContextBuilder {
        ServiceContextBuilder::new()
    }

    // === Repositories ===

    /// Get the user repository
    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    /// Get the debate repository
    pub fn debate_repo(&self) -> &dyn DebateRepository {
        self.debate_repo.as_ref()
    }

    /// Get the translation repository
    pub fn translation_repo(&self) -> &dyn TranslationRepository {
        self.translation_repo.as_ref()
    }

    /// Shared handle to the translation repository, for the background worker
    pub fn translation_repo_handle(&self) -> Arc<dyn TranslationRepository> {
        Arc::clone(&self.translation_repo)
    }

    /// Get the vote repository
    pub fn vote_repo(&self) -> &dyn VoteRepository {
        self.vote_repo.as_ref()
    }

    /// Get the reaction repository
    pub fn reaction_repo(&self) -> &dyn ReactionRepository {
        self.reaction_repo.as_ref()
    }

    /// Get the comment repository
    pub fn comment_repo(&self) -> &dyn CommentRepository {
        self.comment_repo.as_ref()
    }

    /// Get the reply repository
    pub fn reply_repo(&self) -> &dyn ReplyRepository {
        self.reply_repo.as_ref()
    }

    // === Messaging ===

    /// Shared handle to the reply notification publisher, for detached sends
    pub fn publisher_handle(&self) -> Arc<dyn NotificationPublisher> {
        Arc::clone(&self.publisher)
    }

    // === Services ===

    /// Get the JWT service
    pub fn jwt_service(&self) -> &JwtService {
        self.jwt_service.as_ref()
    }

    /// Get the translation queue
    pub fn translation_queue(&self) -> &TranslationQueue {
        &self.translation_queue
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .field("publisher", &"NotificationPublisher")
            .field("translation_queue", &self.translation_queue)
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
#[derive(Default)]
pub struct ServiceContextBuilder {
    user_repo: Option<Arc<dyn UserRepository>>,
    debate_repo: Option<Arc<dyn DebateRepository>>,
    translation_repo: Option<Arc<dyn TranslationRepository>>,
    vote_repo: Option<Arc<dyn VoteRepository>>,
    reaction_repo: Option<Arc<dyn ReactionRepository>>,
    comment_repo: Option<Arc<dyn CommentRepository>>,
    reply_repo: Option<Arc<dyn ReplyRepository>>,
    publisher: Option<Arc<dyn NotificationPublisher>>,
    jwt_service: Option<Arc<JwtService>>,
    translation_queue: Option<TranslationQueue>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn debate_repo(mut self, repo: Arc<dyn DebateRepository>) -> Self {
        self.debate_repo = Some(repo);
        self
    }

    pub fn translation_repo(mut self, repo: Arc<dyn TranslationRepository>) -> Self {
        self.translation_repo = Some(repo);
        self
    }

    pub fn vote_repo(mut self, repo: Arc<dyn VoteRepository>) -> Self {
        self.vote_repo = Some(repo);
        self
    }

    pub fn reaction_repo(mut self, repo: Arc<dyn ReactionRepository>) -> Self {
        self.reaction_repo = Some(repo);
        self
    }

    pub fn comment_repo(mut self, repo: Arc<dyn CommentRepository>) -> Self {
        self.comment_repo = Some(repo);
        self
    }

    pub fn reply_repo(mut self, repo: Arc<dyn ReplyRepository>) -> Self {
        self.reply_repo = Some(repo);
        self
    }

    pub fn publisher(mut self, publisher: Arc<dyn NotificationPublisher>) -> Self {
        self.publisher = Some(publisher);
        self
    }

    pub fn jwt_service(mut self, service: Arc<JwtService>) -> Self {
        self.jwt_service = Some(service);
        self
    }

    pub fn translation_queue(mut self, queue: TranslationQueue) -> Self {
        self.translation_queue = Some(queue);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        Ok(ServiceContext {
            user_repo: required(self.user_repo, "user_repo")?,
            debate_repo: required(self.debate_repo, "debate_repo")?,
            translation_repo: required(self.translation_repo, "translation_repo")?,
            vote_repo: required(self.vote_repo, "vote_repo")?,
            reaction_repo: required(self.reaction_repo, "reaction_repo")?,
            comment_repo: required(self.comment_repo, "comment_repo")?,
            reply_repo: required(self.reply_repo, "reply_repo")?,
            publisher: required(self.publisher, "publisher")?,
            jwt_service: required(self.jwt_service, "jwt_service")?,
            translation_queue: required(self.translation_queue, "translation_queue")?,
        })
    }
}

fn required<T>(value: Option<T>, name: &str) -> ServiceResult<T> {
    value.ok_or_else(|| ServiceError::validation(format!("{name} is required")))
}
