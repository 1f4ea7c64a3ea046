//! # debate-service
//!
//! Application layer containing business logic, services, DTOs, and the
//! background translation queue.

pub mod dto;
pub mod services;
pub mod translation;

#[cfg(test)]
pub(crate) mod testing;

pub use dto::*;
pub use services::{
    CommentService, DebateService, ReplyService, ServiceContext, ServiceContextBuilder,
    ServiceError, ServiceResult, SyncOutcome, UserSyncService, VoteService,
};
pub use translation::{
    CopyTranslator, HttpTranslator, TranslationJob, TranslationQueue, TranslationWorker,
};
