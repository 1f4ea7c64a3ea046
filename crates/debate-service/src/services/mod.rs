//! Business logic services
//!
//! This module contains all service layer implementations that handle
//! business logic, validation, and orchestration of domain operations.

pub mod comment;
pub mod context;
pub mod debate;
pub mod error;
pub mod reply;
pub mod user_sync;
pub mod vote;

pub use comment::CommentService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use debate::DebateService;
pub use error::{ServiceError, ServiceResult};
pub use reply::ReplyService;
pub use user_sync::{SyncOutcome, UserSyncService};
pub use vote::VoteService;
