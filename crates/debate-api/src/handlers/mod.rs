//! Request handlers

pub mod comments;
pub mod debates;
pub mod health;
pub mod replies;
pub mod votes;
