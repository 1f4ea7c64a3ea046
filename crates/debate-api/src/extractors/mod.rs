//! Axum extractors for request handling
//!
//! Custom extractors for authentication, validation, pagination, and
//! typed path/query parameters.

mod auth;
mod pagination;
mod params;
mod validated;

pub use auth::AuthUser;
pub use pagination::{Pagination, PaginationParams};
pub use params::{IdPath, QueryParams};
pub use validated::ValidatedJson;
