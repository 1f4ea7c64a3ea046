//! Model to entity mappers
//!
//! - `From<Model> for Entity` where every column maps directly
//! - `TryFrom<Model> for Entity` where a text column holds an enum key

mod comment;
mod debate;
mod reaction;
mod reply;
mod user;
mod vote;

pub use reaction::parse_stored;
