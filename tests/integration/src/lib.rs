//! Integration test utilities for the debate server
//!
//! Spawns the REST API against a real PostgreSQL database and seeds the
//! user projection directly, since users normally arrive through Kafka.

pub mod fixtures;

pub use fixtures::*;
pub use helpers::*;
