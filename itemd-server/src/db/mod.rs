//! Database layer - connection pool, schema, and repositories
//!
//! # Design Principles
//!
//! - Connection pool (max 5 connections) - no shared mutable connection
//! - Schema creation is idempotent and runs on every process start
//! - Writes run inside a scoped transaction: commit on success, rollback on drop

pub mod migrations;
pub mod pool;
pub mod repos;

pub use pool::create_pool;
pub use repos::*;
