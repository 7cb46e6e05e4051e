//! Repository implementations for database access
//!
//! Repositories borrow the pool and run each write inside its own
//! transaction; missing rows are reported as `None`/`false`, never as errors.

pub mod items;

pub use items::{DbError, Item, ItemRepo};
