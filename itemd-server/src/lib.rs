//! itemd-server: HTTP CRUD service over item records
//!
//! Exposes create/read/update/delete operations on a single `items` table
//! through a JSON API under `/api/v1`.

pub mod db;
pub mod http;
pub mod models;
