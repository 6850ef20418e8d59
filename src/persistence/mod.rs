//! Persistence layer: SQLite storage for users, favorites, visits and scores.
//!
//! The schema lives in `migrations/` and is applied at startup through
//! `sqlx::migrate!`. [`sqlite::SqliteStore`] exposes row-level operations;
//! multi-row changes run inside a single transaction.

pub mod models;
pub mod sqlite;
