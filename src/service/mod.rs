//! Service layer: business logic orchestration.
//!
//! [`AccountService`] applies the existence, conflict and credential
//! checks and delegates storage to [`crate::persistence::sqlite::SqliteStore`].

pub mod account_service;

pub use account_service::{AccountService, ScoreSubmission};
