//! # noesis-api
//!
//! REST API for Noesis user accounts, favorite classes, per-class visit
//! counters and best quiz scores, backed by SQLite.
//!
//! ## Architecture
//!
//! ```text
//! Clients (HTTP/JSON)
//!     │
//!     ├── REST Handlers + DTOs (api/)
//!     │
//!     ├── AccountService (service/)
//!     ├── ScoreCard, UserId (domain/)
//!     │
//!     └── SqliteStore (persistence/) ── SQLite
//! ```

pub mod api;
pub mod app_state;
pub mod config;
pub mod domain;
pub mod error;
pub mod persistence;
pub mod service;
