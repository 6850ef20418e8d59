//! Type-safe user identifier.
//!
//! [`UserId`] is a newtype wrapper around the integer primary key of the
//! `usuarios` table so that it cannot be confused with other row IDs.

use std::fmt;

use serde::Serialize;

/// Identifier of a registered user.
///
/// Generated by the store on insert and immutable thereafter. Every
/// favorite, visit and score row references its owner through it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, sqlx::Type)]
#[serde(transparent)]
#[sqlx(transparent)]
pub struct UserId(i64);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for UserId {
    fn from(raw: i64) -> Self {
        Self(raw)
    }
}

impl From<UserId> for i64 {
    fn from(id: UserId) -> Self {
        id.0
    }
}
