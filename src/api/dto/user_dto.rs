//! User DTOs: registration, login, info and the legacy listing.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::persistence::models::User;

/// Request body for `POST /usuarios/registro` and `POST /usuarios/login`.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CredentialsRequest {
    /// Account email (case-sensitive).
    pub email: String,
    /// Account password.
    pub password: String,
}

/// Entry of `GET /usuarios`. Exposes the stored plaintext password, kept
/// only for compatibility with the existing frontend.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UserCredentialsDto {
    /// Account email.
    pub email: String,
    /// Stored password.
    pub password: String,
}

impl From<User> for UserCredentialsDto {
    fn from(user: User) -> Self {
        Self {
            email: user.email,
            password: user.password,
        }
    }
}

/// Response body for registration and login.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AccountResponse {
    /// Human-readable outcome.
    pub message: String,
    /// Account email.
    pub email: String,
}

/// Response body for `GET /usuarios/{email}`.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UserInfoResponse {
    /// Account email.
    pub email: String,
}
