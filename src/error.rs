//! API error types with HTTP status code mapping.
//!
//! [`ApiError`] is the central error type for the service. Each variant
//! maps to a specific HTTP status code and a JSON body of the form
//! `{"detail": "..."}`, the shape existing clients already parse.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use utoipa::ToSchema;

/// Structured JSON error response body.
///
/// ```json
/// { "detail": "Usuario no encontrado" }
/// ```
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable error message.
    pub detail: String,
}

/// Server-side error enum with HTTP status code mapping.
///
/// | Variant             | HTTP Status               |
/// |---------------------|---------------------------|
/// | `UserNotFound`      | 404 Not Found             |
/// | `FavoriteNotFound`  | 404 Not Found             |
/// | `EmailTaken`        | 400 Bad Request           |
/// | `FavoriteExists`    | 400 Bad Request           |
/// | `WrongPassword`     | 401 Unauthorized          |
/// | `InvalidRequest`    | 422 Unprocessable Entity  |
/// | `Persistence`       | 500 Internal Server Error |
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// No user is registered under the requested email.
    #[error("Usuario no encontrado")]
    UserNotFound,

    /// The user has no favorite for the requested class.
    #[error("Favorito no encontrado")]
    FavoriteNotFound,

    /// Registration attempted with an email that already exists.
    #[error("El email ya está registrado")]
    EmailTaken,

    /// The class is already in the user's favorites.
    #[error("La clase ya está en favoritos")]
    FavoriteExists,

    /// Login attempted with a password that does not match.
    #[error("Contraseña incorrecta")]
    WrongPassword,

    /// Request payload is well-formed JSON but semantically invalid.
    #[error("{0}")]
    InvalidRequest(String),

    /// Store failure.
    #[error("persistence error: {0}")]
    Persistence(String),
}

impl ApiError {
    /// Returns the HTTP status code for this variant.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::UserNotFound | Self::FavoriteNotFound => StatusCode::NOT_FOUND,
            Self::EmailTaken | Self::FavoriteExists => StatusCode::BAD_REQUEST,
            Self::WrongPassword => StatusCode::UNAUTHORIZED,
            Self::InvalidRequest(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Persistence(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message sent to the client. Store failures are reported generically;
    /// the cause only goes to the log.
    #[must_use]
    pub fn detail(&self) -> String {
        match self {
            Self::Persistence(_) => "Error interno del servidor".to_string(),
            other => other.to_string(),
        }
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        Self::Persistence(err.to_string())
    }
}

impl From<sqlx::migrate::MigrateError> for ApiError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        Self::Persistence(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::debug!(%status, error = %self, "request rejected");
        }
        let body = ErrorResponse {
            detail: self.detail(),
        };
        let mut response = axum::Json(body).into_response();
        *response.status_mut() = status;
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_follow_error_taxonomy() {
        assert_eq!(ApiError::UserNotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(ApiError::FavoriteNotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(ApiError::EmailTaken.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::FavoriteExists.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::WrongPassword.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            ApiError::InvalidRequest("bad".to_string()).status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            ApiError::Persistence("disk I/O error".to_string()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn persistence_detail_does_not_leak_cause() {
        let err = ApiError::Persistence("no such table: usuarios".to_string());
        assert_eq!(err.detail(), "Error interno del servidor");
        assert!(err.to_string().contains("no such table"));
    }

    #[test]
    fn into_response_sets_status() {
        let response = ApiError::WrongPassword.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
