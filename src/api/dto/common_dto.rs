//! Shared DTO types used across multiple endpoints.

use serde::Serialize;
use utoipa::ToSchema;

/// Generic `{message}` acknowledgement.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct MessageResponse {
    /// Human-readable outcome.
    pub message: String,
}

impl MessageResponse {
    /// Builds a response from any string-like message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Path templates of the main resources, advertised by `GET /`.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct EndpointMap {
    /// Single user resource.
    pub usuarios: &'static str,
    /// Registration endpoint.
    pub registro: &'static str,
    /// Login endpoint.
    pub login: &'static str,
    /// Favorites of a user.
    pub favoritos: &'static str,
    /// Visit counters of a user.
    pub visitas: &'static str,
    /// Score of a user.
    pub puntajes: &'static str,
}

/// Service metadata returned by `GET /`.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RootResponse {
    /// Service description.
    pub message: &'static str,
    /// Crate version.
    pub version: &'static str,
    /// Backing database engine.
    pub database: &'static str,
    /// Endpoint map.
    pub endpoints: EndpointMap,
}
