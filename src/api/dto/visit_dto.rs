//! Visit counter DTOs.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::persistence::models::Visit;

/// Request body for `POST /usuarios/{email}/visitas`.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct VisitRequest {
    /// Class that was opened.
    #[serde(rename = "clase_id")]
    pub class_id: String,
}

/// One visit counter.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct VisitDto {
    /// External catalog class key.
    #[serde(rename = "clase_id")]
    pub class_id: String,
    /// Number of visits.
    pub count: i64,
}

impl From<Visit> for VisitDto {
    fn from(visit: Visit) -> Self {
        Self {
            class_id: visit.class_id,
            count: visit.count,
        }
    }
}

/// Response body for `GET /usuarios/{email}/visitas`.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct VisitListResponse {
    /// Owner email.
    pub email: String,
    /// All visit counters of the user.
    #[serde(rename = "visitas")]
    pub visits: Vec<VisitDto>,
    /// Sum of every counter.
    #[serde(rename = "total_visitas")]
    pub total_visits: i64,
}

impl VisitListResponse {
    /// Builds the response, summing the counters.
    #[must_use]
    pub fn new(email: String, visits: Vec<VisitDto>) -> Self {
        let total_visits = visits.iter().map(|v| v.count).sum();
        Self {
            email,
            visits,
            total_visits,
        }
    }
}
