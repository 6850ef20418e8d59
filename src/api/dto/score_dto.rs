//! Score DTOs.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::ScoreCard;
use crate::error::ApiError;

/// Request body for `POST /usuarios/{email}/puntajes`.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ScoreRequest {
    /// Points obtained.
    #[serde(rename = "puntaje_obtenido")]
    pub obtained: i64,
    /// Points available; must be positive.
    #[serde(rename = "puntaje_total")]
    pub total: i64,
    /// Level label.
    #[serde(rename = "nivel")]
    pub level: String,
}

impl TryFrom<ScoreRequest> for ScoreCard {
    type Error = ApiError;

    fn try_from(req: ScoreRequest) -> Result<Self, Self::Error> {
        Self::new(req.obtained, req.total, req.level)
    }
}

/// Response body for `GET /usuarios/{email}/puntajes`.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ScoreResponse {
    /// Owner email.
    pub email: String,
    /// Points obtained.
    #[serde(rename = "puntaje_obtenido")]
    pub obtained: i64,
    /// Points available.
    #[serde(rename = "puntaje_total")]
    pub total: i64,
    /// Level label.
    #[serde(rename = "nivel")]
    pub level: String,
}

/// Payload of a score submission result.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ScoreUpdateData {
    /// Whether the submission became the stored score.
    pub is_new_best: bool,
    /// Submitted points obtained.
    #[serde(rename = "puntaje_obtenido")]
    pub obtained: i64,
    /// Submitted points available.
    #[serde(rename = "puntaje_total")]
    pub total: i64,
    /// Submitted level label.
    #[serde(rename = "nivel")]
    pub level: String,
}

/// Response body for `POST /usuarios/{email}/puntajes`.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ScoreUpdateResponse {
    /// Human-readable outcome.
    pub message: String,
    /// Submission result.
    pub data: ScoreUpdateData,
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn request_uses_spanish_wire_names() {
        let json = r#"{"puntaje_obtenido": 12, "puntaje_total": 20, "nivel": "Intermedio"}"#;
        let Ok(req) = serde_json::from_str::<ScoreRequest>(json) else {
            panic!("deserialization failed");
        };
        assert_eq!(req.obtained, 12);
        assert_eq!(req.total, 20);
        assert_eq!(req.level, "Intermedio");
    }

    #[test]
    fn zero_total_request_is_invalid() {
        let req = ScoreRequest {
            obtained: 3,
            total: 0,
            level: "X".to_string(),
        };
        assert!(matches!(
            ScoreCard::try_from(req),
            Err(ApiError::InvalidRequest(_))
        ));
    }

    #[test]
    fn update_response_nests_data() {
        let body = ScoreUpdateResponse {
            message: "ok".to_string(),
            data: ScoreUpdateData {
                is_new_best: true,
                obtained: 12,
                total: 20,
                level: "Intermedio".to_string(),
            },
        };
        let value = serde_json::to_value(&body).ok();
        let Some(value) = value else {
            panic!("serialization failed");
        };
        assert_eq!(value["data"]["is_new_best"], serde_json::json!(true));
        assert_eq!(value["data"]["puntaje_obtenido"], serde_json::json!(12));
    }
}
