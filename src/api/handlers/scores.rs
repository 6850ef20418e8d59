//! Score handlers: read and submit.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};

use crate::api::dto::{ScoreRequest, ScoreResponse, ScoreUpdateData, ScoreUpdateResponse};
use crate::app_state::AppState;
use crate::domain::ScoreCard;
use crate::error::{ApiError, ErrorResponse};

/// `GET /usuarios/{email}/puntajes` — Get a user's best score.
///
/// # Errors
///
/// Returns [`ApiError::UserNotFound`] if absent.
#[utoipa::path(
    get,
    path = "/usuarios/{email}/puntajes",
    tag = "Puntajes",
    summary = "Get score",
    description = "Returns the stored score, creating the initial 0 / 20 score first if none exists.",
    params(
        ("email" = String, Path, description = "User email"),
    ),
    responses(
        (status = 200, description = "Stored score", body = ScoreResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
    )
)]
pub async fn get_score(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let score = state.account_service.get_score(&email).await?;
    Ok(Json(ScoreResponse {
        email,
        obtained: score.obtained,
        total: score.total,
        level: score.level,
    }))
}

/// `POST /usuarios/{email}/puntajes` — Submit a score.
///
/// The submission is stored only if its percentage strictly beats the
/// stored one. The response echoes the submitted values either way.
///
/// # Errors
///
/// Returns [`ApiError::InvalidRequest`] if `puntaje_total` is not positive
/// and [`ApiError::UserNotFound`] if the user is absent.
#[utoipa::path(
    post,
    path = "/usuarios/{email}/puntajes",
    tag = "Puntajes",
    summary = "Submit score",
    params(
        ("email" = String, Path, description = "User email"),
    ),
    request_body = ScoreRequest,
    responses(
        (status = 200, description = "Submission processed", body = ScoreUpdateResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 422, description = "Non-positive puntaje_total", body = ErrorResponse),
    )
)]
pub async fn submit_score(
    State(state): State<AppState>,
    Path(email): Path<String>,
    Json(req): Json<ScoreRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let card = ScoreCard::try_from(req)?;
    let outcome = state.account_service.submit_score(&email, card).await?;

    Ok(Json(ScoreUpdateResponse {
        message: "Puntaje procesado exitosamente".to_string(),
        data: ScoreUpdateData {
            is_new_best: outcome.is_new_best,
            obtained: outcome.submitted.obtained,
            total: outcome.submitted.total,
            level: outcome.submitted.level,
        },
    }))
}

/// Score routes.
pub fn routes() -> Router<AppState> {
    Router::new().route(
        "/usuarios/{email}/puntajes",
        get(get_score).post(submit_score),
    )
}
