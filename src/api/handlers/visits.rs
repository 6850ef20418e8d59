//! Visit counter handlers.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Json, Router};

use crate::api::dto::{MessageResponse, VisitDto, VisitListResponse, VisitRequest};
use crate::app_state::AppState;
use crate::error::{ApiError, ErrorResponse};

/// `POST /usuarios/{email}/visitas` — Count one visit to a class.
///
/// # Errors
///
/// Returns [`ApiError::UserNotFound`] if absent.
#[utoipa::path(
    post,
    path = "/usuarios/{email}/visitas",
    tag = "Visitas",
    summary = "Record visit",
    description = "Creates the counter at 1 on the first visit and increments it afterwards.",
    params(
        ("email" = String, Path, description = "User email"),
    ),
    request_body = VisitRequest,
    responses(
        (status = 200, description = "Visit recorded", body = MessageResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
    )
)]
pub async fn record_visit(
    State(state): State<AppState>,
    Path(email): Path<String>,
    Json(req): Json<VisitRequest>,
) -> Result<impl IntoResponse, ApiError> {
    state
        .account_service
        .record_visit(&email, &req.class_id)
        .await?;
    Ok(Json(MessageResponse::new("Visita registrada exitosamente")))
}

/// `GET /usuarios/{email}/visitas` — List a user's visit counters.
///
/// # Errors
///
/// Returns [`ApiError::UserNotFound`] if absent.
#[utoipa::path(
    get,
    path = "/usuarios/{email}/visitas",
    tag = "Visitas",
    summary = "List visits",
    params(
        ("email" = String, Path, description = "User email"),
    ),
    responses(
        (status = 200, description = "Visit counters and their sum", body = VisitListResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
    )
)]
pub async fn list_visits(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let visits: Vec<VisitDto> = state
        .account_service
        .list_visits(&email)
        .await?
        .into_iter()
        .map(VisitDto::from)
        .collect();
    Ok(Json(VisitListResponse::new(email, visits)))
}

/// Visit routes.
pub fn routes() -> Router<AppState> {
    Router::new().route(
        "/usuarios/{email}/visitas",
        post(record_visit).get(list_visits),
    )
}
