//! System endpoints: service metadata and health check.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use utoipa::ToSchema;

use crate::api::dto::{EndpointMap, RootResponse};
use crate::app_state::AppState;

const DATABASE_ENGINE: &str = "SQLite";

/// Health report when every table could be counted.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthyReport {
    /// Always `"healthy"`.
    pub status: &'static str,
    /// Backing database engine.
    pub database: &'static str,
    /// Rows in `usuarios`.
    pub usuarios_registrados: i64,
    /// Rows in `favoritos`.
    pub total_favoritos: i64,
    /// Rows in `visitas`.
    pub total_visitas: i64,
    /// Rows in `puntajes`.
    pub total_puntajes: i64,
    /// Always `true`.
    pub database_ok: bool,
}

/// Health report when a count query failed.
#[derive(Debug, Serialize, ToSchema)]
pub struct UnhealthyReport {
    /// Always `"unhealthy"`.
    pub status: &'static str,
    /// Text of the store error.
    pub error: String,
    /// Always `false`.
    pub database_ok: bool,
}

/// Health check response.
#[derive(Debug, Serialize, ToSchema)]
#[serde(untagged)]
pub enum HealthResponse {
    /// All counts succeeded.
    Healthy(HealthyReport),
    /// A count failed.
    Unhealthy(UnhealthyReport),
}

/// `GET /health` — Service health status and table row counts.
///
/// Always answers 200; a store failure is reported in the body.
#[utoipa::path(
    get,
    path = "/health",
    tag = "System",
    summary = "Health check",
    description = "Counts the rows of every table. Store failures are reported as `unhealthy` with status 200.",
    responses(
        (status = 200, description = "Health report", body = HealthResponse),
    )
)]
pub async fn health_handler(State(state): State<AppState>) -> impl IntoResponse {
    let report = match state.account_service.table_counts().await {
        Ok(counts) => HealthResponse::Healthy(HealthyReport {
            status: "healthy",
            database: DATABASE_ENGINE,
            usuarios_registrados: counts.users,
            total_favoritos: counts.favorites,
            total_visitas: counts.visits,
            total_puntajes: counts.scores,
            database_ok: true,
        }),
        Err(err) => {
            tracing::warn!(error = %err, "health check failed");
            HealthResponse::Unhealthy(UnhealthyReport {
                status: "unhealthy",
                error: err.to_string(),
                database_ok: false,
            })
        }
    };
    (StatusCode::OK, Json(report))
}

/// `GET /` — Service metadata and endpoint map.
#[utoipa::path(
    get,
    path = "/",
    tag = "System",
    summary = "Service metadata",
    responses(
        (status = 200, description = "Service description and endpoint map", body = RootResponse),
    )
)]
pub async fn root_handler() -> impl IntoResponse {
    Json(RootResponse {
        message: "API de usuarios, favoritos, visitas y puntajes SQLite",
        version: env!("CARGO_PKG_VERSION"),
        database: DATABASE_ENGINE,
        endpoints: EndpointMap {
            usuarios: "/usuarios/{email}",
            registro: "/usuarios/registro",
            login: "/usuarios/login",
            favoritos: "/usuarios/{email}/favoritos",
            visitas: "/usuarios/{email}/visitas",
            puntajes: "/usuarios/{email}/puntajes",
        },
    })
}

/// System routes mounted at the root level.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
}
