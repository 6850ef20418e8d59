//! User handlers: list, register, login, get, delete.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};

use crate::api::dto::{
    AccountResponse, CredentialsRequest, MessageResponse, UserCredentialsDto, UserInfoResponse,
};
use crate::app_state::AppState;
use crate::error::{ApiError, ErrorResponse};

/// `GET /usuarios` — List every user with their password.
///
/// Returns plaintext passwords to any caller. Kept for compatibility with
/// the existing frontend; it should be removed once clients stop relying
/// on it.
///
/// # Errors
///
/// Returns [`ApiError::Persistence`] on database failure.
#[utoipa::path(
    get,
    path = "/usuarios",
    tag = "Usuarios",
    summary = "List users",
    description = "Returns every user's email and stored password (legacy compatibility shape).",
    responses(
        (status = 200, description = "All users", body = Vec<UserCredentialsDto>),
    )
)]
pub async fn list_users(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let users = state.account_service.list_users().await?;
    let body: Vec<UserCredentialsDto> = users.into_iter().map(UserCredentialsDto::from).collect();
    Ok(Json(body))
}

/// `POST /usuarios/registro` — Register a new user.
///
/// # Errors
///
/// Returns [`ApiError::EmailTaken`] if the email is already registered.
#[utoipa::path(
    post,
    path = "/usuarios/registro",
    tag = "Usuarios",
    summary = "Register a user",
    description = "Creates the user and their initial score (0 / 20, default level).",
    request_body = CredentialsRequest,
    responses(
        (status = 200, description = "User registered", body = AccountResponse),
        (status = 400, description = "Email already registered", body = ErrorResponse),
    )
)]
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<CredentialsRequest>,
) -> Result<impl IntoResponse, ApiError> {
    state
        .account_service
        .register(&req.email, &req.password)
        .await?;

    Ok(Json(AccountResponse {
        message: "Usuario registrado exitosamente".to_string(),
        email: req.email,
    }))
}

/// `POST /usuarios/login` — Authenticate a user.
///
/// # Errors
///
/// Returns [`ApiError::UserNotFound`] or [`ApiError::WrongPassword`].
#[utoipa::path(
    post,
    path = "/usuarios/login",
    tag = "Usuarios",
    summary = "Log in",
    request_body = CredentialsRequest,
    responses(
        (status = 200, description = "Credentials accepted", body = AccountResponse),
        (status = 401, description = "Wrong password", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
    )
)]
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<CredentialsRequest>,
) -> Result<impl IntoResponse, ApiError> {
    state
        .account_service
        .login(&req.email, &req.password)
        .await?;

    Ok(Json(AccountResponse {
        message: "Login exitoso".to_string(),
        email: req.email,
    }))
}

/// `GET /usuarios/{email}` — Get a user's public info.
///
/// # Errors
///
/// Returns [`ApiError::UserNotFound`] if absent.
#[utoipa::path(
    get,
    path = "/usuarios/{email}",
    tag = "Usuarios",
    summary = "Get user",
    params(
        ("email" = String, Path, description = "User email"),
    ),
    responses(
        (status = 200, description = "User info", body = UserInfoResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let user = state.account_service.get_user(&email).await?;
    Ok(Json(UserInfoResponse { email: user.email }))
}

/// `DELETE /usuarios/{email}` — Delete a user and everything they own.
///
/// # Errors
///
/// Returns [`ApiError::UserNotFound`] if absent.
#[utoipa::path(
    delete,
    path = "/usuarios/{email}",
    tag = "Usuarios",
    summary = "Delete user",
    description = "Deletes the user together with their favorites, visits and score.",
    params(
        ("email" = String, Path, description = "User email"),
    ),
    responses(
        (status = 200, description = "User deleted", body = MessageResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
    )
)]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    state.account_service.delete_user(&email).await?;
    Ok(Json(MessageResponse::new(
        "Usuario, favoritos, visitas y puntajes eliminados exitosamente",
    )))
}

/// User routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/usuarios", get(list_users))
        .route("/usuarios/registro", post(register))
        .route("/usuarios/login", post(login))
        .route("/usuarios/{email}", get(get_user).delete(delete_user))
}
