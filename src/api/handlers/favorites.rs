//! Favorite handlers: add, remove, list, update.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::routing::{delete, post};
use axum::{Json, Router};

use crate::api::dto::{
    FavoriteAddResponse, FavoriteDto, FavoriteListResponse, FavoriteRequest, MessageResponse,
};
use crate::app_state::AppState;
use crate::error::{ApiError, ErrorResponse};
use crate::persistence::models::FavoriteFields;

/// `POST /usuarios/{email}/favoritos` — Add a class to favorites.
///
/// # Errors
///
/// Returns [`ApiError::UserNotFound`] or [`ApiError::FavoriteExists`].
#[utoipa::path(
    post,
    path = "/usuarios/{email}/favoritos",
    tag = "Favoritos",
    summary = "Add favorite",
    params(
        ("email" = String, Path, description = "User email"),
    ),
    request_body = FavoriteRequest,
    responses(
        (status = 200, description = "Favorite added", body = FavoriteAddResponse),
        (status = 400, description = "Class already in favorites", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
    )
)]
pub async fn add_favorite(
    State(state): State<AppState>,
    Path(email): Path<String>,
    Json(req): Json<FavoriteRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let fields = FavoriteFields::from(req);
    let favorite = state.account_service.add_favorite(&email, &fields).await?;

    Ok(Json(FavoriteAddResponse {
        message: "Favorito agregado exitosamente".to_string(),
        favorite: FavoriteDto::from(favorite),
    }))
}

/// `DELETE /usuarios/{email}/favoritos/{clase_id}` — Remove a favorite.
///
/// # Errors
///
/// Returns [`ApiError::UserNotFound`] or [`ApiError::FavoriteNotFound`].
#[utoipa::path(
    delete,
    path = "/usuarios/{email}/favoritos/{clase_id}",
    tag = "Favoritos",
    summary = "Remove favorite",
    params(
        ("email" = String, Path, description = "User email"),
        ("clase_id" = String, Path, description = "Class key"),
    ),
    responses(
        (status = 200, description = "Favorite removed", body = MessageResponse),
        (status = 404, description = "User or favorite not found", body = ErrorResponse),
    )
)]
pub async fn remove_favorite(
    State(state): State<AppState>,
    Path((email, class_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, ApiError> {
    state
        .account_service
        .remove_favorite(&email, &class_id)
        .await?;
    Ok(Json(MessageResponse::new("Favorito removido exitosamente")))
}

/// `GET /usuarios/{email}/favoritos` — List a user's favorites.
///
/// # Errors
///
/// Returns [`ApiError::UserNotFound`] if absent.
#[utoipa::path(
    get,
    path = "/usuarios/{email}/favoritos",
    tag = "Favoritos",
    summary = "List favorites",
    params(
        ("email" = String, Path, description = "User email"),
    ),
    responses(
        (status = 200, description = "Favorites of the user", body = FavoriteListResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
    )
)]
pub async fn list_favorites(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let favorites: Vec<FavoriteDto> = state
        .account_service
        .list_favorites(&email)
        .await?
        .into_iter()
        .map(FavoriteDto::from)
        .collect();

    Ok(Json(FavoriteListResponse {
        email,
        total: favorites.len(),
        favorites,
    }))
}

/// `PUT /usuarios/{email}/favoritos/{clase_id}` — Overwrite a favorite.
///
/// # Errors
///
/// Returns [`ApiError::UserNotFound`], [`ApiError::FavoriteNotFound`], or
/// [`ApiError::FavoriteExists`] when the new class key is already taken.
#[utoipa::path(
    put,
    path = "/usuarios/{email}/favoritos/{clase_id}",
    tag = "Favoritos",
    summary = "Update favorite",
    description = "Replaces class key, name and image of the favorite stored under `clase_id`.",
    params(
        ("email" = String, Path, description = "User email"),
        ("clase_id" = String, Path, description = "Current class key"),
    ),
    request_body = FavoriteRequest,
    responses(
        (status = 200, description = "Favorite updated", body = MessageResponse),
        (status = 400, description = "New class key already in favorites", body = ErrorResponse),
        (status = 404, description = "User or favorite not found", body = ErrorResponse),
    )
)]
pub async fn update_favorite(
    State(state): State<AppState>,
    Path((email, class_id)): Path<(String, String)>,
    Json(req): Json<FavoriteRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let fields = FavoriteFields::from(req);
    state
        .account_service
        .update_favorite(&email, &class_id, &fields)
        .await?;
    Ok(Json(MessageResponse::new("Favorito actualizado exitosamente")))
}

/// Favorite routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/usuarios/{email}/favoritos",
            post(add_favorite).get(list_favorites),
        )
        .route(
            "/usuarios/{email}/favoritos/{clase_id}",
            delete(remove_favorite).put(update_favorite),
        )
}
