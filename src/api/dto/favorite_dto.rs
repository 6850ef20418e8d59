//! Favorite DTOs.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::persistence::models::{Favorite, FavoriteFields};

/// Request body for adding or updating a favorite.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct FavoriteRequest {
    /// External catalog class key.
    #[serde(rename = "clase_id")]
    pub class_id: String,
    /// Display name of the class.
    #[serde(rename = "nombre_clase")]
    pub class_name: String,
    /// Path of the class thumbnail.
    #[serde(rename = "imagen_path")]
    pub image_path: String,
}

impl From<FavoriteRequest> for FavoriteFields {
    fn from(req: FavoriteRequest) -> Self {
        Self {
            class_id: req.class_id,
            class_name: req.class_name,
            image_path: req.image_path,
        }
    }
}

/// A favorite as returned to clients.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct FavoriteDto {
    /// External catalog class key.
    #[serde(rename = "clase_id")]
    pub class_id: String,
    /// Display name of the class.
    #[serde(rename = "nombre_clase")]
    pub class_name: String,
    /// Path of the class thumbnail.
    #[serde(rename = "imagen_path")]
    pub image_path: String,
}

impl From<Favorite> for FavoriteDto {
    fn from(fav: Favorite) -> Self {
        Self {
            class_id: fav.class_id,
            class_name: fav.class_name,
            image_path: fav.image_path,
        }
    }
}

/// Response body for `POST /usuarios/{email}/favoritos`.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct FavoriteAddResponse {
    /// Human-readable outcome.
    pub message: String,
    /// The stored favorite.
    #[serde(rename = "favorito")]
    pub favorite: FavoriteDto,
}

/// Response body for `GET /usuarios/{email}/favoritos`.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct FavoriteListResponse {
    /// Owner email.
    pub email: String,
    /// All favorites of the user.
    #[serde(rename = "favoritos")]
    pub favorites: Vec<FavoriteDto>,
    /// Number of favorites.
    pub total: usize,
}
