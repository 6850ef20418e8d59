//! OpenAPI document covering every REST endpoint.

use utoipa::OpenApi;

use super::handlers::{favorites, scores, system, users, visits};

/// Generated OpenAPI specification, served at `/openapi.json` when the
/// `swagger-ui` feature is enabled.
#[derive(Debug, OpenApi)]
#[openapi(
    info(
        title = "API Usuarios, Favoritos, Visitas y Puntajes Noesis",
        description = "User accounts, favorites, visit counters and best scores."
    ),
    paths(
        users::list_users,
        users::register,
        users::login,
        users::get_user,
        users::delete_user,
        favorites::add_favorite,
        favorites::remove_favorite,
        favorites::list_favorites,
        favorites::update_favorite,
        visits::record_visit,
        visits::list_visits,
        scores::get_score,
        scores::submit_score,
        system::root_handler,
        system::health_handler,
    ),
    tags(
        (name = "Usuarios", description = "Registration, login and account management"),
        (name = "Favoritos", description = "Bookmarked catalog classes"),
        (name = "Visitas", description = "Per-class visit counters"),
        (name = "Puntajes", description = "Best quiz scores"),
        (name = "System", description = "Metadata and health"),
    )
)]
pub struct ApiDoc;
