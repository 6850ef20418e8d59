//! REST endpoint handlers organized by resource.

pub mod favorites;
pub mod scores;
pub mod system;
pub mod users;
pub mod visits;

use axum::Router;

use crate::app_state::AppState;

/// Composes all `/usuarios` resource routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(users::routes())
        .merge(favorites::routes())
        .merge(visits::routes())
        .merge(scores::routes())
}
