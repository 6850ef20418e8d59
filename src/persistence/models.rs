//! Database row models for users, favorites, visits and scores.

use sqlx::FromRow;

use crate::domain::{ScoreCard, UserId};

/// A row from the `usuarios` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct User {
    /// Auto-increment row ID.
    pub id: UserId,
    /// Unique, case-sensitive email.
    pub email: String,
    /// Plaintext password, as stored by the legacy schema.
    pub password: String,
}

/// A row from the `favoritos` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Favorite {
    /// Auto-increment row ID.
    pub id: i64,
    /// Owning user.
    #[sqlx(rename = "usuario_id")]
    pub user_id: UserId,
    /// External catalog class key.
    #[sqlx(rename = "clase_id")]
    pub class_id: String,
    /// Display name of the class.
    #[sqlx(rename = "nombre_clase")]
    pub class_name: String,
    /// Path of the class thumbnail.
    #[sqlx(rename = "imagen_path")]
    pub image_path: String,
}

/// Column values for inserting or overwriting a favorite.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FavoriteFields {
    /// External catalog class key.
    pub class_id: String,
    /// Display name of the class.
    pub class_name: String,
    /// Path of the class thumbnail.
    pub image_path: String,
}

/// A row from the `visitas` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Visit {
    /// Auto-increment row ID.
    pub id: i64,
    /// Owning user.
    #[sqlx(rename = "usuario_id")]
    pub user_id: UserId,
    /// External catalog class key.
    #[sqlx(rename = "clase_id")]
    pub class_id: String,
    /// Number of times the user opened the class.
    pub count: i64,
}

/// A row from the `puntajes` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Score {
    /// Auto-increment row ID.
    pub id: i64,
    /// Owning user.
    #[sqlx(rename = "usuario_id")]
    pub user_id: UserId,
    /// Points obtained.
    #[sqlx(rename = "puntaje_obtenido")]
    pub obtained: i64,
    /// Points available.
    #[sqlx(rename = "puntaje_total")]
    pub total: i64,
    /// Level label.
    #[sqlx(rename = "nivel")]
    pub level: String,
}

impl Score {
    /// The stored values as a [`ScoreCard`] for comparison.
    #[must_use]
    pub fn card(&self) -> ScoreCard {
        ScoreCard {
            obtained: self.obtained,
            total: self.total,
            level: self.level.clone(),
        }
    }
}

/// Row counts of every table, reported by the health check.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TableCounts {
    /// Rows in `usuarios`.
    pub users: i64,
    /// Rows in `favoritos`.
    pub favorites: i64,
    /// Rows in `visitas`.
    pub visits: i64,
    /// Rows in `puntajes`.
    pub scores: i64,
}
