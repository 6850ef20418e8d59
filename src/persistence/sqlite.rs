//! SQLite implementation of the persistence layer.

use std::str::FromStr;

use sqlx::{Sqlite, SqlitePool, Transaction};
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};

use super::models::{Favorite, FavoriteFields, Score, TableCounts, User, Visit};
use crate::config::ApiConfig;
use crate::domain::{ScoreCard, UserId};
use crate::error::ApiError;

const FAVORITE_COLUMNS: &str = "id, usuario_id, clase_id, nombre_clase, imagen_path";
const VISIT_COLUMNS: &str = "id, usuario_id, clase_id, count";
const SCORE_COLUMNS: &str = "id, usuario_id, puntaje_obtenido, puntaje_total, nivel";

/// SQLite-backed store using `sqlx::SqlitePool`.
///
/// Every method is a single round trip or a single transaction. Pooled
/// connections are returned on drop, and uncommitted transactions roll
/// back on drop, so no method leaves partial state behind on error.
///
/// Write transactions start with `BEGIN IMMEDIATE`: they take the
/// database write lock up front and concurrent writers wait on the busy
/// timeout instead of failing a lock upgrade.
#[derive(Debug, Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Creates a store over an existing pool. The schema is not touched.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    #[cfg(test)]
    pub(crate) fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    async fn begin_write(&self) -> Result<Transaction<'static, Sqlite>, ApiError> {
        Ok(self.pool.begin_with("BEGIN IMMEDIATE").await?)
    }

    /// Opens (creating if missing) the database at `config.database_url`
    /// in WAL mode with foreign keys on, then applies migrations.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Persistence`] if the URL is invalid, the
    /// database cannot be opened, or a migration fails.
    pub async fn connect(config: &ApiConfig) -> Result<Self, ApiError> {
        let options = SqliteConnectOptions::from_str(&config.database_url)?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(config.database_max_connections)
            .acquire_timeout(config.connect_timeout())
            .connect_with(options)
            .await?;

        let store = Self::new(pool);
        store.migrate().await?;
        Ok(store)
    }

    /// Opens a private in-memory database with the schema applied.
    ///
    /// The pool holds exactly one connection that never expires, since
    /// each SQLite in-memory connection is its own database.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Persistence`] if the database cannot be opened
    /// or a migration fails.
    pub async fn in_memory() -> Result<Self, ApiError> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;

        let store = Self::new(pool);
        store.migrate().await?;
        Ok(store)
    }

    /// Applies the embedded migrations. Idempotent.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Persistence`] if a migration fails.
    pub async fn migrate(&self) -> Result<(), ApiError> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        Ok(())
    }

    // ── Users ──────────────────────────────────────────────────────────

    /// Looks up a user by exact (case-sensitive) email.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Persistence`] on database failure.
    pub async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, ApiError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, email, password FROM usuarios WHERE email = ?1",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }

    /// Returns every user in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Persistence`] on database failure.
    pub async fn list_users(&self) -> Result<Vec<User>, ApiError> {
        let users = sqlx::query_as::<_, User>("SELECT id, email, password FROM usuarios ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(users)
    }

    /// Inserts a user together with their initial score, atomically.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::EmailTaken`] if the email already exists and
    /// [`ApiError::Persistence`] on any other database failure.
    pub async fn create_user(&self, email: &str, password: &str) -> Result<User, ApiError> {
        let mut tx = self.begin_write().await?;

        let user = sqlx::query_as::<_, User>(
            "INSERT INTO usuarios (email, password) VALUES (?1, ?2) RETURNING id, email, password",
        )
        .bind(email)
        .bind(password)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| unique_violation_as(e, ApiError::EmailTaken))?;

        let initial = ScoreCard::initial();
        sqlx::query(
            "INSERT INTO puntajes (usuario_id, puntaje_obtenido, puntaje_total, nivel) \
             VALUES (?1, ?2, ?3, ?4)",
        )
        .bind(user.id)
        .bind(initial.obtained)
        .bind(initial.total)
        .bind(&initial.level)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(user)
    }

    /// Deletes a user and every favorite, visit and score they own in one
    /// transaction. Returns `false` if no such user existed.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Persistence`] on database failure.
    pub async fn delete_user(&self, user_id: UserId) -> Result<bool, ApiError> {
        let mut tx = self.begin_write().await?;

        for table in ["favoritos", "visitas", "puntajes"] {
            sqlx::query(&format!("DELETE FROM {table} WHERE usuario_id = ?1"))
                .bind(user_id)
                .execute(&mut *tx)
                .await?;
        }

        let result = sqlx::query("DELETE FROM usuarios WHERE id = ?1")
            .bind(user_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(result.rows_affected() > 0)
    }

    // ── Favorites ──────────────────────────────────────────────────────

    /// Looks up the favorite a user has for a class.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Persistence`] on database failure.
    pub async fn find_favorite(
        &self,
        user_id: UserId,
        class_id: &str,
    ) -> Result<Option<Favorite>, ApiError> {
        let favorite = sqlx::query_as::<_, Favorite>(&format!(
            "SELECT {FAVORITE_COLUMNS} FROM favoritos WHERE usuario_id = ?1 AND clase_id = ?2"
        ))
        .bind(user_id)
        .bind(class_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(favorite)
    }

    /// Returns all favorites of a user in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Persistence`] on database failure.
    pub async fn list_favorites(&self, user_id: UserId) -> Result<Vec<Favorite>, ApiError> {
        let favorites = sqlx::query_as::<_, Favorite>(&format!(
            "SELECT {FAVORITE_COLUMNS} FROM favoritos WHERE usuario_id = ?1 ORDER BY id"
        ))
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(favorites)
    }

    /// Inserts a favorite.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::FavoriteExists`] if the user already has a
    /// favorite for the class and [`ApiError::Persistence`] otherwise.
    pub async fn insert_favorite(
        &self,
        user_id: UserId,
        fields: &FavoriteFields,
    ) -> Result<Favorite, ApiError> {
        let favorite = sqlx::query_as::<_, Favorite>(&format!(
            "INSERT INTO favoritos (usuario_id, clase_id, nombre_clase, imagen_path) \
             VALUES (?1, ?2, ?3, ?4) RETURNING {FAVORITE_COLUMNS}"
        ))
        .bind(user_id)
        .bind(&fields.class_id)
        .bind(&fields.class_name)
        .bind(&fields.image_path)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| unique_violation_as(e, ApiError::FavoriteExists))?;
        Ok(favorite)
    }

    /// Overwrites every column of an existing favorite.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::FavoriteExists`] if the new class ID collides
    /// with another favorite of the same user, [`ApiError::FavoriteNotFound`]
    /// if the row vanished, and [`ApiError::Persistence`] otherwise.
    pub async fn update_favorite(
        &self,
        favorite_id: i64,
        fields: &FavoriteFields,
    ) -> Result<(), ApiError> {
        let result = sqlx::query(
            "UPDATE favoritos SET clase_id = ?1, nombre_clase = ?2, imagen_path = ?3 WHERE id = ?4",
        )
        .bind(&fields.class_id)
        .bind(&fields.class_name)
        .bind(&fields.image_path)
        .bind(favorite_id)
        .execute(&self.pool)
        .await
        .map_err(|e| unique_violation_as(e, ApiError::FavoriteExists))?;

        if result.rows_affected() == 0 {
            return Err(ApiError::FavoriteNotFound);
        }
        Ok(())
    }

    /// Deletes a favorite by row ID. Returns `false` if it did not exist.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Persistence`] on database failure.
    pub async fn delete_favorite(&self, favorite_id: i64) -> Result<bool, ApiError> {
        let result = sqlx::query("DELETE FROM favoritos WHERE id = ?1")
            .bind(favorite_id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    // ── Visits ─────────────────────────────────────────────────────────

    /// Records one visit: inserts the counter at 1 or increments it, in a
    /// single atomic upsert.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Persistence`] on database failure.
    pub async fn record_visit(&self, user_id: UserId, class_id: &str) -> Result<Visit, ApiError> {
        let visit = sqlx::query_as::<_, Visit>(&format!(
            "INSERT INTO visitas (usuario_id, clase_id, count) VALUES (?1, ?2, 1) \
             ON CONFLICT (usuario_id, clase_id) DO UPDATE SET count = visitas.count + 1 \
             RETURNING {VISIT_COLUMNS}"
        ))
        .bind(user_id)
        .bind(class_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(visit)
    }

    /// Returns all visit counters of a user in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Persistence`] on database failure.
    pub async fn list_visits(&self, user_id: UserId) -> Result<Vec<Visit>, ApiError> {
        let visits = sqlx::query_as::<_, Visit>(&format!(
            "SELECT {VISIT_COLUMNS} FROM visitas WHERE usuario_id = ?1 ORDER BY id"
        ))
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(visits)
    }

    // ── Scores ─────────────────────────────────────────────────────────

    /// Returns the stored score of a user, if any.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Persistence`] on database failure.
    pub async fn find_score(&self, user_id: UserId) -> Result<Option<Score>, ApiError> {
        let score = sqlx::query_as::<_, Score>(&format!(
            "SELECT {SCORE_COLUMNS} FROM puntajes WHERE usuario_id = ?1"
        ))
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(score)
    }

    /// Returns the stored score of a user, creating the initial one first
    /// if none exists.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Persistence`] on database failure.
    pub async fn get_or_create_score(&self, user_id: UserId) -> Result<Score, ApiError> {
        let initial = ScoreCard::initial();
        sqlx::query(
            "INSERT INTO puntajes (usuario_id, puntaje_obtenido, puntaje_total, nivel) \
             VALUES (?1, ?2, ?3, ?4) ON CONFLICT (usuario_id) DO NOTHING",
        )
        .bind(user_id)
        .bind(initial.obtained)
        .bind(initial.total)
        .bind(&initial.level)
        .execute(&self.pool)
        .await?;

        let score = sqlx::query_as::<_, Score>(&format!(
            "SELECT {SCORE_COLUMNS} FROM puntajes WHERE usuario_id = ?1"
        ))
        .bind(user_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(score)
    }

    /// Stores `card` if the user has no score yet or if it beats the
    /// stored one. Returns whether it became the new best.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Persistence`] on database failure.
    pub async fn submit_score(&self, user_id: UserId, card: &ScoreCard) -> Result<bool, ApiError> {
        let mut tx = self.begin_write().await?;

        let stored = sqlx::query_as::<_, Score>(&format!(
            "SELECT {SCORE_COLUMNS} FROM puntajes WHERE usuario_id = ?1"
        ))
        .bind(user_id)
        .fetch_optional(&mut *tx)
        .await?;

        let is_new_best = match stored {
            None => {
                sqlx::query(
                    "INSERT INTO puntajes (usuario_id, puntaje_obtenido, puntaje_total, nivel) \
                     VALUES (?1, ?2, ?3, ?4)",
                )
                .bind(user_id)
                .bind(card.obtained)
                .bind(card.total)
                .bind(&card.level)
                .execute(&mut *tx)
                .await?;
                true
            }
            Some(stored) if card.beats(&stored.card()) => {
                sqlx::query(
                    "UPDATE puntajes SET puntaje_obtenido = ?1, puntaje_total = ?2, nivel = ?3 \
                     WHERE id = ?4",
                )
                .bind(card.obtained)
                .bind(card.total)
                .bind(&card.level)
                .bind(stored.id)
                .execute(&mut *tx)
                .await?;
                true
            }
            Some(_) => false,
        };

        tx.commit().await?;
        Ok(is_new_best)
    }

    // ── Health ─────────────────────────────────────────────────────────

    /// Counts the rows of all four tables in one query.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Persistence`] on database failure.
    pub async fn table_counts(&self) -> Result<TableCounts, ApiError> {
        let (users, favorites, visits, scores) = sqlx::query_as::<_, (i64, i64, i64, i64)>(
            "SELECT (SELECT COUNT(*) FROM usuarios), (SELECT COUNT(*) FROM favoritos), \
                    (SELECT COUNT(*) FROM visitas), (SELECT COUNT(*) FROM puntajes)",
        )
        .fetch_one(&self.pool)
        .await?;

        Ok(TableCounts {
            users,
            favorites,
            visits,
            scores,
        })
    }
}

/// Maps a unique-constraint violation to `conflict`, any other failure to
/// [`ApiError::Persistence`].
fn unique_violation_as(err: sqlx::Error, conflict: ApiError) -> ApiError {
    if let sqlx::Error::Database(db) = &err
        && db.is_unique_violation()
    {
        return conflict;
    }
    err.into()
}
