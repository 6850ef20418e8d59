//! Account service: user, favorite, visit and score operations.

use crate::domain::ScoreCard;
use crate::error::ApiError;
use crate::persistence::models::{Favorite, FavoriteFields, Score, TableCounts, User, Visit};
use crate::persistence::sqlite::SqliteStore;

/// Outcome of a score submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreSubmission {
    /// Whether the submission became the user's stored score.
    pub is_new_best: bool,
    /// The submitted values, echoed regardless of whether they were kept.
    pub submitted: ScoreCard,
}

/// Orchestration layer for every account operation.
///
/// Stateless apart from the store handle. Each method resolves the user
/// by email first (failing with [`ApiError::UserNotFound`]), then performs
/// one or two store calls.
#[derive(Debug, Clone)]
pub struct AccountService {
    store: SqliteStore,
}

impl AccountService {
    /// Creates a new `AccountService`.
    #[must_use]
    pub fn new(store: SqliteStore) -> Self {
        Self { store }
    }

    async fn require_user(&self, email: &str) -> Result<User, ApiError> {
        self.store
            .find_user_by_email(email)
            .await?
            .ok_or(ApiError::UserNotFound)
    }

    async fn require_favorite(
        &self,
        user: &User,
        class_id: &str,
    ) -> Result<Favorite, ApiError> {
        self.store
            .find_favorite(user.id, class_id)
            .await?
            .ok_or(ApiError::FavoriteNotFound)
    }

    // ── Users ──────────────────────────────────────────────────────────

    /// Returns every registered user.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Persistence`] on database failure.
    pub async fn list_users(&self) -> Result<Vec<User>, ApiError> {
        self.store.list_users().await
    }

    /// Registers a user and their initial score.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::EmailTaken`] if the email is already registered.
    pub async fn register(&self, email: &str, password: &str) -> Result<User, ApiError> {
        if self.store.find_user_by_email(email).await?.is_some() {
            return Err(ApiError::EmailTaken);
        }
        let user = self.store.create_user(email, password).await?;
        tracing::info!(user_id = %user.id, email, "user registered");
        Ok(user)
    }

    /// Checks a user's credentials. Passwords are compared as plain strings.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::UserNotFound`] for an unknown email and
    /// [`ApiError::WrongPassword`] on mismatch.
    pub async fn login(&self, email: &str, password: &str) -> Result<User, ApiError> {
        let user = self.require_user(email).await?;
        if user.password != password {
            tracing::warn!(email, "login rejected: wrong password");
            return Err(ApiError::WrongPassword);
        }
        tracing::debug!(email, "login accepted");
        Ok(user)
    }

    /// Looks up a user by email.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::UserNotFound`] if absent.
    pub async fn get_user(&self, email: &str) -> Result<User, ApiError> {
        self.require_user(email).await
    }

    /// Deletes a user together with their favorites, visits and score.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::UserNotFound`] if absent.
    pub async fn delete_user(&self, email: &str) -> Result<(), ApiError> {
        let user = self.require_user(email).await?;
        if !self.store.delete_user(user.id).await? {
            return Err(ApiError::UserNotFound);
        }
        tracing::info!(user_id = %user.id, email, "user deleted");
        Ok(())
    }

    // ── Favorites ──────────────────────────────────────────────────────

    /// Adds a class to a user's favorites.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::UserNotFound`] if the user is absent and
    /// [`ApiError::FavoriteExists`] if the class is already a favorite.
    pub async fn add_favorite(
        &self,
        email: &str,
        fields: &FavoriteFields,
    ) -> Result<Favorite, ApiError> {
        let user = self.require_user(email).await?;
        if self
            .store
            .find_favorite(user.id, &fields.class_id)
            .await?
            .is_some()
        {
            return Err(ApiError::FavoriteExists);
        }
        let favorite = self.store.insert_favorite(user.id, fields).await?;
        tracing::debug!(user_id = %user.id, class_id = %favorite.class_id, "favorite added");
        Ok(favorite)
    }

    /// Removes a class from a user's favorites.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::UserNotFound`] or [`ApiError::FavoriteNotFound`].
    pub async fn remove_favorite(&self, email: &str, class_id: &str) -> Result<(), ApiError> {
        let user = self.require_user(email).await?;
        let favorite = self.require_favorite(&user, class_id).await?;
        if !self.store.delete_favorite(favorite.id).await? {
            return Err(ApiError::FavoriteNotFound);
        }
        tracing::debug!(user_id = %user.id, class_id, "favorite removed");
        Ok(())
    }

    /// Returns the favorites of a user.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::UserNotFound`] if absent.
    pub async fn list_favorites(&self, email: &str) -> Result<Vec<Favorite>, ApiError> {
        let user = self.require_user(email).await?;
        self.store.list_favorites(user.id).await
    }

    /// Overwrites the favorite currently stored under `class_id`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::UserNotFound`] or [`ApiError::FavoriteNotFound`],
    /// and [`ApiError::FavoriteExists`] if `fields.class_id` names another
    /// existing favorite of the same user.
    pub async fn update_favorite(
        &self,
        email: &str,
        class_id: &str,
        fields: &FavoriteFields,
    ) -> Result<(), ApiError> {
        let user = self.require_user(email).await?;
        let favorite = self.require_favorite(&user, class_id).await?;
        self.store.update_favorite(favorite.id, fields).await?;
        tracing::debug!(
            user_id = %user.id,
            from = class_id,
            to = %fields.class_id,
            "favorite updated"
        );
        Ok(())
    }

    // ── Visits ─────────────────────────────────────────────────────────

    /// Counts one visit of a user to a class.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::UserNotFound`] if absent.
    pub async fn record_visit(&self, email: &str, class_id: &str) -> Result<Visit, ApiError> {
        let user = self.require_user(email).await?;
        let visit = self.store.record_visit(user.id, class_id).await?;
        tracing::debug!(user_id = %user.id, class_id, count = visit.count, "visit recorded");
        Ok(visit)
    }

    /// Returns the visit counters of a user.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::UserNotFound`] if absent.
    pub async fn list_visits(&self, email: &str) -> Result<Vec<Visit>, ApiError> {
        let user = self.require_user(email).await?;
        self.store.list_visits(user.id).await
    }

    // ── Scores ─────────────────────────────────────────────────────────

    /// Returns a user's score, creating the initial one if none exists.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::UserNotFound`] if absent.
    pub async fn get_score(&self, email: &str) -> Result<Score, ApiError> {
        let user = self.require_user(email).await?;
        self.store.get_or_create_score(user.id).await
    }

    /// Submits a score, keeping it only if it beats the stored one.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::UserNotFound`] if absent.
    pub async fn submit_score(
        &self,
        email: &str,
        card: ScoreCard,
    ) -> Result<ScoreSubmission, ApiError> {
        let user = self.require_user(email).await?;
        let is_new_best = self.store.submit_score(user.id, &card).await?;
        tracing::info!(
            user_id = %user.id,
            obtained = card.obtained,
            total = card.total,
            percentage = card.percentage(),
            is_new_best,
            "score submitted"
        );
        Ok(ScoreSubmission {
            is_new_best,
            submitted: card,
        })
    }

    // ── Health ─────────────────────────────────────────────────────────

    /// Row counts of all tables.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Persistence`] on database failure.
    pub async fn table_counts(&self) -> Result<TableCounts, ApiError> {
        self.store.table_counts().await
    }
}
