//! Score policy: percentages and the "keep only if better" rule.
//!
//! A user keeps a single best score. A submission replaces the stored one
//! only when its percentage (`100 * obtained / total`) is strictly greater;
//! ties keep the stored score.

use crate::error::ApiError;

/// Points obtained in a freshly created score.
pub const DEFAULT_SCORE_OBTAINED: i64 = 0;

/// Denominator of a freshly created score.
pub const DEFAULT_SCORE_TOTAL: i64 = 20;

/// Level label of a freshly created score.
pub const DEFAULT_LEVEL: &str = "Básico";

/// A score as a fraction plus a free-form level label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreCard {
    /// Points obtained.
    pub obtained: i64,
    /// Points available.
    pub total: i64,
    /// Level label (e.g. `"Intermedio"`).
    pub level: String,
}

impl ScoreCard {
    /// Builds a validated submission.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidRequest`] if `total` is zero or negative,
    /// since the percentage would be undefined.
    pub fn new(obtained: i64, total: i64, level: impl Into<String>) -> Result<Self, ApiError> {
        if total <= 0 {
            return Err(ApiError::InvalidRequest(format!(
                "puntaje_total debe ser mayor que 0 (recibido {total})"
            )));
        }
        Ok(Self {
            obtained,
            total,
            level: level.into(),
        })
    }

    /// The score every user starts with: 0 / 20, default level.
    #[must_use]
    pub fn initial() -> Self {
        Self {
            obtained: DEFAULT_SCORE_OBTAINED,
            total: DEFAULT_SCORE_TOTAL,
            level: DEFAULT_LEVEL.to_string(),
        }
    }

    /// Percentage in `[0, 100]` for ordinary scores, `None` when `total`
    /// is not positive.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn percentage(&self) -> Option<f64> {
        (self.total > 0).then(|| self.obtained as f64 / self.total as f64 * 100.0)
    }

    /// Whether this submission should replace `stored`.
    ///
    /// Compares `obtained / total` exactly by cross-multiplying, so equal
    /// fractions such as 10/20 and 5/10 always tie. A stored score without
    /// a defined percentage is always superseded.
    #[must_use]
    pub fn beats(&self, stored: &Self) -> bool {
        match (self.total > 0, stored.total > 0) {
            (true, true) => {
                i128::from(self.obtained) * i128::from(stored.total)
                    > i128::from(stored.obtained) * i128::from(self.total)
            }
            (true, false) => true,
            (false, _) => false,
        }
    }
}
