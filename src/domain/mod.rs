//! Domain layer: user identity and the score policy.

pub mod score;
pub mod user_id;

pub use score::ScoreCard;
pub use user_id::UserId;
