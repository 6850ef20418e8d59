//! Data Transfer Objects for REST request/response serialization.
//!
//! Rust fields are named in English; `#[serde(rename)]` keeps the Spanish
//! wire names existing clients depend on.

pub mod common_dto;
pub mod favorite_dto;
pub mod score_dto;
pub mod user_dto;
pub mod visit_dto;

pub use common_dto::*;
pub use favorite_dto::*;
pub use score_dto::*;
pub use user_dto::*;
pub use visit_dto::*;
