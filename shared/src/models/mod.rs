//! Data models
//!
//! Shared between profile-server and its API clients.
//! DB row types use `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`.
//! Every id and profile code is `i64` (PostgreSQL BIGSERIAL).
//! JSON field names are camelCase.

pub mod education;
pub mod employment;
pub mod photo;
pub mod profile;
pub mod response;
pub mod skill;

// Re-exports
pub use education::*;
pub use employment::*;
pub use photo::*;
pub use profile::*;
pub use response::*;
pub use skill::*;
