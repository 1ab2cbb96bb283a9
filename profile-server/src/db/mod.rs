//! Database layer
//!
//! Repository traits with PostgreSQL implementations. Every method issues a
//! single parameterized statement.

pub mod education;
pub mod employment;
#[cfg(test)]
pub mod memory;
pub mod profile;
pub mod skill;

pub use education::PgEducationRepository;
pub use employment::PgEmploymentRepository;
pub use profile::{PgProfileRepository, ProfilePatch};
pub use skill::PgSkillRepository;

use std::fmt;
use std::str::FromStr;

use async_trait::async_trait;
use shared::models::{CreateProfileRequest, Profile};
use sqlx::PgPool;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use thiserror::Error;

use crate::config::Config;

/// Table a repository error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    Profile,
    Skill,
    Education,
    Employment,
}

impl Entity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Entity::Profile => "profile",
            Entity::Skill => "skill",
            Entity::Education => "education",
            Entity::Employment => "employment",
        }
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("{entity} {key} not found")]
    NotFound { entity: Entity, key: i64 },

    #[error("Database error: {0}")]
    Database(String),
}

impl From<sqlx::Error> for RepoError {
    fn from(err: sqlx::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// Maps an insert on a child table; a dangling profile code becomes NotFound
pub(crate) fn child_insert_error(err: sqlx::Error, profile_code: i64) -> RepoError {
    if let sqlx::Error::Database(db) = &err
        && db.is_foreign_key_violation()
    {
        return RepoError::NotFound {
            entity: Entity::Profile,
            key: profile_code,
        };
    }
    err.into()
}

/// Profile table access
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    async fn get_by_code(&self, code: i64) -> RepoResult<Profile>;

    /// `None` when the profile exists but has no working experience yet
    async fn get_working_experience(&self, code: i64) -> RepoResult<Option<String>>;

    /// Inserts a profile and returns its new code
    async fn create(&self, data: &CreateProfileRequest) -> RepoResult<i64>;

    /// Applies the fields present in `patch` and stamps `updated_at`
    async fn update(&self, code: i64, patch: &ProfilePatch) -> RepoResult<i64>;

    /// Sets or clears `photo_url`; no other column except `updated_at` changes
    async fn set_photo_url(&self, code: i64, photo_url: Option<&str>) -> RepoResult<()>;
}

/// Access to one of the per-profile collections (skill, education, employment)
#[async_trait]
pub trait CollectionRepository<T, C>: Send + Sync
where
    T: Send + 'static,
    C: Sync + 'static,
{
    /// All entries of a profile, oldest first
    async fn list_by_profile(&self, code: i64) -> RepoResult<Vec<T>>;

    /// Inserts an entry and returns its new id
    async fn create(&self, code: i64, data: &C) -> RepoResult<i64>;

    /// Deletes one entry; NotFound when no row matches both code and id
    async fn delete(&self, code: i64, id: i64) -> RepoResult<()>;
}

/// Connects the pool, pins `search_path` to the configured schema and runs
/// the embedded migrations.
pub async fn connect(config: &Config) -> Result<PgPool, sqlx::Error> {
    let options = PgConnectOptions::from_str(&config.database_url)?
        .options([("search_path", config.database_schema.as_str())]);

    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .connect_with(options)
        .await?;

    // Schema name is validated as a plain identifier by Config
    sqlx::query(&format!(
        "CREATE SCHEMA IF NOT EXISTS \"{}\"",
        config.database_schema
    ))
    .execute(&pool)
    .await?;

    sqlx::migrate!("./migrations").run(&pool).await?;

    tracing::info!(
        schema = %config.database_schema,
        max_connections = config.db_max_connections,
        "Database ready"
    );
    Ok(pool)
}
