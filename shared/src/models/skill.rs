//! Skill Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Skill entry owned by a profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    pub id: i64,
    pub profile_code: i64,
    pub skill: String,
    pub level: String,
    pub created_at: DateTime<Utc>,
}

/// Create skill payload (profile code comes from the path)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillCreate {
    #[serde(default)]
    pub skill: String,
    #[serde(default)]
    pub level: String,
}
