//! Education Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Education entry owned by a profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct Education {
    pub id: i64,
    pub profile_code: i64,
    pub school: String,
    pub degree: String,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub city: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

/// Create education payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationCreate {
    #[serde(default)]
    pub school: String,
    #[serde(default)]
    pub degree: String,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub description: String,
}
