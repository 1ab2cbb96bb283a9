//! Employment Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Employment entry owned by a profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct Employment {
    pub id: i64,
    pub profile_code: i64,
    pub job_title: String,
    pub employer: String,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub city: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

/// Create employment payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmploymentCreate {
    #[serde(default)]
    pub job_title: String,
    #[serde(default)]
    pub employer: String,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub description: String,
}
