//! Profile Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Profile entity (one row of the `profile` table)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub profile_code: i64,
    pub wanted_job_title: String,
    pub first_name: String,
    pub last_name: Option<String>,
    pub email: String,
    pub phone: String,
    pub country: String,
    pub city: String,
    pub address: String,
    pub postal_code: Option<i32>,
    pub driving_license: Option<String>,
    pub nationality: Option<String>,
    pub place_of_birth: Option<String>,
    pub date_of_birth: Option<DateTime<Utc>>,
    /// Relative path of the stored PNG, e.g. `public/image/7-1700000000.png`
    pub photo_url: Option<String>,
    pub working_experience: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Create profile payload
///
/// Required text fields default to empty so that a missing field is reported
/// by validation rather than by the JSON extractor.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProfileRequest {
    #[serde(default)]
    pub wanted_job_title: String,
    #[serde(default)]
    pub first_name: String,
    pub last_name: Option<String>,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub address: String,
    pub postal_code: Option<i32>,
    pub driving_license: Option<String>,
    pub nationality: Option<String>,
    pub place_of_birth: Option<String>,
    pub date_of_birth: Option<DateTime<Utc>>,
}

/// Update profile payload (absent fields are left untouched)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    pub wanted_job_title: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub country: Option<String>,
    pub city: Option<String>,
    pub address: Option<String>,
    pub postal_code: Option<i32>,
    pub driving_license: Option<String>,
    pub nationality: Option<String>,
    pub place_of_birth: Option<String>,
    pub date_of_birth: Option<DateTime<Utc>>,
    pub working_experience: Option<String>,
}

/// Profile as returned by `GET /api/profile/{profileCode}`
///
/// Working experience has its own endpoint and is not included.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponse {
    pub profile_code: i64,
    pub wanted_job_title: String,
    pub first_name: String,
    pub last_name: Option<String>,
    pub email: String,
    pub phone: String,
    pub country: String,
    pub city: String,
    pub address: String,
    pub postal_code: Option<i32>,
    pub driving_license: Option<String>,
    pub nationality: Option<String>,
    pub place_of_birth: Option<String>,
    pub date_of_birth: Option<DateTime<Utc>>,
    pub photo_url: Option<String>,
}

impl From<Profile> for ProfileResponse {
    fn from(p: Profile) -> Self {
        Self {
            profile_code: p.profile_code,
            wanted_job_title: p.wanted_job_title,
            first_name: p.first_name,
            last_name: p.last_name,
            email: p.email,
            phone: p.phone,
            country: p.country,
            city: p.city,
            address: p.address,
            postal_code: p.postal_code,
            driving_license: p.driving_license,
            nationality: p.nationality,
            place_of_birth: p.place_of_birth,
            date_of_birth: p.date_of_birth,
            photo_url: p.photo_url,
        }
    }
}

/// Working experience free text of a profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkingExperienceResponse {
    pub working_experience: String,
}

/// Update working experience payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateWorkingExperienceRequest {
    #[serde(default)]
    pub working_experience: String,
}
