//! Profile database operations

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use shared::models::{CreateProfileRequest, Profile, UpdateProfileRequest};
use sqlx::PgPool;

use super::{Entity, ProfileRepository, RepoError, RepoResult};

const PROFILE_COLUMNS: &str = "profile_code, wanted_job_title, first_name, last_name, email, \
     phone, country, city, address, postal_code, driving_license, nationality, place_of_birth, \
     date_of_birth, photo_url, working_experience, created_at, updated_at";

/// Explicit partial update of a profile
///
/// `None` leaves the column untouched; an empty string is written as-is.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfilePatch {
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

impl ProfilePatch {
    pub fn working_experience(text: impl Into<String>) -> Self {
        Self {
            working_experience: Some(text.into()),
            ..Default::default()
        }
    }
}

impl From<UpdateProfileRequest> for ProfilePatch {
    fn from(req: UpdateProfileRequest) -> Self {
        Self {
            wanted_job_title: req.wanted_job_title,
            first_name: req.first_name,
            last_name: req.last_name,
            email: req.email,
            phone: req.phone,
            country: req.country,
            city: req.city,
            address: req.address,
            postal_code: req.postal_code,
            driving_license: req.driving_license,
            nationality: req.nationality,
            place_of_birth: req.place_of_birth,
            date_of_birth: req.date_of_birth,
            working_experience: req.working_experience,
        }
    }
}

fn not_found(code: i64) -> RepoError {
    RepoError::NotFound {
        entity: Entity::Profile,
        key: code,
    }
}

#[derive(Clone)]
pub struct PgProfileRepository {
    pool: PgPool,
}

impl PgProfileRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProfileRepository for PgProfileRepository {
    async fn get_by_code(&self, code: i64) -> RepoResult<Profile> {
        let sql = format!("SELECT {PROFILE_COLUMNS} FROM profile WHERE profile_code = $1");
        sqlx::query_as::<_, Profile>(&sql)
            .bind(code)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| not_found(code))
    }

    async fn get_working_experience(&self, code: i64) -> RepoResult<Option<String>> {
        let row: Option<(Option<String>,)> =
            sqlx::query_as("SELECT working_experience FROM profile WHERE profile_code = $1")
                .bind(code)
                .fetch_optional(&self.pool)
                .await?;
        row.map(|(text,)| text).ok_or_else(|| not_found(code))
    }

    async fn create(&self, data: &CreateProfileRequest) -> RepoResult<i64> {
        let (code,): (i64,) = sqlx::query_as(
            r#"
            INSERT INTO profile (wanted_job_title, first_name, last_name, email, phone, country,
                                 city, address, postal_code, driving_license, nationality,
                                 place_of_birth, date_of_birth)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            RETURNING profile_code
            "#,
        )
        .bind(&data.wanted_job_title)
        .bind(&data.first_name)
        .bind(&data.last_name)
        .bind(&data.email)
        .bind(&data.phone)
        .bind(&data.country)
        .bind(&data.city)
        .bind(&data.address)
        .bind(data.postal_code)
        .bind(&data.driving_license)
        .bind(&data.nationality)
        .bind(&data.place_of_birth)
        .bind(data.date_of_birth)
        .fetch_one(&self.pool)
        .await?;
        Ok(code)
    }

    async fn update(&self, code: i64, patch: &ProfilePatch) -> RepoResult<i64> {
        let rows = sqlx::query(
            r#"
            UPDATE profile SET
                wanted_job_title = COALESCE($1, wanted_job_title),
                first_name = COALESCE($2, first_name),
                last_name = COALESCE($3, last_name),
                email = COALESCE($4, email),
                phone = COALESCE($5, phone),
                country = COALESCE($6, country),
                city = COALESCE($7, city),
                address = COALESCE($8, address),
                postal_code = COALESCE($9, postal_code),
                driving_license = COALESCE($10, driving_license),
                nationality = COALESCE($11, nationality),
                place_of_birth = COALESCE($12, place_of_birth),
                date_of_birth = COALESCE($13, date_of_birth),
                working_experience = COALESCE($14, working_experience),
                updated_at = now()
            WHERE profile_code = $15
            "#,
        )
        .bind(&patch.wanted_job_title)
        .bind(&patch.first_name)
        .bind(&patch.last_name)
        .bind(&patch.email)
        .bind(&patch.phone)
        .bind(&patch.country)
        .bind(&patch.city)
        .bind(&patch.address)
        .bind(patch.postal_code)
        .bind(&patch.driving_license)
        .bind(&patch.nationality)
        .bind(&patch.place_of_birth)
        .bind(patch.date_of_birth)
        .bind(&patch.working_experience)
        .bind(code)
        .execute(&self.pool)
        .await?;
        if rows.rows_affected() == 0 {
            return Err(not_found(code));
        }
        Ok(code)
    }

    async fn set_photo_url(&self, code: i64, photo_url: Option<&str>) -> RepoResult<()> {
        let rows = sqlx::query(
            "UPDATE profile SET photo_url = $1, updated_at = now() WHERE profile_code = $2",
        )
        .bind(photo_url)
        .bind(code)
        .execute(&self.pool)
        .await?;
        if rows.rows_affected() == 0 {
            return Err(not_found(code));
        }
        Ok(())
    }
}
