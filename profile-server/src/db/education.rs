//! Education database operations

use async_trait::async_trait;
use shared::models::{Education, EducationCreate};
use sqlx::PgPool;

use super::{CollectionRepository, Entity, RepoError, RepoResult, child_insert_error};

#[derive(Clone)]
pub struct PgEducationRepository {
    pool: PgPool,
}

impl PgEducationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CollectionRepository<Education, EducationCreate> for PgEducationRepository {
    async fn list_by_profile(&self, code: i64) -> RepoResult<Vec<Education>> {
        let rows: Vec<Education> = sqlx::query_as(
            r#"
            SELECT id, profile_code, school, degree, start_date, end_date, city, description, created_at
            FROM education
            WHERE profile_code = $1
            ORDER BY id
            "#,
        )
        .bind(code)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn create(&self, code: i64, data: &EducationCreate) -> RepoResult<i64> {
        let (id,): (i64,) = sqlx::query_as(
            r#"
            INSERT INTO education (profile_code, school, degree, start_date, end_date, city, description)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id
            "#,
        )
        .bind(code)
        .bind(&data.school)
        .bind(&data.degree)
        .bind(data.start_date)
        .bind(data.end_date)
        .bind(&data.city)
        .bind(&data.description)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| child_insert_error(e, code))?;
        Ok(id)
    }

    async fn delete(&self, code: i64, id: i64) -> RepoResult<()> {
        let rows = sqlx::query("DELETE FROM education WHERE profile_code = $1 AND id = $2")
            .bind(code)
            .bind(id)
            .execute(&self.pool)
            .await?;
        if rows.rows_affected() == 0 {
            return Err(RepoError::NotFound {
                entity: Entity::Education,
                key: id,
            });
        }
        Ok(())
    }
}
