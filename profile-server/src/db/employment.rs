//! Employment database operations

use async_trait::async_trait;
use shared::models::{Employment, EmploymentCreate};
use sqlx::PgPool;

use super::{CollectionRepository, Entity, RepoError, RepoResult, child_insert_error};

#[derive(Clone)]
pub struct PgEmploymentRepository {
    pool: PgPool,
}

impl PgEmploymentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CollectionRepository<Employment, EmploymentCreate> for PgEmploymentRepository {
    async fn list_by_profile(&self, code: i64) -> RepoResult<Vec<Employment>> {
        let rows: Vec<Employment> = sqlx::query_as(
            r#"
            SELECT id, profile_code, job_title, employer, start_date, end_date, city, description, created_at
            FROM employment
            WHERE profile_code = $1
            ORDER BY id
            "#,
        )
        .bind(code)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn create(&self, code: i64, data: &EmploymentCreate) -> RepoResult<i64> {
        let (id,): (i64,) = sqlx::query_as(
            r#"
            INSERT INTO employment (profile_code, job_title, employer, start_date, end_date, city, description)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id
            "#,
        )
        .bind(code)
        .bind(&data.job_title)
        .bind(&data.employer)
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
        let rows = sqlx::query("DELETE FROM employment WHERE profile_code = $1 AND id = $2")
            .bind(code)
            .bind(id)
            .execute(&self.pool)
            .await?;
        if rows.rows_affected() == 0 {
            return Err(RepoError::NotFound {
                entity: Entity::Employment,
                key: id,
            });
        }
        Ok(())
    }
}
