//! Skill database operations

use async_trait::async_trait;
use shared::models::{Skill, SkillCreate};
use sqlx::PgPool;

use super::{CollectionRepository, Entity, RepoError, RepoResult, child_insert_error};

#[derive(Clone)]
pub struct PgSkillRepository {
    pool: PgPool,
}

impl PgSkillRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CollectionRepository<Skill, SkillCreate> for PgSkillRepository {
    async fn list_by_profile(&self, code: i64) -> RepoResult<Vec<Skill>> {
        let rows: Vec<Skill> = sqlx::query_as(
            r#"
            SELECT id, profile_code, skill, level, created_at
            FROM skill
            WHERE profile_code = $1
            ORDER BY id
            "#,
        )
        .bind(code)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn create(&self, code: i64, data: &SkillCreate) -> RepoResult<i64> {
        let (id,): (i64,) = sqlx::query_as(
            "INSERT INTO skill (profile_code, skill, level) VALUES ($1, $2, $3) RETURNING id",
        )
        .bind(code)
        .bind(&data.skill)
        .bind(&data.level)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| child_insert_error(e, code))?;
        Ok(id)
    }

    async fn delete(&self, code: i64, id: i64) -> RepoResult<()> {
        let rows = sqlx::query("DELETE FROM skill WHERE profile_code = $1 AND id = $2")
            .bind(code)
            .bind(id)
            .execute(&self.pool)
            .await?;
        if rows.rows_affected() == 0 {
            return Err(RepoError::NotFound {
                entity: Entity::Skill,
                key: id,
            });
        }
        Ok(())
    }
}
