//! Skills of a profile

use std::sync::Arc;

use shared::models::{DefaultResponse, DefaultResponseWithId, Skill, SkillCreate, SkillList};

use crate::db::CollectionRepository;
use crate::error::{RepoResultExt, ServiceResult};
use crate::validation::{MAX_NAME_LEN, MAX_SHORT_TEXT_LEN, validate_max_len, validate_required_text};

#[derive(Clone)]
pub struct SkillService {
    repo: Arc<dyn CollectionRepository<Skill, SkillCreate>>,
}

impl SkillService {
    pub fn new(repo: Arc<dyn CollectionRepository<Skill, SkillCreate>>) -> Self {
        Self { repo }
    }

    pub async fn list(&self, code: i64) -> ServiceResult<SkillList> {
        let rows = self
            .repo
            .list_by_profile(code)
            .await
            .context("failed to get skills")?;
        Ok(rows.into())
    }

    pub async fn create(&self, code: i64, data: SkillCreate) -> ServiceResult<DefaultResponseWithId> {
        validate_required_text(&data.skill, "skill", MAX_NAME_LEN)?;
        validate_max_len(&data.level, "level", MAX_SHORT_TEXT_LEN)?;

        let id = self
            .repo
            .create(code, &data)
            .await
            .context("failed to create skill")?;
        Ok(DefaultResponseWithId {
            profile_code: code,
            id,
        })
    }

    pub async fn delete(&self, code: i64, id: i64) -> ServiceResult<DefaultResponse> {
        self.repo
            .delete(code, id)
            .await
            .context("failed to delete skill")?;
        Ok(DefaultResponse { profile_code: code })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::memory::{MemoryCollection, MemoryProfileRepository};
    use shared::error::{AppError, ErrorCode};

    fn service() -> (Arc<MemoryCollection<Skill>>, SkillService) {
        let profiles = Arc::new(MemoryProfileRepository::with_profile(1));
        let repo = Arc::new(MemoryCollection::<Skill>::new(profiles));
        (repo.clone(), SkillService::new(repo))
    }

    fn rust() -> SkillCreate {
        SkillCreate {
            skill: "Rust".into(),
            level: "Expert".into(),
        }
    }

    #[tokio::test]
    async fn test_list_empty() {
        let (_repo, service) = service();
        let list = service.list(1).await.unwrap();
        assert!(list.data.is_empty());
    }

    #[tokio::test]
    async fn test_create_list_delete() {
        let (repo, service) = service();

        let created = service.create(1, rust()).await.unwrap();
        assert_eq!(created.profile_code, 1);
        assert_eq!(created.id, 1);

        let list = service.list(1).await.unwrap();
        assert_eq!(list.data.len(), 1);
        assert_eq!(list.data[0].skill, "Rust");

        let deleted = service.delete(1, created.id).await.unwrap();
        assert_eq!(deleted.profile_code, 1);
        assert_eq!(repo.len(), 0);
    }

    #[tokio::test]
    async fn test_create_for_unknown_profile() {
        let (_repo, service) = service();
        let err = service.create(2, rust()).await.unwrap_err();
        assert_eq!(err.to_string(), "failed to create skill: profile 2 not found");
    }

    #[tokio::test]
    async fn test_create_requires_skill_name() {
        let (repo, service) = service();
        let data = SkillCreate {
            skill: String::new(),
            level: "Beginner".into(),
        };
        let app: AppError = service.create(1, data).await.unwrap_err().into();
        assert_eq!(app.code, ErrorCode::ValidationFailed);
        assert_eq!(repo.len(), 0);
    }

    #[tokio::test]
    async fn test_delete_missing_is_not_found() {
        let (_repo, service) = service();
        service.create(1, rust()).await.unwrap();

        // Right id, wrong profile
        let err = service.delete(2, 1).await.unwrap_err();
        assert_eq!(err.to_string(), "failed to delete skill: skill 1 not found");
        let app: AppError = err.into();
        assert_eq!(app.code, ErrorCode::SkillNotFound);
    }

    #[tokio::test]
    async fn test_list_database_error_prefix() {
        let (repo, service) = service();
        repo.fail_with("timeout");
        let err = service.list(1).await.unwrap_err();
        assert_eq!(err.to_string(), "failed to get skills: Database error: timeout");
    }
}
