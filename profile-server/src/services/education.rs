//! Education history of a profile

use std::sync::Arc;

use shared::models::{
    DefaultResponse, DefaultResponseWithId, Education, EducationCreate, EducationList,
};

use crate::db::CollectionRepository;
use crate::error::{RepoResultExt, ServiceResult};
use crate::validation::{
    MAX_DESCRIPTION_LEN, MAX_NAME_LEN, validate_date_range, validate_max_len,
    validate_required_text,
};

#[derive(Clone)]
pub struct EducationService {
    repo: Arc<dyn CollectionRepository<Education, EducationCreate>>,
}

impl EducationService {
    pub fn new(repo: Arc<dyn CollectionRepository<Education, EducationCreate>>) -> Self {
        Self { repo }
    }

    pub async fn list(&self, code: i64) -> ServiceResult<EducationList> {
        let rows = self
            .repo
            .list_by_profile(code)
            .await
            .context("failed to get education")?;
        Ok(rows.into())
    }

    pub async fn create(
        &self,
        code: i64,
        data: EducationCreate,
    ) -> ServiceResult<DefaultResponseWithId> {
        validate_required_text(&data.school, "school", MAX_NAME_LEN)?;
        validate_required_text(&data.degree, "degree", MAX_NAME_LEN)?;
        validate_max_len(&data.city, "city", MAX_NAME_LEN)?;
        validate_max_len(&data.description, "description", MAX_DESCRIPTION_LEN)?;
        validate_date_range(data.start_date, data.end_date)?;

        let id = self
            .repo
            .create(code, &data)
            .await
            .context("failed to create education")?;
        Ok(DefaultResponseWithId {
            profile_code: code,
            id,
        })
    }

    pub async fn delete(&self, code: i64, id: i64) -> ServiceResult<DefaultResponse> {
        self.repo
            .delete(code, id)
            .await
            .context("failed to delete education")?;
        Ok(DefaultResponse { profile_code: code })
    }
}
