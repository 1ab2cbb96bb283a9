//! Employment history of a profile

use std::sync::Arc;

use shared::models::{
    DefaultResponse, DefaultResponseWithId, Employment, EmploymentCreate, EmploymentList,
};

use crate::db::CollectionRepository;
use crate::error::{RepoResultExt, ServiceResult};
use crate::validation::{
    MAX_DESCRIPTION_LEN, MAX_NAME_LEN, validate_date_range, validate_max_len,
    validate_required_text,
};

#[derive(Clone)]
pub struct EmploymentService {
    repo: Arc<dyn CollectionRepository<Employment, EmploymentCreate>>,
}

impl EmploymentService {
    pub fn new(repo: Arc<dyn CollectionRepository<Employment, EmploymentCreate>>) -> Self {
        Self { repo }
    }

    pub async fn list(&self, code: i64) -> ServiceResult<EmploymentList> {
        let rows = self
            .repo
            .list_by_profile(code)
            .await
            .context("failed to get employment")?;
        Ok(rows.into())
    }

    pub async fn create(
        &self,
        code: i64,
        data: EmploymentCreate,
    ) -> ServiceResult<DefaultResponseWithId> {
        validate_required_text(&data.job_title, "jobTitle", MAX_NAME_LEN)?;
        validate_required_text(&data.employer, "employer", MAX_NAME_LEN)?;
        validate_max_len(&data.city, "city", MAX_NAME_LEN)?;
        validate_max_len(&data.description, "description", MAX_DESCRIPTION_LEN)?;
        validate_date_range(data.start_date, data.end_date)?;

        let id = self
            .repo
            .create(code, &data)
            .await
            .context("failed to create employment")?;
        Ok(DefaultResponseWithId {
            profile_code: code,
            id,
        })
    }

    pub async fn delete(&self, code: i64, id: i64) -> ServiceResult<DefaultResponse> {
        self.repo
            .delete(code, id)
            .await
            .context("failed to delete employment")?;
        Ok(DefaultResponse { profile_code: code })
    }
}
