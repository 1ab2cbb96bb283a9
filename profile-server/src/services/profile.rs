//! Profile CRUD

use std::sync::Arc;

use shared::models::{
    CreateProfileRequest, DefaultResponse, ProfileResponse, UpdateProfileRequest,
    WorkingExperienceResponse,
};

use crate::db::{ProfilePatch, ProfileRepository};
use crate::error::{RepoResultExt, ServiceResult};
use crate::validation::{
    MAX_ADDRESS_LEN, MAX_DESCRIPTION_LEN, MAX_EMAIL_LEN, MAX_NAME_LEN, MAX_SHORT_TEXT_LEN,
    validate_max_len, validate_optional_text, validate_present_text, validate_required_text,
};

#[derive(Clone)]
pub struct ProfileService {
    repo: Arc<dyn ProfileRepository>,
}

impl ProfileService {
    pub fn new(repo: Arc<dyn ProfileRepository>) -> Self {
        Self { repo }
    }

    pub async fn get_profile(&self, code: i64) -> ServiceResult<ProfileResponse> {
        let profile = self
            .repo
            .get_by_code(code)
            .await
            .context("failed to get profile")?;
        Ok(profile.into())
    }

    pub async fn get_working_experience(
        &self,
        code: i64,
    ) -> ServiceResult<WorkingExperienceResponse> {
        let text = self
            .repo
            .get_working_experience(code)
            .await
            .context("failed to get working experience")?;
        Ok(WorkingExperienceResponse {
            working_experience: text.unwrap_or_default(),
        })
    }

    pub async fn create_profile(&self, req: CreateProfileRequest) -> ServiceResult<DefaultResponse> {
        validate_create(&req)?;
        let profile_code = self
            .repo
            .create(&req)
            .await
            .context("failed to create profile")?;
        tracing::info!(profile_code, "Profile created");
        Ok(DefaultResponse { profile_code })
    }

    pub async fn update_profile(
        &self,
        code: i64,
        req: UpdateProfileRequest,
    ) -> ServiceResult<DefaultResponse> {
        validate_update(&req)?;
        let profile_code = self
            .repo
            .update(code, &ProfilePatch::from(req))
            .await
            .context("failed to update profile")?;
        Ok(DefaultResponse { profile_code })
    }

    pub async fn update_working_experience(
        &self,
        code: i64,
        text: String,
    ) -> ServiceResult<DefaultResponse> {
        validate_max_len(&text, "workingExperience", MAX_DESCRIPTION_LEN)?;
        let profile_code = self
            .repo
            .update(code, &ProfilePatch::working_experience(text))
            .await
            .context("failed to update profile")?;
        Ok(DefaultResponse { profile_code })
    }
}

fn validate_create(req: &CreateProfileRequest) -> Result<(), shared::error::AppError> {
    validate_required_text(&req.wanted_job_title, "wantedJobTitle", MAX_NAME_LEN)?;
    validate_required_text(&req.first_name, "firstName", MAX_NAME_LEN)?;
    validate_optional_text(&req.last_name, "lastName", MAX_NAME_LEN)?;
    validate_required_text(&req.email, "email", MAX_EMAIL_LEN)?;
    validate_required_text(&req.phone, "phone", MAX_SHORT_TEXT_LEN)?;
    validate_required_text(&req.country, "country", MAX_NAME_LEN)?;
    validate_required_text(&req.city, "city", MAX_NAME_LEN)?;
    validate_required_text(&req.address, "address", MAX_ADDRESS_LEN)?;
    validate_optional_text(&req.driving_license, "drivingLicense", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(&req.nationality, "nationality", MAX_NAME_LEN)?;
    validate_optional_text(&req.place_of_birth, "placeOfBirth", MAX_NAME_LEN)?;
    Ok(())
}

fn validate_update(req: &UpdateProfileRequest) -> Result<(), shared::error::AppError> {
    validate_present_text(&req.wanted_job_title, "wantedJobTitle", MAX_NAME_LEN)?;
    validate_present_text(&req.first_name, "firstName", MAX_NAME_LEN)?;
    validate_optional_text(&req.last_name, "lastName", MAX_NAME_LEN)?;
    validate_present_text(&req.email, "email", MAX_EMAIL_LEN)?;
    validate_present_text(&req.phone, "phone", MAX_SHORT_TEXT_LEN)?;
    validate_present_text(&req.country, "country", MAX_NAME_LEN)?;
    validate_present_text(&req.city, "city", MAX_NAME_LEN)?;
    validate_present_text(&req.address, "address", MAX_ADDRESS_LEN)?;
    validate_optional_text(&req.driving_license, "drivingLicense", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(&req.nationality, "nationality", MAX_NAME_LEN)?;
    validate_optional_text(&req.place_of_birth, "placeOfBirth", MAX_NAME_LEN)?;
    if let Some(text) = &req.working_experience {
        validate_max_len(text, "workingExperience", MAX_DESCRIPTION_LEN)?;
    }
    Ok(())
}
