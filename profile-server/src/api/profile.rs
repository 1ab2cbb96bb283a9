//! Profile and working experience handlers

use axum::{
    Json,
    extract::{Path, State},
};
use shared::models::{
    CreateProfileRequest, DefaultResponse, ProfileResponse, UpdateProfileRequest,
    UpdateWorkingExperienceRequest, WorkingExperienceResponse,
};

use crate::state::AppState;
use crate::validation::validate_positive_id;

use super::ApiResult;

pub async fn get_profile(
    State(state): State<AppState>,
    Path(profile_code): Path<i64>,
) -> ApiResult<ProfileResponse> {
    let code = validate_positive_id(profile_code, "profileCode")?;
    Ok(Json(state.profiles.get_profile(code).await?))
}

pub async fn create_profile(
    State(state): State<AppState>,
    Json(data): Json<CreateProfileRequest>,
) -> ApiResult<DefaultResponse> {
    Ok(Json(state.profiles.create_profile(data).await?))
}

pub async fn update_profile(
    State(state): State<AppState>,
    Path(profile_code): Path<i64>,
    Json(data): Json<UpdateProfileRequest>,
) -> ApiResult<DefaultResponse> {
    let code = validate_positive_id(profile_code, "profileCode")?;
    Ok(Json(state.profiles.update_profile(code, data).await?))
}

pub async fn get_working_experience(
    State(state): State<AppState>,
    Path(profile_code): Path<i64>,
) -> ApiResult<WorkingExperienceResponse> {
    let code = validate_positive_id(profile_code, "profileCode")?;
    Ok(Json(state.profiles.get_working_experience(code).await?))
}

pub async fn update_working_experience(
    State(state): State<AppState>,
    Path(profile_code): Path<i64>,
    Json(data): Json<UpdateWorkingExperienceRequest>,
) -> ApiResult<DefaultResponse> {
    let code = validate_positive_id(profile_code, "profileCode")?;
    Ok(Json(
        state
            .profiles
            .update_working_experience(code, data.working_experience)
            .await?,
    ))
}
