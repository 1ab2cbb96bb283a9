//! Profile photo handlers

use axum::{
    Json,
    extract::{Path, State},
};
use shared::models::{DefaultResponse, PhotoResponse, UploadPhotoRequest, UploadPhotoResponse};

use crate::state::AppState;
use crate::validation::validate_positive_id;

use super::ApiResult;

pub async fn download_photo(
    State(state): State<AppState>,
    Path(profile_code): Path<i64>,
) -> ApiResult<PhotoResponse> {
    let code = validate_positive_id(profile_code, "profileCode")?;
    Ok(Json(state.photos.download_photo(code).await?))
}

pub async fn upload_photo(
    State(state): State<AppState>,
    Path(profile_code): Path<i64>,
    Json(data): Json<UploadPhotoRequest>,
) -> ApiResult<UploadPhotoResponse> {
    let code = validate_positive_id(profile_code, "profileCode")?;
    Ok(Json(state.photos.upload_photo(code, data.base64img).await?))
}

pub async fn delete_photo(
    State(state): State<AppState>,
    Path(profile_code): Path<i64>,
) -> ApiResult<DefaultResponse> {
    let code = validate_positive_id(profile_code, "profileCode")?;
    Ok(Json(state.photos.delete_photo(code).await?))
}
