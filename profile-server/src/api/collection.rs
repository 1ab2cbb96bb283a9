//! Skill, education and employment handlers
//!
//! Each collection is listed, appended to and deleted from under its
//! profile code. Deletes take the row id from the `id` query parameter.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;
use shared::models::{
    DefaultResponse, DefaultResponseWithId, EducationCreate, EducationList, EmploymentCreate,
    EmploymentList, SkillCreate, SkillList,
};

use crate::state::AppState;
use crate::validation::validate_positive_id;

use super::ApiResult;

#[derive(Debug, Deserialize)]
pub struct IdQuery {
    pub id: i64,
}

fn ids(profile_code: i64, query: &IdQuery) -> Result<(i64, i64), shared::error::AppError> {
    Ok((
        validate_positive_id(profile_code, "profileCode")?,
        validate_positive_id(query.id, "id")?,
    ))
}

// =========================================================================
// Skill
// =========================================================================

pub async fn list_skills(
    State(state): State<AppState>,
    Path(profile_code): Path<i64>,
) -> ApiResult<SkillList> {
    let code = validate_positive_id(profile_code, "profileCode")?;
    Ok(Json(state.skills.list(code).await?))
}

pub async fn create_skill(
    State(state): State<AppState>,
    Path(profile_code): Path<i64>,
    Json(data): Json<SkillCreate>,
) -> ApiResult<DefaultResponseWithId> {
    let code = validate_positive_id(profile_code, "profileCode")?;
    Ok(Json(state.skills.create(code, data).await?))
}

pub async fn delete_skill(
    State(state): State<AppState>,
    Path(profile_code): Path<i64>,
    Query(query): Query<IdQuery>,
) -> ApiResult<DefaultResponse> {
    let (code, id) = ids(profile_code, &query)?;
    Ok(Json(state.skills.delete(code, id).await?))
}

// =========================================================================
// Education
// =========================================================================

pub async fn list_education(
    State(state): State<AppState>,
    Path(profile_code): Path<i64>,
) -> ApiResult<EducationList> {
    let code = validate_positive_id(profile_code, "profileCode")?;
    Ok(Json(state.education.list(code).await?))
}

pub async fn create_education(
    State(state): State<AppState>,
    Path(profile_code): Path<i64>,
    Json(data): Json<EducationCreate>,
) -> ApiResult<DefaultResponseWithId> {
    let code = validate_positive_id(profile_code, "profileCode")?;
    Ok(Json(state.education.create(code, data).await?))
}

pub async fn delete_education(
    State(state): State<AppState>,
    Path(profile_code): Path<i64>,
    Query(query): Query<IdQuery>,
) -> ApiResult<DefaultResponse> {
    let (code, id) = ids(profile_code, &query)?;
    Ok(Json(state.education.delete(code, id).await?))
}

// =========================================================================
// Employment
// =========================================================================

pub async fn list_employment(
    State(state): State<AppState>,
    Path(profile_code): Path<i64>,
) -> ApiResult<EmploymentList> {
    let code = validate_positive_id(profile_code, "profileCode")?;
    Ok(Json(state.employment.list(code).await?))
}

pub async fn create_employment(
    State(state): State<AppState>,
    Path(profile_code): Path<i64>,
    Json(data): Json<EmploymentCreate>,
) -> ApiResult<DefaultResponseWithId> {
    let code = validate_positive_id(profile_code, "profileCode")?;
    Ok(Json(state.employment.create(code, data).await?))
}

pub async fn delete_employment(
    State(state): State<AppState>,
    Path(profile_code): Path<i64>,
    Query(query): Query<IdQuery>,
) -> ApiResult<DefaultResponse> {
    let (code, id) = ids(profile_code, &query)?;
    Ok(Json(state.employment.delete(code, id).await?))
}

#[cfg(test)]
mod tests {
    use crate::api::test_support::TestApp;
    use axum::http::StatusCode;
    use serde_json::json;

    #[tokio::test]
    async fn test_skill_lifecycle() {
        let app = TestApp::new();

        let (status, body) = app
            .send(
                "POST",
                "/api/skill/1",
                Some(json!({ "skill": "Rust", "level": "Expert" })),
            )
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "profileCode": 1, "id": 1 }));

        let (status, body) = app.send("GET", "/api/skill/1", None).await;
        assert_eq!(status, StatusCode::OK);
        let data = body["data"].as_array().unwrap();
        assert_eq!(data.len(), 1);
        assert_eq!(data[0]["skill"], "Rust");
        assert_eq!(data[0]["profileCode"], 1);

        let (status, body) = app.send("DELETE", "/api/skill/1?id=1", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "profileCode": 1 }));

        let (_, body) = app.send("GET", "/api/skill/1", None).await;
        assert_eq!(body, json!({ "data": [] }));
    }

    #[tokio::test]
    async fn test_delete_missing_row_is_404() {
        let app = TestApp::new();
        let (status, body) = app.send("DELETE", "/api/education/1?id=42", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["code"], 4001);
        assert_eq!(
            body["message"],
            "failed to delete education: education 42 not found"
        );
    }

    #[tokio::test]
    async fn test_delete_requires_positive_id() {
        let app = TestApp::new();
        let (status, body) = app.send("DELETE", "/api/employment/1?id=0", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "id must be a positive integer");

        let (status, _) = app.send("DELETE", "/api/employment/1", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_create_for_unknown_profile_is_404() {
        let app = TestApp::new();
        let (status, body) = app
            .send(
                "POST",
                "/api/employment/5",
                Some(json!({ "jobTitle": "Engineer", "employer": "Acme" })),
            )
            .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["code"], 1001);
    }

    #[tokio::test]
    async fn test_education_date_range_is_validated() {
        let app = TestApp::new();
        let (status, body) = app
            .send(
                "POST",
                "/api/education/1",
                Some(json!({
                    "school": "MIT",
                    "degree": "BSc",
                    "startDate": "2020-09-01T00:00:00Z",
                    "endDate": "2019-06-01T00:00:00Z"
                })),
            )
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["details"]["field"], "endDate");
    }

    #[tokio::test]
    async fn test_list_for_unknown_profile_is_empty() {
        let app = TestApp::new();
        let (status, body) = app.send("GET", "/api/employment/3", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "data": [] }));
    }
}
