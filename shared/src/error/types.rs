//! `AppError` and its JSON rendering

use super::category::ErrorCategory;
use super::codes::ErrorCode;
use axum::Json;
use axum::response::{IntoResponse, Response};
use http::StatusCode;
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;
use thiserror::Error;

/// Error returned by every handler
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct AppError {
    pub code: ErrorCode,
    pub message: String,
    /// Field-level context such as `{"field": "email"}`
    pub details: Option<HashMap<String, Value>>,
}

impl AppError {
    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.details
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    pub fn http_status(&self) -> StatusCode {
        self.code.http_status()
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::ValidationFailed, msg)
    }

    pub fn invalid_request(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::InvalidRequest, msg)
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::InternalError, msg)
    }
}

/// JSON body of an error response: `{code, message, details?}`
#[derive(Debug, Serialize)]
pub struct ErrorBody<'a> {
    pub code: ErrorCode,
    pub message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<&'a HashMap<String, Value>>,
}

impl<'a> From<&'a AppError> for ErrorBody<'a> {
    fn from(err: &'a AppError) -> Self {
        Self {
            code: err.code,
            message: &err.message,
            details: err.details.as_ref(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if self.code.category() == ErrorCategory::System {
            tracing::error!(code = %self.code, message = %self.message, "System error occurred");
        }

        (self.http_status(), Json(ErrorBody::from(&self))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_detail_accumulates() {
        let err = AppError::validation("firstName must not be empty")
            .with_detail("field", "firstName")
            .with_detail("max", 200);

        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert_eq!(err.to_string(), "firstName must not be empty");
        let details = err.details.unwrap();
        assert_eq!(details["field"], "firstName");
        assert_eq!(details["max"], 200);
    }

    #[test]
    fn test_constructors() {
        assert_eq!(
            AppError::invalid_request("id must be a positive integer").http_status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::internal("photo task failed").code,
            ErrorCode::InternalError
        );
    }

    #[test]
    fn test_error_body_json() {
        let err = AppError::with_message(ErrorCode::SkillNotFound, "skill 3 not found");
        let json = serde_json::to_value(ErrorBody::from(&err)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "code": 3001, "message": "skill 3 not found" })
        );

        let err = err.with_detail("id", 3);
        let json = serde_json::to_value(ErrorBody::from(&err)).unwrap();
        assert_eq!(json["details"]["id"], 3);
    }

    #[test]
    fn test_into_response_status() {
        let response =
            AppError::with_message(ErrorCode::ProfileNotFound, "profile 9 not found").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = AppError::with_message(ErrorCode::DatabaseError, "down").into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
