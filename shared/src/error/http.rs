//! HTTP status code mapping for error codes

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    pub fn http_status(&self) -> StatusCode {
        match self {
            Self::ProfileNotFound
            | Self::SkillNotFound
            | Self::EducationNotFound
            | Self::EmploymentNotFound => StatusCode::NOT_FOUND,

            Self::ValidationFailed | Self::InvalidRequest | Self::InvalidImageFile => {
                StatusCode::BAD_REQUEST
            }

            Self::ImageProcessingFailed
            | Self::FileStorageFailed
            | Self::InternalError
            | Self::DatabaseError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
