//! Error codes returned in every error body
//!
//! - 0xxx: request errors
//! - 1xxx: profile
//! - 2xxx: photo
//! - 3xxx: skill
//! - 4xxx: education
//! - 5xxx: employment
//! - 9xxx: system

use serde::Serialize;
use std::fmt;

/// Numeric error code; clients match on the number, never the message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: Request ====================
    /// Body field failed a content rule
    ValidationFailed = 2,
    /// Path or query value is unusable
    InvalidRequest = 5,

    // ==================== 1xxx: Profile ====================
    ProfileNotFound = 1001,

    // ==================== 2xxx: Photo ====================
    /// Payload is not valid base64 or not a recognized image
    InvalidImageFile = 2001,
    /// PNG re-encoding failed
    ImageProcessingFailed = 2002,
    /// Image file could not be created or opened
    FileStorageFailed = 2003,

    // ==================== 3xxx..5xxx: Collections ====================
    SkillNotFound = 3001,
    EducationNotFound = 4001,
    EmploymentNotFound = 5001,

    // ==================== 9xxx: System ====================
    InternalError = 9001,
    DatabaseError = 9002,
}

impl ErrorCode {
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_stable() {
        let expected = [
            (ErrorCode::ValidationFailed, 2),
            (ErrorCode::InvalidRequest, 5),
            (ErrorCode::ProfileNotFound, 1001),
            (ErrorCode::InvalidImageFile, 2001),
            (ErrorCode::ImageProcessingFailed, 2002),
            (ErrorCode::FileStorageFailed, 2003),
            (ErrorCode::SkillNotFound, 3001),
            (ErrorCode::EducationNotFound, 4001),
            (ErrorCode::EmploymentNotFound, 5001),
            (ErrorCode::InternalError, 9001),
            (ErrorCode::DatabaseError, 9002),
        ];
        for (code, value) in expected {
            assert_eq!(code.code(), value);
            assert_eq!(u16::from(code), value);
        }
    }

    #[test]
    fn test_serializes_as_number() {
        assert_eq!(
            serde_json::to_string(&ErrorCode::InvalidImageFile).unwrap(),
            "2001"
        );
        assert_eq!(ErrorCode::ProfileNotFound.to_string(), "1001");
    }
}
