//! Unified service-layer error type for profile-server
//!
//! `ServiceError` bridges repository and photo errors to the API-layer
//! `AppError`. Repository failures are either wrapped with the static prefix
//! of the failing step or passed through verbatim.

use axum::response::IntoResponse;
use shared::error::{AppError, ErrorCode};
use thiserror::Error;

use crate::db::{Entity, RepoError};
use crate::photo::{PhotoError, PhotoErrorKind};

#[derive(Debug, Error)]
pub enum ServiceError {
    /// Repository error prefixed with the failing step ("failed to get profile: ...")
    #[error("{context}: {source}")]
    Repo {
        context: &'static str,
        source: RepoError,
    },

    /// Repository error passed through without a prefix
    #[error(transparent)]
    Store(RepoError),

    #[error(transparent)]
    Photo(#[from] PhotoError),

    /// Business-rule error (already an AppError with the correct ErrorCode)
    #[error(transparent)]
    App(#[from] AppError),
}

/// Convenience type alias for service-layer results
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Attaches a step prefix to repository results
pub trait RepoResultExt<T> {
    fn context(self, context: &'static str) -> ServiceResult<T>;
    fn verbatim(self) -> ServiceResult<T>;
}

impl<T> RepoResultExt<T> for Result<T, RepoError> {
    fn context(self, context: &'static str) -> ServiceResult<T> {
        self.map_err(|source| ServiceError::Repo { context, source })
    }

    fn verbatim(self) -> ServiceResult<T> {
        self.map_err(ServiceError::Store)
    }
}

fn repo_error_code(err: &RepoError) -> ErrorCode {
    match err {
        RepoError::NotFound { entity, .. } => match entity {
            Entity::Profile => ErrorCode::ProfileNotFound,
            Entity::Skill => ErrorCode::SkillNotFound,
            Entity::Education => ErrorCode::EducationNotFound,
            Entity::Employment => ErrorCode::EmploymentNotFound,
        },
        RepoError::Database(_) => ErrorCode::DatabaseError,
    }
}

fn photo_error_code(err: &PhotoError) -> ErrorCode {
    match err.kind() {
        PhotoErrorKind::Decode => ErrorCode::InvalidImageFile,
        PhotoErrorKind::Encode => ErrorCode::ImageProcessingFailed,
        PhotoErrorKind::Io => ErrorCode::FileStorageFailed,
    }
}

impl From<ServiceError> for AppError {
    fn from(e: ServiceError) -> Self {
        let message = e.to_string();
        let code = match e {
            ServiceError::App(app_err) => return app_err,
            ServiceError::Repo { source, .. } | ServiceError::Store(source) => {
                repo_error_code(&source)
            }
            ServiceError::Photo(photo_err) => {
                if photo_err.kind() == PhotoErrorKind::Io {
                    tracing::warn!(error = %photo_err, "Photo storage error");
                }
                photo_error_code(&photo_err)
            }
        };
        AppError::with_message(code, message)
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> axum::response::Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
