//! Profile photo upload, download and delete
//!
//! Codec and filesystem work runs on the blocking pool. The file write and
//! the `photo_url` update are not atomic; a failed update leaves an
//! unreferenced file behind.

use std::sync::Arc;

use shared::error::AppError;
use shared::models::{DefaultResponse, PhotoResponse, UploadPhotoResponse};

use crate::db::ProfileRepository;
use crate::error::{RepoResultExt, ServiceError, ServiceResult};
use crate::photo::{PhotoError, PhotoStore};

#[derive(Clone)]
pub struct PhotoService {
    repo: Arc<dyn ProfileRepository>,
    store: Arc<PhotoStore>,
    /// Delete the previously referenced file after a successful re-upload
    prune_previous: bool,
}

async fn run_blocking<T, F>(f: F) -> ServiceResult<T>
where
    F: FnOnce() -> Result<T, PhotoError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| AppError::internal(format!("photo task failed: {e}")))?
        .map_err(ServiceError::from)
}

impl PhotoService {
    pub fn new(repo: Arc<dyn ProfileRepository>, store: Arc<PhotoStore>, prune_previous: bool) -> Self {
        Self {
            repo,
            store,
            prune_previous,
        }
    }

    pub async fn upload_photo(
        &self,
        code: i64,
        data_uri: String,
    ) -> ServiceResult<UploadPhotoResponse> {
        let store = self.store.clone();
        let path = run_blocking(move || store.store_from_data_uri(code, &data_uri)).await?;

        let previous = if self.prune_previous {
            self.repo.get_by_code(code).await.verbatim()?.photo_url
        } else {
            None
        };

        if let Err(e) = self.repo.set_photo_url(code, Some(&path)).await {
            tracing::warn!(profile_code = code, path = %path, error = %e, "Stored photo left unreferenced");
            return Err(ServiceError::Store(e));
        }

        if let Some(old) = previous.filter(|old| !old.is_empty() && *old != path) {
            let store = self.store.clone();
            if let Err(e) = tokio::task::spawn_blocking(move || store.remove(&old)).await {
                tracing::warn!(error = %e, "Previous photo cleanup task failed");
            }
        }

        Ok(UploadPhotoResponse {
            profile_code: code,
            photo_url: path,
        })
    }

    pub async fn download_photo(&self, code: i64) -> ServiceResult<PhotoResponse> {
        let profile = self.repo.get_by_code(code).await.verbatim()?;
        let path = profile.photo_url.unwrap_or_default();

        let store = self.store.clone();
        let base64img = run_blocking(move || store.load_as_data_uri(&path)).await?;
        Ok(PhotoResponse {
            profile_code: code,
            base64img,
        })
    }

    /// Clears the reference only; the file stays on disk
    pub async fn delete_photo(&self, code: i64) -> ServiceResult<DefaultResponse> {
        self.repo
            .set_photo_url(code, None)
            .await
            .context("failed to delete photo")?;
        Ok(DefaultResponse { profile_code: code })
    }
}
