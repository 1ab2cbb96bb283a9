//! Application state for profile-server

use std::sync::Arc;

use crate::config::Config;
use crate::db::{
    self, PgEducationRepository, PgEmploymentRepository, PgProfileRepository, PgSkillRepository,
    ProfileRepository,
};
use crate::photo::{PhotoStore, SystemClock};
use crate::services::{
    EducationService, EmploymentService, PhotoService, ProfileService, SkillService,
};

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub profiles: ProfileService,
    pub photos: PhotoService,
    pub skills: SkillService,
    pub education: EducationService,
    pub employment: EmploymentService,
}

impl AppState {
    /// Create a new AppState backed by PostgreSQL and the local filesystem
    pub async fn new(config: &Config) -> Result<Self, BoxError> {
        let pool = db::connect(config).await?;

        let store = PhotoStore::new(
            config.photo_search_roots.clone(),
            config.photo_image_dir.clone(),
            Arc::new(SystemClock),
        );
        let image_dir = store.ensure_image_dir()?;
        tracing::info!(
            image_dir = %image_dir.display(),
            prune_previous = config.photo_prune_previous,
            "Photo storage ready"
        );

        let profile_repo: Arc<dyn ProfileRepository> =
            Arc::new(PgProfileRepository::new(pool.clone()));

        Ok(Self {
            profiles: ProfileService::new(profile_repo.clone()),
            photos: PhotoService::new(
                profile_repo,
                Arc::new(store),
                config.photo_prune_previous,
            ),
            skills: SkillService::new(Arc::new(PgSkillRepository::new(pool.clone()))),
            education: EducationService::new(Arc::new(PgEducationRepository::new(pool.clone()))),
            employment: EmploymentService::new(Arc::new(PgEmploymentRepository::new(pool))),
        })
    }
}
