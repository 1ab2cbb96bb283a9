//! API routes for profile-server

pub mod collection;
pub mod health;
pub mod photo;
pub mod profile;

use axum::Json;
use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use shared::error::AppError;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

type ApiResult<T> = Result<Json<T>, AppError>;

/// Create the combined router
pub fn create_router(state: AppState, max_body_bytes: usize) -> Router {
    let profile = Router::new()
        .route("/profile", post(profile::create_profile))
        .route(
            "/profile/{profile_code}",
            get(profile::get_profile).put(profile::update_profile),
        )
        .route(
            "/working-experience/{profile_code}",
            get(profile::get_working_experience).put(profile::update_working_experience),
        );

    let photo = Router::new().route(
        "/photo/{profile_code}",
        get(photo::download_photo)
            .put(photo::upload_photo)
            .delete(photo::delete_photo),
    );

    let collections = Router::new()
        .route(
            "/skill/{profile_code}",
            get(collection::list_skills)
                .post(collection::create_skill)
                .delete(collection::delete_skill),
        )
        .route(
            "/education/{profile_code}",
            get(collection::list_education)
                .post(collection::create_education)
                .delete(collection::delete_education),
        )
        .route(
            "/employment/{profile_code}",
            get(collection::list_employment)
                .post(collection::create_employment)
                .delete(collection::delete_employment),
        );

    Router::new()
        .route("/health", get(health::health_check))
        .nest("/api", profile.merge(photo).merge(collections))
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
