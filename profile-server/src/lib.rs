//! profile-server: job-seeker profile backend
//!
//! Stores profiles with their skills, education and employment history in
//! Postgres. Profile photos arrive as base64 data-URIs, are re-encoded to PNG
//! under the first writable search root and are served back as data-URIs.

pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod photo;
pub mod services;
pub mod state;
pub mod validation;
