//! Shared types for the profile service
//!
//! Error types and the domain models exchanged
//! between profile-server and its HTTP clients.

pub mod error;
pub mod models;

