//! Photo payloads
//!
//! Photos travel as data-URIs (`data:image/png;base64,...`) inside a JSON
//! field named `base64img`.

use serde::{Deserialize, Serialize};

/// Upload photo payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadPhotoRequest {
    #[serde(default)]
    pub base64img: String,
}

/// Result of a successful upload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadPhotoResponse {
    pub profile_code: i64,
    /// Relative path of the stored file
    pub photo_url: String,
}

/// Downloaded photo, always re-encoded as PNG
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhotoResponse {
    pub profile_code: i64,
    pub base64img: String,
}
