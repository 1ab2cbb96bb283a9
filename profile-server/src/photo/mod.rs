//! Profile photo storage
//!
//! Photos arrive as base64 data-URIs, are normalized to PNG and written under
//! the first usable directory of an ordered list of search roots. Only the
//! path relative to that root is ever returned or persisted.

mod clock;
pub mod codec;
mod storage;

pub use clock::{Clock, FixedClock, SystemClock};
pub use storage::PhotoStore;

use thiserror::Error;

/// Coarse classification used by the HTTP layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhotoErrorKind {
    /// Payload is not base64 or not a recognized image
    Decode,
    /// PNG encoder failure
    Encode,
    /// Filesystem failure
    Io,
}

/// Photo codec and storage errors
///
/// I/O variants carry the bare `io::Error`, which never includes the path.
#[derive(Debug, Error)]
pub enum PhotoError {
    #[error("failed to decode base64 string: {0}")]
    Base64(base64::DecodeError),

    #[error("failed to decode image: {0}")]
    Decode(image::ImageError),

    #[error("failed to encode image to file: {0}")]
    EncodeToFile(image::ImageError),

    #[error("failed to encode image: {0}")]
    Encode(image::ImageError),

    #[error("failed creating output file: {0}")]
    CreateFile(std::io::Error),

    #[error("failed writing output file: {0}")]
    WriteFile(std::io::Error),

    #[error("failed to open image file: {0}")]
    OpenFile(std::io::Error),

    #[error("failed to open image file: empty photo path")]
    EmptyPath,
}

impl PhotoError {
    pub fn kind(&self) -> PhotoErrorKind {
        match self {
            PhotoError::Base64(_) | PhotoError::Decode(_) => PhotoErrorKind::Decode,
            PhotoError::EncodeToFile(_) | PhotoError::Encode(_) => PhotoErrorKind::Encode,
            PhotoError::CreateFile(_)
            | PhotoError::WriteFile(_)
            | PhotoError::OpenFile(_)
            | PhotoError::EmptyPath => PhotoErrorKind::Io,
        }
    }
}
