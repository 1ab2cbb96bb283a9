//! Error codes and the API error type
//!
//! Every failed request is answered with an [`AppError`] rendered as
//! `{"code": <u16>, "message": "...", "details": {...}}` and the HTTP status
//! derived from its [`ErrorCode`]. Errors in the 9xxx range are logged.
//!
//! ```
//! use shared::error::{AppError, ErrorCode};
//!
//! let err = AppError::validation("firstName must not be empty")
//!     .with_detail("field", "firstName");
//! assert_eq!(err.code, ErrorCode::ValidationFailed);
//! ```

mod category;
mod codes;
mod http;
mod types;

pub use codes::ErrorCode;
pub use types::{AppError, ErrorBody};
