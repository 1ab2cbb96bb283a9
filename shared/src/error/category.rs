//! Error category derived from the code range

use super::codes::ErrorCode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorCategory {
    Request,
    Profile,
    Photo,
    Collection,
    System,
}

impl ErrorCategory {
    fn from_code(code: u16) -> Self {
        match code {
            0..1000 => Self::Request,
            1000..2000 => Self::Profile,
            2000..3000 => Self::Photo,
            3000..6000 => Self::Collection,
            _ => Self::System,
        }
    }
}

impl ErrorCode {
    pub(crate) fn category(&self) -> ErrorCategory {
        ErrorCategory::from_code(self.code())
    }
}
