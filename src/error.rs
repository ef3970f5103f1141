//! Screen Errors and Notices
//!
//! Everything that goes wrong on a screen ends up as a `Notice`.

use rest_collection::ApiError;
use thiserror::Error;

/// Failure of a user action
#[derive(Debug, Error)]
pub enum AppError {
    /// Remote call did not complete or returned a non-success status
    #[error("network failure: {0}")]
    Network(#[from] ApiError),

    /// Local precondition failed before any remote call
    #[error("{0}")]
    Validation(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Info,
    Error,
}

/// User-visible message shown in a dialog
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }

    /// Blocking notices stay until the user closes them
    pub fn is_blocking(&self) -> bool {
        self.kind != NoticeKind::Success
    }
}

impl From<&AppError> for Notice {
    fn from(err: &AppError) -> Self {
        match err {
            AppError::Validation(msg) => Notice::error(msg.clone()),
            AppError::Network(e) => Notice::error(e.to_string()),
        }
    }
}
