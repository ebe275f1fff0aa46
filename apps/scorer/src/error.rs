use thiserror::Error;

use crate::domain::errors::{DomainError, RosterError};
use crate::store::StoreError;

/// Application-level error surface.
///
/// Domain and store errors convert into this at the service boundary; the
/// driver only ever formats an `AppError`.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {detail}")]
    Validation { code: &'static str, detail: String },
    #[error("Storage error: {detail}")]
    Storage { detail: String },
    #[error("Configuration error: {detail}")]
    Config { detail: String },
    #[error("Internal error: {detail}")]
    Internal { detail: String },
}

impl AppError {
    /// Stable machine-readable code for logs.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Validation { code, .. } => code,
            AppError::Storage { .. } => "STORAGE_ERROR",
            AppError::Config { .. } => "CONFIG_ERROR",
            AppError::Internal { .. } => "INTERNAL",
        }
    }

    pub fn validation(code: &'static str, detail: impl Into<String>) -> Self {
        AppError::Validation {
            code,
            detail: detail.into(),
        }
    }

    pub fn config(detail: impl Into<String>) -> Self {
        AppError::Config {
            detail: detail.into(),
        }
    }

    pub fn internal(detail: impl Into<String>) -> Self {
        AppError::Internal {
            detail: detail.into(),
        }
    }
}

impl From<DomainError> for AppError {
    fn from(e: DomainError) -> Self {
        let code = match &e {
            DomainError::InvalidInputFormat(_) => "INVALID_INPUT_FORMAT",
            DomainError::OutOfRange(_) => "OUT_OF_RANGE",
            DomainError::ForbiddenScore => "FORBIDDEN_SCORE",
            DomainError::Overscore { .. } => "OVERSCORE",
            DomainError::InvalidDartCount(_) => "INVALID_DART_COUNT",
            DomainError::CorruptSnapshot(_) => "CORRUPT_SNAPSHOT",
            DomainError::InvariantViolation(_) => "INVARIANT_VIOLATION",
        };
        AppError::validation(code, e.to_string())
    }
}

impl From<RosterError> for AppError {
    fn from(e: RosterError) -> Self {
        let code = match &e {
            RosterError::EmptyName => "EMPTY_NAME",
            RosterError::DuplicateName(_) => "DUPLICATE_NAME",
        };
        AppError::validation(code, e.to_string())
    }
}

impl From<StoreError> for AppError {
    fn from(e: StoreError) -> Self {
        AppError::Storage {
            detail: e.to_string(),
        }
    }
}
