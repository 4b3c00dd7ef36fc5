//! Service layer error type

use depot_common::AppError;
use depot_core::DomainError;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// Storage failure without a more specific mapping
    #[error(transparent)]
    Domain(DomainError),

    /// Hashing failure
    #[error(transparent)]
    App(AppError),

    #[error("{resource} not found")]
    NotFound { resource: &'static str, id: String },

    /// Message goes to the client verbatim
    #[error("{0}")]
    Conflict(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ServiceError {
    pub fn not_found(resource: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            resource,
            id: id.to_string(),
        }
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// HTTP status code, on the same scale as `AppError::status_code`
    pub fn status_code(&self) -> u16 {
        match self {
            Self::App(e) => e.status_code(),
            Self::Conflict(_) => 400,
            Self::NotFound { .. } => 404,
            Self::Internal(_) => 500,
            Self::Domain(e) if e.is_conflict() => 400,
            Self::Domain(e) if e.is_not_found() => 404,
            Self::Domain(_) => 500,
        }
    }

    pub fn error_code(&self) -> &str {
        match self {
            Self::Domain(e) => e.code(),
            Self::App(e) => e.error_code(),
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Conflict(_) => "CONFLICT",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

impl From<DomainError> for ServiceError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::UserNotFound(id) => Self::not_found("User", id),
            DomainError::EmailAlreadyExists | DomainError::UsernameAlreadyExists => {
                Self::Conflict(err.to_string())
            }
            DomainError::DatabaseError(_) => Self::Domain(err),
        }
    }
}

impl From<AppError> for ServiceError {
    fn from(err: AppError) -> Self {
        Self::App(err)
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;
