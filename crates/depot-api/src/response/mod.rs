//! Error responses for the HTTP layer
//!
//! Every failure is rendered as `{"error": {"code", "message", "details"?}}`.
//! Anything that maps to a 5xx keeps its cause in the logs and shows the client
//! only a generic message.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use depot_common::{AppError, ErrorResponse};
use depot_service::ServiceError;
use serde::Serialize;
use serde_json::json;
use thiserror::Error;
use tracing::error;
use validator::ValidationErrors;

const GENERIC_SERVER_ERROR: &str = "Internal server error";

/// Key used in `details` when a body problem cannot be pinned to one field
pub const BODY_DETAILS_KEY: &str = "body";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    App(#[from] AppError),

    #[error("{0}")]
    Service(#[from] ServiceError),

    /// Body parsed but broke a field rule
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("Invalid path parameter: {0}")]
    InvalidPath(String),

    #[error("Invalid query parameter: {0}")]
    InvalidQuery(String),

    /// Body missing, not JSON, or of the wrong shape
    #[error("Invalid request body: {message}")]
    InvalidBody {
        message: String,
        /// Offending field, when the decoder named one
        field: Option<String>,
    },
}

impl ApiError {
    pub fn invalid_path(msg: impl Into<String>) -> Self {
        Self::InvalidPath(msg.into())
    }

    pub fn invalid_query(msg: impl Into<String>) -> Self {
        Self::InvalidQuery(msg.into())
    }

    pub fn invalid_body(msg: impl Into<String>, field: Option<String>) -> Self {
        Self::InvalidBody {
            message: msg.into(),
            field,
        }
    }

    /// Answer for paths no route matches
    pub fn route_not_found() -> Self {
        Self::App(AppError::not_found("Not Found"))
    }

    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        let code = match self {
            Self::App(e) => e.status_code(),
            Self::Service(e) => e.status_code(),
            Self::Validation(_)
            | Self::InvalidPath(_)
            | Self::InvalidQuery(_)
            | Self::InvalidBody { .. } => 422,
        };
        StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    #[must_use]
    pub fn error_code(&self) -> &str {
        match self {
            Self::App(e) => e.error_code(),
            Self::Service(e) => e.error_code(),
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::InvalidPath(_) => "INVALID_PATH_PARAMETER",
            Self::InvalidQuery(_) => "INVALID_QUERY_PARAMETER",
            Self::InvalidBody { .. } => "INVALID_REQUEST_BODY",
        }
    }

    /// Field map for bad input, shaped like `validator`'s: field -> list of problems
    fn details(&self) -> Option<serde_json::Value> {
        match self {
            Self::Validation(errors) => serde_json::to_value(errors).ok(),
            Self::InvalidBody { message, field } => {
                let key = field.as_deref().unwrap_or(BODY_DETAILS_KEY);
                Some(json!({ key: [{ "code": "invalid_body", "message": message }] }))
            }
            _ => None,
        }
    }
}

/// Top-level JSON object of an error response
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: ErrorResponse,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let message = if status.is_server_error() {
            error!(error = ?self, status = status.as_u16(), "Request failed");
            GENERIC_SERVER_ERROR.to_string()
        } else {
            self.to_string()
        };

        let body = ErrorBody {
            error: ErrorResponse {
                code: self.error_code().to_string(),
                message,
                details: self.details(),
            },
        };

        (status, Json(body)).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Wraps a response and forces 201
pub struct Created<T>(pub T);

impl<T: IntoResponse> IntoResponse for Created<T> {
    fn into_response(self) -> Response {
        let mut response = self.0.into_response();
        *response.status_mut() = StatusCode::CREATED;
        response
    }
}
