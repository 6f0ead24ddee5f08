//! REST API error types
//!
//! Every error renders as `{"message": ...}` with the status the client
//! contract fixes for it. Internal detail is logged, never returned.

use ps_auth::AuthError;
use ps_core::CoreError;
use ps_db::{DbError, DuplicateField};

use std::panic::Location;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

pub const NAME_REQUIRED: &str = "Name is required";
pub const NAME_TAKEN: &str = "A project with this name already exists";
pub const SLUG_TAKEN: &str = "A project with this slug already exists";
pub const INVALID_PROJECT_ID: &str = "Invalid project ID";
pub const PROJECT_NOT_FOUND: &str = "Project not found";
pub const CREATE_FAILED: &str = "An error occurred while creating the project";
pub const INTERNAL_ERROR: &str = "Internal server error";

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    pub message: String,
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing, expired or invalid token (401)
    #[error("Unauthorized: {source}")]
    Unauthorized {
        #[source]
        source: AuthError,
    },

    /// Valid token without the required role (403)
    #[error("Forbidden: {source}")]
    Forbidden {
        #[source]
        source: AuthError,
    },

    /// Validation error (400)
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },

    /// Name or slug already taken (400)
    #[error("Conflict: {message} {location}")]
    Conflict {
        message: String,
        location: ErrorLocation,
    },

    /// Resource not found (404)
    #[error("Resource not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    /// Internal server error (500). `message` goes to the client, `detail`
    /// only to the log.
    #[error("Internal error: {detail} {location}")]
    Internal {
        message: String,
        detail: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    #[track_caller]
    pub fn validation<S: Into<String>>(message: S) -> Self {
        ApiError::Validation {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn conflict<S: Into<String>>(message: S) -> Self {
        ApiError::Conflict {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn not_found<S: Into<String>>(message: S) -> Self {
        ApiError::NotFound {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn internal<S: Into<String>>(message: &str, detail: S) -> Self {
        ApiError::Internal {
            message: message.to_string(),
            detail: detail.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Store failure during project creation. Uniqueness violations keep their
    /// conflict message; anything else becomes the generic creation failure.
    #[track_caller]
    pub fn creation_failed(e: DbError) -> Self {
        match ApiError::from(e) {
            ApiError::Internal { detail, .. } => ApiError::internal(CREATE_FAILED, detail),
            other => other,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden { .. } => StatusCode::FORBIDDEN,
            ApiError::Validation { .. } | ApiError::Conflict { .. } => StatusCode::BAD_REQUEST,
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        match &self {
            ApiError::Internal { .. } => log::error!("{}", self),
            ApiError::Unauthorized { .. } | ApiError::Forbidden { .. } => log::warn!("{}", self),
            _ => log::debug!("{}", self),
        }

        let message = match self {
            ApiError::Unauthorized { source } | ApiError::Forbidden { source } => {
                source.client_message().to_string()
            }
            ApiError::Validation { message, .. }
            | ApiError::Conflict { message, .. }
            | ApiError::NotFound { message, .. }
            | ApiError::Internal { message, .. } => message,
        };

        (status, Json(ApiErrorBody { message })).into_response()
    }
}

impl From<AuthError> for ApiError {
    fn from(source: AuthError) -> Self {
        if source.is_forbidden() {
            ApiError::Forbidden { source }
        } else {
            ApiError::Unauthorized { source }
        }
    }
}

impl From<CoreError> for ApiError {
    #[track_caller]
    fn from(e: CoreError) -> Self {
        match e {
            CoreError::Validation { message, .. } => ApiError::validation(message),
            CoreError::InvalidProjectId { .. } => ApiError::validation(INVALID_PROJECT_ID),
        }
    }
}

impl From<DbError> for ApiError {
    #[track_caller]
    fn from(e: DbError) -> Self {
        match e {
            DbError::Duplicate {
                field: DuplicateField::Name,
                ..
            } => ApiError::conflict(NAME_TAKEN),
            DbError::Duplicate {
                field: DuplicateField::Slug,
                ..
            } => ApiError::conflict(SLUG_TAKEN),
            other => ApiError::internal(INTERNAL_ERROR, other.to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
