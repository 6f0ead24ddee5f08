use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Missing authorization header {location}")]
    MissingToken { location: ErrorLocation },

    #[error("Token expired {location}")]
    TokenExpired { location: ErrorLocation },

    #[error("Invalid token: {message} {location}")]
    InvalidToken {
        message: String,
        location: ErrorLocation,
    },

    #[error("JWT decode failed: {source} {location}")]
    JwtDecode {
        #[source]
        source: jsonwebtoken::errors::Error,
        location: ErrorLocation,
    },

    #[error("Role '{role}' is not allowed, '{required}' required {location}")]
    InsufficientRole {
        role: String,
        required: &'static str,
        location: ErrorLocation,
    },
}

impl AuthError {
    /// Message safe to return to the caller.
    ///
    /// Internal detail (decode reason, caller location) stays in logs.
    pub fn client_message(&self) -> &'static str {
        match self {
            Self::MissingToken { .. } => "Token is missing",
            Self::TokenExpired { .. } => "Token has expired",
            Self::InvalidToken { .. } | Self::JwtDecode { .. } => "Invalid token",
            Self::InsufficientRole { .. } => "Admin privileges required",
        }
    }

    /// True for failures of authorization (403) rather than authentication (401)
    pub fn is_forbidden(&self) -> bool {
        matches!(self, Self::InsufficientRole { .. })
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;
