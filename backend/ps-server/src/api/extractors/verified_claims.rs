//! Handler access to the claims `require_auth` attached

use crate::ApiError;

use ps_auth::{AuthError, Claims};
use ps_core::ErrorLocation;

use std::future::Future;
use std::panic::Location;

use axum::{extract::FromRequestParts, http::request::Parts};

/// Claims of the verified caller.
///
/// Only valid on routes behind `require_auth`; elsewhere extraction fails
/// as if the token were missing.
pub struct VerifiedClaims(pub Claims);

impl<S> FromRequestParts<S> for VerifiedClaims
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            match parts.extensions.get::<Claims>() {
                Some(claims) => Ok(VerifiedClaims(claims.clone())),
                None => Err(ApiError::from(AuthError::MissingToken {
                    location: ErrorLocation::from(Location::caller()),
                })),
            }
        }
    }
}

impl VerifiedClaims {
    /// Caller label for log lines
    pub fn caller(&self) -> &str {
        self.0.subject().unwrap_or("<anonymous>")
    }
}
