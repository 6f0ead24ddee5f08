use crate::{AuthError, Result as AuthErrorResult};

use ps_core::ErrorLocation;

use std::panic::Location;

const BEARER_PREFIX: &str = "Bearer ";

/// Pull the raw token out of an `Authorization` header value.
///
/// Accepts both `Bearer <token>` and a bare `<token>`. With the prefix, the
/// token is the first space-delimited segment after it.
#[track_caller]
pub fn extract_token(header: Option<&str>) -> AuthErrorResult<&str> {
    let value = match header {
        Some(value) if !value.is_empty() => value,
        _ => {
            return Err(AuthError::MissingToken {
                location: ErrorLocation::from(Location::caller()),
            });
        }
    };

    match value.strip_prefix(BEARER_PREFIX) {
        Some(rest) => Ok(rest.split(' ').next().unwrap_or_default()),
        None => Ok(value),
    }
}
