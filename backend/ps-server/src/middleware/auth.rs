use crate::{ApiError, AppState};

use ps_auth::AuthError;
use ps_core::ErrorLocation;

use std::panic::Location;

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};

/// Verify the bearer token and attach its claims to the request.
///
/// Short-circuits with 401 before any handler or later middleware runs.
pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let header = match request.headers().get(AUTHORIZATION) {
        Some(value) => Some(value.to_str().map_err(|_| AuthError::InvalidToken {
            message: String::from("authorization header is not visible ASCII"),
            location: ErrorLocation::from(Location::caller()),
        })?),
        None => None,
    };

    let claims = state.jwt_validator.authenticate(header)?;
    request.extensions_mut().insert(claims);

    Ok(next.run(request).await)
}
