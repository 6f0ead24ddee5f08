use crate::ApiError;

use ps_auth::Claims;

use axum::{extract::Request, middleware::Next, response::Response};

/// Admin gate. Must sit inside `require_auth`; a request without attached
/// claims is treated as having no role.
pub async fn require_admin(request: Request, next: Next) -> Result<Response, ApiError> {
    match request.extensions().get::<Claims>() {
        Some(claims) => claims.require_admin()?,
        None => Claims::default().require_admin()?,
    }

    Ok(next.run(request).await)
}
