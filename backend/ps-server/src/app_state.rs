use ps_auth::JwtValidator;

use std::sync::Arc;

use sqlx::SqlitePool;

/// Shared per-process handles injected into every handler
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub jwt_validator: Arc<JwtValidator>,
}

impl AppState {
    pub fn new(pool: SqlitePool, jwt_validator: JwtValidator) -> Self {
        Self {
            pool,
            jwt_validator: Arc::new(jwt_validator),
        }
    }
}
