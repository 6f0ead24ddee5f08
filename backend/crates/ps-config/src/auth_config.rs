use crate::{ConfigError, ConfigErrorResult, DEFAULT_JWT_LEEWAY_SECS};

use std::fmt;

use serde::Deserialize;

const RECOMMENDED_SECRET_LENGTH: usize = 32;

#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// HS256 signing secret shared with the token issuer. Required.
    pub jwt_secret: Option<String>,
    /// Clock skew tolerated when checking `exp`
    pub leeway_secs: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: None,
            leeway_secs: DEFAULT_JWT_LEEWAY_SECS,
        }
    }
}

impl AuthConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let Some(secret) = self.jwt_secret.as_deref() else {
            return Err(ConfigError::auth(
                "auth.jwt_secret is required (set PS_AUTH_JWT_SECRET)",
            ));
        };

        if secret.is_empty() {
            return Err(ConfigError::auth("auth.jwt_secret cannot be empty"));
        }

        if secret.len() < RECOMMENDED_SECRET_LENGTH {
            log::warn!(
                "auth.jwt_secret is shorter than {} characters",
                RECOMMENDED_SECRET_LENGTH
            );
        }

        Ok(())
    }
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("jwt_secret", &self.jwt_secret.as_ref().map(|_| "[REDACTED]"))
            .field("leeway_secs", &self.leeway_secs)
            .finish()
    }
}
