use crate::{AuthError, Claims, Result as AuthErrorResult};

use ps_core::ErrorLocation;

use std::panic::Location;

use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

/// Verifies HS256 tokens signed with the process-wide shared secret.
pub struct JwtValidator {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtValidator {
    /// Create validator with HS256 (symmetric secret)
    ///
    /// `leeway_secs` is the clock skew tolerated on `exp`.
    pub fn with_hs256(secret: &[u8], leeway_secs: u64) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = leeway_secs;
        // Issuers are not required to set `exp`; it is enforced when present.
        validation.set_required_spec_claims::<&str>(&[]);

        Self {
            decoding_key: DecodingKey::from_secret(secret),
            validation,
        }
    }

    /// Validate JWT token and return claims
    #[track_caller]
    pub fn validate(&self, token: &str) -> AuthErrorResult<Claims> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(
            |e| match e.kind() {
                ErrorKind::ExpiredSignature => AuthError::TokenExpired {
                    location: ErrorLocation::from(Location::caller()),
                },
                _ => AuthError::JwtDecode {
                    source: e,
                    location: ErrorLocation::from(Location::caller()),
                },
            },
        )?;

        Ok(token_data.claims)
    }

    /// Header-to-claims in one step, as the auth middleware needs it
    #[track_caller]
    pub fn authenticate(&self, header: Option<&str>) -> AuthErrorResult<Claims> {
        let token = crate::extract_token(header)?;
        self.validate(token)
    }

    /// Get the algorithm being used (for logging/debugging)
    pub fn algorithm(&self) -> &'static str {
        "HS256"
    }
}
