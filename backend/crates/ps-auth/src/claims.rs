use crate::{AuthError, Result as AuthErrorResult};

use ps_core::ErrorLocation;

use std::panic::Location;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Role value that unlocks project creation
pub const ADMIN_ROLE: &str = "admin";

/// Verified JWT payload.
///
/// The issuer owns the claim layout, so the payload is kept as an opaque
/// key/value map. Only `role` carries meaning inside this service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Claims(Map<String, Value>);

impl Claims {
    pub fn new(claims: Map<String, Value>) -> Self {
        Self(claims)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// The `role` claim, if present and a string
    pub fn role(&self) -> Option<&str> {
        self.0.get("role").and_then(Value::as_str)
    }

    /// Subject (`sub`), used only to attribute log lines
    pub fn subject(&self) -> Option<&str> {
        self.0.get("sub").and_then(Value::as_str)
    }

    pub fn is_admin(&self) -> bool {
        self.role() == Some(ADMIN_ROLE)
    }

    /// Authorization check for admin-only operations
    #[track_caller]
    pub fn require_admin(&self) -> AuthErrorResult<()> {
        if self.is_admin() {
            return Ok(());
        }

        Err(AuthError::InsufficientRole {
            role: self.role().unwrap_or("<none>").to_string(),
            required: ADMIN_ROLE,
            location: ErrorLocation::from(Location::caller()),
        })
    }

    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }
}
