pub mod bearer;
pub mod claims;
pub mod error;
pub mod jwt_validator;

pub use bearer::extract_token;
pub use claims::{ADMIN_ROLE, Claims};
pub use error::{AuthError, Result};
pub use jwt_validator::JwtValidator;

#[cfg(test)]
mod tests;
