use std::panic::Location;

use error_location::ErrorLocation;
use ps_config::ConfigError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("Agent request failed: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    #[error("Agent rejected {operation} (status {status}): {body} {location}")]
    Rejected {
        operation: &'static str,
        status: u16,
        body: String,
        location: ErrorLocation,
    },

    #[error("Invalid registry configuration: {source} {location}")]
    Config {
        #[source]
        source: ConfigError,
        location: ErrorLocation,
    },
}

impl RegistryError {
    #[track_caller]
    pub fn rejected(operation: &'static str, status: u16, body: String) -> Self {
        RegistryError::Rejected {
            operation,
            status,
            body,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<reqwest::Error> for RegistryError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        RegistryError::Http {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }
}

impl From<ConfigError> for RegistryError {
    #[track_caller]
    fn from(source: ConfigError) -> Self {
        RegistryError::Config {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, RegistryError>;
