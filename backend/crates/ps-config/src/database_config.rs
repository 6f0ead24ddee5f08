use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_DATABASE_DIR,
    DEFAULT_DATABASE_NAME,
};

use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Directory holding the database file
    pub dir: String,
    /// Store name; the file is `<dir>/<name>.db`
    pub name: String,
    /// How long a request may wait for a store connection
    pub connect_timeout_secs: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            dir: String::from(DEFAULT_DATABASE_DIR),
            name: String::from(DEFAULT_DATABASE_NAME),
            connect_timeout_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
        }
    }
}

impl DatabaseConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.name.is_empty() || self.name.contains(['/', '\\']) || self.name.contains("..") {
            return Err(ConfigError::database(format!(
                "database.name must be a plain file stem, got '{}'",
                self.name
            )));
        }

        if self.connect_timeout_secs == 0 {
            return Err(ConfigError::database(
                "database.connect_timeout_secs must be greater than 0",
            ));
        }

        Ok(())
    }

    pub fn path(&self) -> PathBuf {
        PathBuf::from(&self.dir).join(format!("{}.db", self.name))
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }
}
