mod auth_config;
mod config;
mod database_config;
mod error;
mod log_level;
mod logging_config;
mod registry_config;
mod server_config;

pub use auth_config::AuthConfig;
pub use config::Config;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use registry_config::RegistryConfig;
pub use server_config::ServerConfig;

const CONFIG_DIR_ENV: &str = "PS_CONFIG_DIR";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8000;
const MIN_PORT: u16 = 1024;

const DEFAULT_DATABASE_DIR: &str = ".";
const DEFAULT_DATABASE_NAME: &str = "project_service";
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 30;

const DEFAULT_JWT_LEEWAY_SECS: u64 = 0;

const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_COLORED: bool = true;

const DEFAULT_REGISTRY_ENABLED: bool = true;
const DEFAULT_AGENT_URL: &str = "http://127.0.0.1:8500";
const DEFAULT_SERVICE_NAME: &str = "project-service";
const DEFAULT_CHECK_INTERVAL: &str = "10s";
const DEFAULT_CHECK_TIMEOUT: &str = "5s";
const DEFAULT_DEREGISTER_AFTER: &str = "1m";
const DEFAULT_AGENT_TIMEOUT_SECS: u64 = 5;

#[cfg(test)]
mod tests;
