use crate::{
    AuthConfig, CONFIG_DIR_ENV, CONFIG_FILENAME, ConfigError, ConfigErrorResult, DatabaseConfig,
    LoggingConfig, RegistryConfig, ServerConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub logging: LoggingConfig,
    pub registry: RegistryConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for PS_CONFIG_DIR env var, else use the working directory
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply PS_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Priority: PS_CONFIG_DIR env var > working directory
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.database.validate()?;
        self.auth.validate()?;
        self.registry.validate()?;

        Ok(())
    }

    /// Database file path. Relative `database.dir` values resolve against the
    /// config directory.
    pub fn database_path(&self) -> ConfigErrorResult<PathBuf> {
        let path = self.database.path();
        if path.is_absolute() {
            return Ok(path);
        }

        Ok(Self::config_dir()?.join(path))
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  server: {}:{}", self.server.host, self.server.port);
        info!(
            "  database: {} (connect timeout {}s)",
            self.database.path().display(),
            self.database.connect_timeout_secs
        );
        info!(
            "  auth: HS256 (secret {}, leeway {}s)",
            if self.auth.jwt_secret.is_some() {
                "set"
            } else {
                "missing"
            },
            self.auth.leeway_secs
        );
        info!(
            "  logging: {} (colored: {})",
            *self.logging.level, self.logging.colored
        );

        if self.registry.enabled {
            info!(
                "  registry: {} as '{}' (check every {}, timeout {})",
                self.registry.agent_url,
                self.registry.service_name,
                self.registry.check_interval,
                self.registry.check_timeout
            );
        } else {
            info!("  registry: disabled");
        }
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("PS_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("PS_SERVER_PORT", &mut self.server.port);

        // Database
        Self::apply_env_string("PS_DATABASE_DIR", &mut self.database.dir);
        Self::apply_env_string("PS_DATABASE_NAME", &mut self.database.name);
        Self::apply_env_parse(
            "PS_DATABASE_CONNECT_TIMEOUT_SECS",
            &mut self.database.connect_timeout_secs,
        );

        // Auth
        Self::apply_env_option_string("PS_AUTH_JWT_SECRET", &mut self.auth.jwt_secret);
        Self::apply_env_parse("PS_AUTH_LEEWAY_SECS", &mut self.auth.leeway_secs);

        // Logging
        Self::apply_env_parse("PS_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("PS_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("PS_LOG_FILE", &mut self.logging.file);

        // Registry
        Self::apply_env_bool("PS_REGISTRY_ENABLED", &mut self.registry.enabled);
        Self::apply_env_string("PS_REGISTRY_AGENT_URL", &mut self.registry.agent_url);
        Self::apply_env_string("PS_REGISTRY_SERVICE_NAME", &mut self.registry.service_name);
        Self::apply_env_option_string("PS_REGISTRY_SERVICE_ID", &mut self.registry.service_id);
        Self::apply_env_option_string("PS_REGISTRY_ADDRESS", &mut self.registry.address);
        Self::apply_env_list("PS_REGISTRY_TAGS", &mut self.registry.tags);
        Self::apply_env_string(
            "PS_REGISTRY_CHECK_INTERVAL",
            &mut self.registry.check_interval,
        );
        Self::apply_env_string("PS_REGISTRY_CHECK_TIMEOUT", &mut self.registry.check_timeout);
        Self::apply_env_string(
            "PS_REGISTRY_DEREGISTER_AFTER",
            &mut self.registry.deregister_after,
        );
        Self::apply_env_parse(
            "PS_REGISTRY_AGENT_TIMEOUT_SECS",
            &mut self.registry.agent_timeout_secs,
        );
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }

    /// Helper: Comma-separated list, blank entries dropped
    fn apply_env_list(var_name: &str, target: &mut Vec<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect();
        }
    }
}
