use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_AGENT_TIMEOUT_SECS, DEFAULT_AGENT_URL,
    DEFAULT_CHECK_INTERVAL, DEFAULT_CHECK_TIMEOUT, DEFAULT_DEREGISTER_AFTER,
    DEFAULT_REGISTRY_ENABLED, DEFAULT_SERVICE_NAME,
};

use std::time::Duration;

use serde::Deserialize;

const WILDCARD_HOSTS: [&str; 2] = ["0.0.0.0", "::"];
const LOOPBACK_ADDRESS: &str = "127.0.0.1";

/// Service-discovery agent settings.
///
/// Durations are humantime strings ("10s", "1m") because the agent takes
/// them in that form on the wire.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    pub enabled: bool,
    pub agent_url: String,
    pub service_name: String,
    /// Defaults to `<service_name>-<address>-<port>`
    pub service_id: Option<String>,
    /// Address advertised to the agent. Defaults to the bind host, or
    /// loopback when binding a wildcard address.
    pub address: Option<String>,
    pub tags: Vec<String>,
    pub check_interval: String,
    pub check_timeout: String,
    pub deregister_after: String,
    pub agent_timeout_secs: u64,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            enabled: DEFAULT_REGISTRY_ENABLED,
            agent_url: String::from(DEFAULT_AGENT_URL),
            service_name: String::from(DEFAULT_SERVICE_NAME),
            service_id: None,
            address: None,
            tags: Vec::new(),
            check_interval: String::from(DEFAULT_CHECK_INTERVAL),
            check_timeout: String::from(DEFAULT_CHECK_TIMEOUT),
            deregister_after: String::from(DEFAULT_DEREGISTER_AFTER),
            agent_timeout_secs: DEFAULT_AGENT_TIMEOUT_SECS,
        }
    }
}

impl RegistryConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !self.enabled {
            return Ok(());
        }

        if !self.agent_url.starts_with("http://") && !self.agent_url.starts_with("https://") {
            return Err(ConfigError::registry(format!(
                "registry.agent_url must be an http(s) URL, got '{}'",
                self.agent_url
            )));
        }

        if self.service_name.trim().is_empty() {
            return Err(ConfigError::registry("registry.service_name cannot be empty"));
        }

        if self.agent_timeout_secs == 0 {
            return Err(ConfigError::registry(
                "registry.agent_timeout_secs must be greater than 0",
            ));
        }

        Self::parse_duration("registry.check_interval", &self.check_interval)?;
        Self::parse_duration("registry.check_timeout", &self.check_timeout)?;
        Self::parse_duration("registry.deregister_after", &self.deregister_after)?;

        Ok(())
    }

    pub fn check_interval(&self) -> ConfigErrorResult<Duration> {
        Self::parse_duration("registry.check_interval", &self.check_interval)
    }

    pub fn check_timeout(&self) -> ConfigErrorResult<Duration> {
        Self::parse_duration("registry.check_timeout", &self.check_timeout)
    }

    pub fn deregister_after(&self) -> ConfigErrorResult<Duration> {
        Self::parse_duration("registry.deregister_after", &self.deregister_after)
    }

    pub fn agent_timeout(&self) -> Duration {
        Duration::from_secs(self.agent_timeout_secs)
    }

    /// Address other services should use to reach this instance.
    pub fn advertised_address(&self, bind_host: &str) -> String {
        match &self.address {
            Some(address) => address.clone(),
            None if WILDCARD_HOSTS.contains(&bind_host) => String::from(LOOPBACK_ADDRESS),
            None => bind_host.to_string(),
        }
    }

    pub fn service_id(&self, address: &str, port: u16) -> String {
        self.service_id
            .clone()
            .unwrap_or_else(|| format!("{}-{}-{}", self.service_name, address, port))
    }

    fn parse_duration(field: &str, value: &str) -> ConfigErrorResult<Duration> {
        humantime::parse_duration(value).map_err(|e| {
            ConfigError::registry(format!("{field} is not a valid duration '{value}': {e}"))
        })
    }
}
