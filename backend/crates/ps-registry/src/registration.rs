use crate::Result;

use ps_config::RegistryConfig;

use serde::Serialize;

/// Body of the agent's service-register call.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ServiceRegistration {
    #[serde(rename = "ID")]
    pub id: String,
    pub name: String,
    pub address: String,
    pub port: u16,
    pub tags: Vec<String>,
    pub check: HealthCheck,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct HealthCheck {
    #[serde(rename = "HTTP")]
    pub http: String,
    pub interval: String,
    pub timeout: String,
    pub deregister_critical_service_after: String,
}

impl ServiceRegistration {
    /// Build the record for an instance listening on `bind_host:port`.
    pub fn from_config(config: &RegistryConfig, bind_host: &str, port: u16) -> Result<Self> {
        let address = config.advertised_address(bind_host);
        let id = config.service_id(&address, port);

        let check = HealthCheck {
            http: format!("http://{address}:{port}/health"),
            interval: humantime::format_duration(config.check_interval()?).to_string(),
            timeout: humantime::format_duration(config.check_timeout()?).to_string(),
            deregister_critical_service_after: humantime::format_duration(
                config.deregister_after()?,
            )
            .to_string(),
        };

        let mut tags = config.tags.clone();
        tags.extend(routing_tags(&config.service_name, port));

        Ok(Self {
            id,
            name: config.service_name.clone(),
            address,
            port,
            tags,
            check,
        })
    }
}

/// Reverse-proxy tags routing the public project paths to this service.
fn routing_tags(service_name: &str, port: u16) -> Vec<String> {
    vec![
        String::from("traefik.enable=true"),
        format!(
            "traefik.http.routers.{service_name}.rule=PathPrefix(`/projects`) || PathPrefix(`/project`) || PathPrefix(`/api/v1`)"
        ),
        format!("traefik.http.services.{service_name}.loadbalancer.server.port={port}"),
    ]
}
