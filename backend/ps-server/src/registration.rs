use ps_config::RegistryConfig;
use ps_registry::{AgentClient, RegistrationGuard, Result as RegistryResult, ServiceRegistration};

use log::{error, info};

/// Register this instance with the discovery agent.
///
/// Returns `None` when registration is disabled or fails; the server keeps
/// serving either way.
pub async fn register_service(
    config: &RegistryConfig,
    bind_host: &str,
    port: u16,
) -> Option<RegistrationGuard> {
    if !config.enabled {
        info!("Service registration disabled");
        return None;
    }

    let result: RegistryResult<RegistrationGuard> = async {
        let registration = ServiceRegistration::from_config(config, bind_host, port)?;
        let client = AgentClient::new(&config.agent_url, config.agent_timeout())?;
        RegistrationGuard::acquire(client, &registration).await
    }
    .await;

    match result {
        Ok(guard) => Some(guard),
        Err(e) => {
            error!("Service registration failed: {}", e);
            None
        }
    }
}
