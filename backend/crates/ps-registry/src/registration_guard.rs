use crate::{AgentClient, Result, ServiceRegistration};

use log::{error, info, warn};
use tokio::runtime::Handle;

/// Keeps an instance registered for as long as it is held.
///
/// Call [`release`](Self::release) after the server has drained. A guard
/// dropped without release spawns a deregistration on the current runtime
/// if one is still running.
#[derive(Debug)]
pub struct RegistrationGuard {
    client: AgentClient,
    service_id: String,
    released: bool,
}

impl RegistrationGuard {
    pub async fn acquire(client: AgentClient, registration: &ServiceRegistration) -> Result<Self> {
        client.register(registration).await?;

        info!(
            "Registered '{}' at {}:{} with {}",
            registration.id,
            registration.address,
            registration.port,
            client.base_url()
        );

        Ok(Self {
            client,
            service_id: registration.id.clone(),
            released: false,
        })
    }

    pub fn service_id(&self) -> &str {
        &self.service_id
    }

    pub async fn release(mut self) -> Result<()> {
        self.released = true;
        self.client.deregister(&self.service_id).await?;
        info!("Deregistered '{}'", self.service_id);
        Ok(())
    }
}

impl Drop for RegistrationGuard {
    fn drop(&mut self) {
        if self.released {
            return;
        }

        let Ok(handle) = Handle::try_current() else {
            warn!(
                "Registration '{}' dropped outside a runtime; the agent will expire it",
                self.service_id
            );
            return;
        };

        let client = self.client.clone();
        let service_id = std::mem::take(&mut self.service_id);
        handle.spawn(async move {
            match client.deregister(&service_id).await {
                Ok(()) => info!("Deregistered '{}'", service_id),
                Err(e) => error!("Failed to deregister '{}': {}", service_id, e),
            }
        });
    }
}
