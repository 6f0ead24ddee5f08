use crate::{RegistryError, Result, ServiceRegistration};

use std::time::Duration;

use log::debug;
use reqwest::{Client as ReqwestClient, Method, RequestBuilder, Response};

const REGISTER_PATH: &str = "/v1/agent/service/register";
const DEREGISTER_PATH: &str = "/v1/agent/service/deregister";

/// HTTP client for the discovery agent's service endpoints
#[derive(Debug, Clone)]
pub struct AgentClient {
    base_url: String,
    client: ReqwestClient,
}

impl AgentClient {
    /// # Arguments
    /// * `base_url` - Agent URL (e.g., "http://127.0.0.1:8500")
    /// * `timeout` - Per-request timeout
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = ReqwestClient::builder().timeout(timeout).build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn register(&self, registration: &ServiceRegistration) -> Result<()> {
        debug!("Registering '{}' with {}", registration.id, self.base_url);

        let req = self.request(REGISTER_PATH).json(registration);
        let response = req.send().await?;
        Self::check("register", response).await
    }

    pub async fn deregister(&self, service_id: &str) -> Result<()> {
        debug!("Deregistering '{}' from {}", service_id, self.base_url);

        let req = self.request(&format!("{DEREGISTER_PATH}/{service_id}"));
        let response = req.send().await?;
        Self::check("deregister", response).await
    }

    fn request(&self, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client.request(Method::PUT, &url)
    }

    async fn check(operation: &'static str, response: Response) -> Result<()> {
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        Err(RegistryError::rejected(operation, status.as_u16(), body))
    }
}
