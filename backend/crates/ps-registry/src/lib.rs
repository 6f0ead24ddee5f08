//! Service-discovery registration against a Consul-compatible agent.
//!
//! The server registers itself once its listener is bound and deregisters
//! on shutdown. Nothing here retries: a failed call is reported to the
//! caller, which logs it and carries on serving.

mod agent_client;
mod error;
mod registration;
mod registration_guard;

pub use agent_client::AgentClient;
pub use error::{RegistryError, Result};
pub use registration::{HealthCheck, ServiceRegistration};
pub use registration_guard::RegistrationGuard;
