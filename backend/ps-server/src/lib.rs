pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod middleware;
pub mod registration;
pub mod routes;
pub mod shutdown;

#[cfg(test)]
mod tests;

pub use api::{
    error::ApiError,
    error::Result as ApiResult,
    extractors::verified_claims::VerifiedClaims,
    projects::{
        create_project_request::CreateProjectRequest,
        project_dto::ProjectDto,
        projects::{create_project, get_project, list_projects},
    },
};
pub use app_state::AppState;
pub use registration::register_service;
pub use routes::build_router;
pub use shutdown::{ShutdownCoordinator, ShutdownGuard};
