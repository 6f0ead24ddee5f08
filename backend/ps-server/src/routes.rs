use crate::{
    AppState, create_project, get_project, health, list_projects,
    middleware::{require_admin, require_auth},
};

use axum::{
    Router,
    handler::Handler,
    middleware::{from_fn, from_fn_with_state},
    routing::get,
};
use tower_http::cors::{Any, CorsLayer};

pub const API_PREFIX: &str = "/api/v1";

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    let projects = project_routes(state.clone());

    Router::new()
        // Health check endpoints
        .route("/health", get(health::health))
        .route("/ready", get(health::readiness))
        // Project endpoints, bare and versioned
        .merge(projects.clone())
        .nest(API_PREFIX, projects)
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}

/// Every project route requires a verified token; creation additionally
/// requires the admin role. Auth runs first.
fn project_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            "/projects",
            get(list_projects).post(create_project.layer(from_fn(require_admin))),
        )
        .route("/project/{id}", get(get_project))
        .route_layer(from_fn_with_state(state, require_auth))
}
