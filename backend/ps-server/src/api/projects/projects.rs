//! Project REST API handlers
//!
//! All three sit behind `require_auth`; `create_project` also behind
//! `require_admin`.

use crate::{
    ApiError, ApiResult, AppState, CreateProjectRequest, ProjectDto, VerifiedClaims,
    api::error::{INVALID_PROJECT_ID, NAME_TAKEN, PROJECT_NOT_FOUND, SLUG_TAKEN},
};

use ps_core::ProjectId;
use ps_db::ProjectRepository;

use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
};
use log::info;

// =============================================================================
// Handlers
// =============================================================================

/// GET /projects
///
/// List all projects
pub async fn list_projects(State(state): State<AppState>) -> ApiResult<Json<Vec<ProjectDto>>> {
    let repo = ProjectRepository::new(state.pool.clone());
    let projects = repo.list().await?;

    Ok(Json(projects.into_iter().map(ProjectDto::from).collect()))
}

/// POST /projects
///
/// Create a project. The name/slug check and the insert are not atomic;
/// the store's unique indexes catch a concurrent duplicate.
pub async fn create_project(
    State(state): State<AppState>,
    claims: VerifiedClaims,
    payload: Result<Json<CreateProjectRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<ProjectDto>)> {
    let new_project = CreateProjectRequest::into_new_project(payload)?;

    let repo = ProjectRepository::new(state.pool.clone());

    let existing = repo
        .find_by_name_or_slug(&new_project.name, &new_project.slug)
        .await
        .map_err(ApiError::creation_failed)?;

    if let Some(existing) = existing {
        return Err(if existing.name == new_project.name {
            ApiError::conflict(NAME_TAKEN)
        } else {
            ApiError::conflict(SLUG_TAKEN)
        });
    }

    let id = repo
        .insert(&new_project)
        .await
        .map_err(ApiError::creation_failed)?;

    info!(
        "Project '{}' ({}) created by {}",
        new_project.slug,
        id,
        claims.caller()
    );

    Ok((
        StatusCode::CREATED,
        Json(new_project.into_project(id).into()),
    ))
}

/// GET /project/{id}
///
/// Get a single project by ID. A path segment that does not even decode
/// to UTF-8 is as malformed as one that is not a UUID.
pub async fn get_project(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
) -> ApiResult<Json<ProjectDto>> {
    let Path(id) = id.map_err(|rejection| {
        log::debug!("Rejected project id: {}", rejection);
        ApiError::validation(INVALID_PROJECT_ID)
    })?;
    let project_id: ProjectId = id.parse()?;

    let repo = ProjectRepository::new(state.pool.clone());
    let project = repo
        .find_by_id(project_id)
        .await?
        .ok_or_else(|| ApiError::not_found(PROJECT_NOT_FOUND))?;

    Ok(Json(project.into()))
}
