use crate::{ApiError, ApiResult, api::error::NAME_REQUIRED};

use ps_core::NewProject;

use axum::{Json, extract::rejection::JsonRejection};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateProjectRequest {
    /// Project name (required, non-empty)
    #[serde(default)]
    pub name: Option<String>,

    /// Optional description, stored as "" when absent
    #[serde(default)]
    pub description: Option<String>,
}

impl CreateProjectRequest {
    /// Turn the raw body into a validated project.
    ///
    /// Any body that cannot yield a non-empty string `name` is answered
    /// with the same "Name is required" error.
    pub fn into_new_project(
        payload: Result<Json<CreateProjectRequest>, JsonRejection>,
    ) -> ApiResult<NewProject> {
        let Json(request) = payload.map_err(|rejection| {
            log::debug!("Rejected create-project body: {}", rejection);
            ApiError::validation(NAME_REQUIRED)
        })?;

        let name = request.name.unwrap_or_default();
        Ok(NewProject::new(name, request.description)?)
    }
}
