use crate::{CoreError, ErrorLocation, Project, ProjectId, Result as CoreErrorResult, slugify};

use std::panic::Location;

/// A project that has passed validation but has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProject {
    pub name: String,
    pub description: String,
    pub slug: String,
}

impl NewProject {
    /// Validate the name and derive the slug.
    ///
    /// An empty name is rejected; the slug is never computed for it.
    #[track_caller]
    pub fn new(name: impl Into<String>, description: Option<String>) -> CoreErrorResult<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(CoreError::Validation {
                message: "Name is required".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let slug = slugify(&name);

        Ok(Self {
            name,
            description: description.unwrap_or_default(),
            slug,
        })
    }

    /// Attach the identifier the store assigned on insert
    pub fn into_project(self, id: ProjectId) -> Project {
        Project {
            id,
            name: self.name,
            description: self.description,
            slug: self.slug,
        }
    }
}
