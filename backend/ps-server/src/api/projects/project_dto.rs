use ps_core::Project;

use serde::Serialize;

/// Project as returned to clients; the id is always a string
#[derive(Debug, Serialize)]
pub struct ProjectDto {
    pub id: String,
    pub name: String,
    pub description: String,
    pub slug: String,
}

impl From<Project> for ProjectDto {
    fn from(p: Project) -> Self {
        Self {
            id: p.id.to_string(),
            name: p.name,
            description: p.description,
            slug: p.slug,
        }
    }
}
