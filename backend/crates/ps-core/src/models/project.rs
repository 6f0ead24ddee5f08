//! Project document - the only resource this service exposes.

use crate::ProjectId;

use serde::{Deserialize, Serialize};

/// A persisted project.
///
/// `name` and `slug` are each unique across all projects. Neither changes
/// after creation; there is no update path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub name: String,
    /// Empty string when the creator supplied none
    pub description: String,
    /// Derived from `name` at creation time
    pub slug: String,
}
