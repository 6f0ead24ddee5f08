pub mod error;
pub mod models;
pub mod slug;

pub use error::{CoreError, Result};
pub use error_location::ErrorLocation;
pub use models::new_project::NewProject;
pub use models::project::Project;
pub use models::project_id::ProjectId;
pub use slug::slugify;
