pub mod connection;
pub mod error;
pub mod repositories;

pub use connection::{MIGRATOR, connect, connect_in_memory};
pub use error::{DbError, DuplicateField, Result};
pub use repositories::project_repository::ProjectRepository;
