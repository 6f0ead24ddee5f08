#![allow(dead_code)]

use ps_core::NewProject;

use sqlx::SqlitePool;

/// Creates an in-memory SQLite pool with migrations run
pub async fn create_test_pool() -> SqlitePool {
    ps_db::connect_in_memory()
        .await
        .expect("Failed to create test pool")
}

pub fn new_project(name: &str) -> NewProject {
    NewProject::new(name, Some(format!("{} description", name))).expect("valid project name")
}
