//! Store adapter for the `projects` collection.
//!
//! ## Uniqueness
//!
//! Project creation checks for an existing name or slug with
//! `find_by_name_or_slug()` before calling `insert()`. The two calls are not
//! atomic, so the table also carries unique indexes on `name` and `slug`.
//! When a concurrent creation slips between the check and the insert, the
//! index rejects the second row and `insert()` reports `DbError::Duplicate`.

use crate::{DbError, DuplicateField, Result as DbErrorResult};

use ps_core::{NewProject, Project, ProjectId};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use sqlx::{FromRow, SqlitePool};

#[derive(Debug, FromRow)]
struct ProjectRow {
    id: String,
    name: String,
    description: String,
    slug: String,
}

impl TryFrom<ProjectRow> for Project {
    type Error = DbError;

    #[track_caller]
    fn try_from(row: ProjectRow) -> DbErrorResult<Self> {
        let id = ProjectId::from_str(&row.id).map_err(|e| DbError::CorruptRow {
            table: "projects",
            message: format!("Invalid id: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        Ok(Project {
            id,
            name: row.name,
            description: row.description,
            slug: row.slug,
        })
    }
}

#[derive(Clone)]
pub struct ProjectRepository {
    pool: SqlitePool,
}

impl ProjectRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Every project, in insertion order
    pub async fn list(&self) -> DbErrorResult<Vec<Project>> {
        let rows = sqlx::query_as::<_, ProjectRow>(
            r#"
                SELECT id, name, description, slug
                FROM projects
                ORDER BY rowid
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(Project::try_from).collect()
    }

    /// Existence check used before insert.
    ///
    /// One query covers both fields. If one project matches by name and a
    /// different one by slug, the name match is returned.
    pub async fn find_by_name_or_slug(
        &self,
        name: &str,
        slug: &str,
    ) -> DbErrorResult<Option<Project>> {
        let row = sqlx::query_as::<_, ProjectRow>(
            r#"
                SELECT id, name, description, slug
                FROM projects
                WHERE name = ?1 OR slug = ?2
                ORDER BY (name = ?1) DESC, rowid
                LIMIT 1
            "#,
        )
        .bind(name)
        .bind(slug)
        .fetch_optional(&self.pool)
        .await?;

        row.map(Project::try_from).transpose()
    }

    /// Persist a new project and return the identifier assigned to it
    pub async fn insert(&self, project: &NewProject) -> DbErrorResult<ProjectId> {
        let id = ProjectId::generate();

        sqlx::query(
            r#"
                INSERT INTO projects (id, name, description, slug)
                VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(id.to_string())
        .bind(&project.name)
        .bind(&project.description)
        .bind(&project.slug)
        .execute(&self.pool)
        .await
        .map_err(Self::map_unique_violation)?;

        Ok(id)
    }

    pub async fn find_by_id(&self, id: ProjectId) -> DbErrorResult<Option<Project>> {
        let row = sqlx::query_as::<_, ProjectRow>(
            r#"
                SELECT id, name, description, slug
                FROM projects
                WHERE id = ?
            "#,
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.map(Project::try_from).transpose()
    }

    /// Cheap round-trip used by the readiness probe
    pub async fn ping(&self) -> DbErrorResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    #[track_caller]
    fn map_unique_violation(e: sqlx::Error) -> DbError {
        let field = match &e {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                // SQLite reports "UNIQUE constraint failed: projects.<column>"
                if db_err.message().contains("projects.name") {
                    Some(DuplicateField::Name)
                } else if db_err.message().contains("projects.slug") {
                    Some(DuplicateField::Slug)
                } else {
                    None
                }
            }
            _ => None,
        };

        match field {
            Some(field) => DbError::Duplicate {
                field,
                location: ErrorLocation::from(Location::caller()),
            },
            None => DbError::from(e),
        }
    }
}
