//! Repository for the `projects` table.

use crate::models::action::Action;
use crate::models::project::{CreateProject, Project, UpdateProject};
use crate::{DbId, DbPool};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, description, completed";

/// Provides CRUD operations for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project, returning the created row.
    ///
    /// If `completed` is `None` in the input, defaults to `false`.
    pub async fn create(pool: &DbPool, input: &CreateProject) -> Result<Project, sqlx::Error> {
        let query = format!(
            "INSERT INTO projects (name, description, completed)
             VALUES (?, ?, COALESCE(?, 0))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.completed)
            .fetch_one(pool)
            .await
    }

    /// Find a project by its internal ID.
    pub async fn find_by_id(pool: &DbPool, id: DbId) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = ?");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all projects in insertion order.
    pub async fn list(pool: &DbPool) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects ORDER BY id");
        sqlx::query_as::<_, Project>(&query).fetch_all(pool).await
    }

    /// Replace a project's fields. `completed` keeps its stored value when
    /// `None`.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &DbPool,
        id: DbId,
        input: &UpdateProject,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!(
            "UPDATE projects SET
                name = ?,
                description = ?,
                completed = COALESCE(?, completed)
             WHERE id = ?
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.completed)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a project by ID, returning the number of rows removed.
    pub async fn delete(pool: &DbPool, id: DbId) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM projects WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }

    /// List the actions belonging to one project.
    pub async fn project_actions(
        pool: &DbPool,
        project_id: DbId,
    ) -> Result<Vec<Action>, sqlx::Error> {
        sqlx::query_as::<_, Action>(
            "SELECT id, project_id, description, notes, completed
             FROM actions WHERE project_id = ? ORDER BY id",
        )
        .bind(project_id)
        .fetch_all(pool)
        .await
    }
}
