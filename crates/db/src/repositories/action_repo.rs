//! Repository for the `actions` table.

use crate::models::action::{Action, CreateAction, UpdateAction};
use crate::{DbId, DbPool};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, project_id, description, notes, completed";

/// Provides CRUD operations for actions.
pub struct ActionRepo;

impl ActionRepo {
    /// Insert a new action, returning the created row.
    ///
    /// Callers must have resolved `project_id` to `Some`; the schema rejects
    /// a NULL parent. If `completed` is `None`, defaults to `false`.
    pub async fn create(pool: &DbPool, input: &CreateAction) -> Result<Action, sqlx::Error> {
        let query = format!(
            "INSERT INTO actions (project_id, description, notes, completed)
             VALUES (?, ?, ?, COALESCE(?, 0))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Action>(&query)
            .bind(input.project_id)
            .bind(&input.description)
            .bind(&input.notes)
            .bind(input.completed)
            .fetch_one(pool)
            .await
    }

    /// Find an action by its internal ID. The lookup is global, never scoped
    /// to a parent project.
    pub async fn find_by_id(pool: &DbPool, id: DbId) -> Result<Option<Action>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM actions WHERE id = ?");
        sqlx::query_as::<_, Action>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all actions across every project, in insertion order.
    pub async fn list(pool: &DbPool) -> Result<Vec<Action>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM actions ORDER BY id");
        sqlx::query_as::<_, Action>(&query).fetch_all(pool).await
    }

    /// Replace an action's fields. `completed` keeps its stored value when
    /// `None`.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &DbPool,
        id: DbId,
        input: &UpdateAction,
    ) -> Result<Option<Action>, sqlx::Error> {
        let query = format!(
            "UPDATE actions SET
                description = ?,
                notes = ?,
                completed = COALESCE(?, completed)
             WHERE id = ?
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Action>(&query)
            .bind(&input.description)
            .bind(&input.notes)
            .bind(input.completed)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Delete an action by ID, returning the number of rows removed.
    pub async fn delete(pool: &DbPool, id: DbId) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM actions WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}
