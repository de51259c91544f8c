//! Action entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::DbId;

/// An action row from the `actions` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Action {
    pub id: DbId,
    pub project_id: DbId,
    pub description: String,
    pub notes: String,
    pub completed: bool,
}

/// DTO for creating a new action.
///
/// `description` and `notes` are `Option` so a missing field reaches the
/// handler's presence check instead of being rejected at deserialization.
/// `project_id` may be omitted when the route already carries the parent id.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAction {
    pub project_id: Option<DbId>,
    pub description: Option<String>,
    pub notes: Option<String>,
    /// Defaults to `false` if omitted.
    pub completed: Option<bool>,
}

/// DTO for updating an existing action. `description` and `notes` are
/// required by the handler; `completed` keeps its stored value if omitted.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateAction {
    pub description: Option<String>,
    pub notes: Option<String>,
    pub completed: Option<bool>,
}
