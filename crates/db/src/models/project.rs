//! Project entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::DbId;

/// A project row from the `projects` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Project {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub completed: bool,
}

/// DTO for creating a new project.
///
/// `name` and `description` are `Option` so a missing field reaches the
/// handler's presence check instead of being rejected at deserialization.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProject {
    pub name: Option<String>,
    pub description: Option<String>,
    /// Defaults to `false` if omitted.
    pub completed: Option<bool>,
}

/// DTO for updating an existing project. `name` and `description` are
/// required by the handler; `completed` keeps its stored value if omitted.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateProject {
    pub name: Option<String>,
    pub description: Option<String>,
    pub completed: Option<bool>,
}
