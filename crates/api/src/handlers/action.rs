//! Handlers for the `/projects/{project_id}/actions` resource.
//!
//! The parent path segment is syntactic only: reads and the list operation
//! resolve actions through the global collection, never scoped to the
//! project. Only create uses the segment, as a fallback `project_id`.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use taskpad_db::models::action::{Action, CreateAction, UpdateAction};
use taskpad_db::repositories::ActionRepo;
use taskpad_db::DbId;

use crate::error::{AppError, AppResult};
use crate::handlers::is_blank;
use crate::state::AppState;

const MISSING_ACTION: &str = "The action with the specified ID does not exist.";
const PROVIDE_FIELDS: &str = "Please provide description and notes for the action.";

/// GET /projects/{project_id}/actions
///
/// Lists every action in the store, regardless of parent.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Action>>> {
    let actions = ActionRepo::list(&state.pool)
        .await
        .map_err(AppError::store("message", "Error retrieving the actions."))?;
    Ok(Json(actions))
}

/// GET /projects/{project_id}/actions/{id}
///
/// Global lookup by `{id}`; a missing record answers 400, not 404.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path((_project_id, id)): Path<(DbId, DbId)>,
) -> AppResult<Json<Action>> {
    let action = ActionRepo::find_by_id(&state.pool, id)
        .await
        .map_err(AppError::store(
            "error",
            "The action information could not be retrieved.",
        ))?
        .ok_or(AppError::no_match(
            StatusCode::BAD_REQUEST,
            "message",
            MISSING_ACTION,
        ))?;
    Ok(Json(action))
}

/// POST /projects/{project_id}/actions
///
/// `project_id` may be set in the body; otherwise the path segment is used.
pub async fn create(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
    Json(input): Json<CreateAction>,
) -> AppResult<(StatusCode, Json<Action>)> {
    if is_blank(&input.description) || is_blank(&input.notes) {
        // No trailing period; the contract fixes the exact text.
        return Err(AppError::validation(
            "errorMessage",
            "Please provide description and notes for the action",
        ));
    }

    let action = CreateAction {
        project_id: input.project_id.or(Some(project_id)),
        ..input
    };
    let action = ActionRepo::create(&state.pool, &action)
        .await
        .map_err(AppError::store(
            "error",
            "There was an error while saving the action to the database.",
        ))?;
    Ok((StatusCode::CREATED, Json(action)))
}

/// PUT /projects/{project_id}/actions/{id}
///
/// The validation and not-found bodies are swapped relative to POST; both
/// texts and field names are part of the compatibility contract.
pub async fn update(
    State(state): State<AppState>,
    Path((_project_id, id)): Path<(DbId, DbId)>,
    Json(input): Json<UpdateAction>,
) -> AppResult<Json<Action>> {
    if is_blank(&input.description) || is_blank(&input.notes) {
        return Err(AppError::validation("message", MISSING_ACTION));
    }

    let action = ActionRepo::update(&state.pool, id, &input)
        .await
        .map_err(AppError::store(
            "error",
            "The action information could not be modified.",
        ))?
        .ok_or(AppError::no_match(
            StatusCode::NOT_FOUND,
            "errorMessage",
            PROVIDE_FIELDS,
        ))?;
    Ok(Json(action))
}

/// DELETE /projects/{project_id}/actions/{id}
///
/// Success body is the bare deleted-row count.
pub async fn delete(
    State(state): State<AppState>,
    Path((_project_id, id)): Path<(DbId, DbId)>,
) -> AppResult<Json<u64>> {
    let gone = ActionRepo::delete(&state.pool, id)
        .await
        .map_err(AppError::store(
            "message",
            "The action could not be removed.",
        ))?;
    if gone > 0 {
        Ok(Json(gone))
    } else {
        Err(AppError::no_match(
            StatusCode::NOT_FOUND,
            "message",
            MISSING_ACTION,
        ))
    }
}
