//! Handlers for the `/projects` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use taskpad_db::models::action::{Action, CreateAction};
use taskpad_db::models::project::{CreateProject, Project, UpdateProject};
use taskpad_db::repositories::{ActionRepo, ProjectRepo};
use taskpad_db::DbId;

use crate::error::{AppError, AppResult};
use crate::handlers::is_blank;
use crate::state::AppState;

const MISSING_PROJECT: &str = "The project with the specified ID does not exist.";
const PROVIDE_FIELDS: &str = "Please provide name and description for the project.";

/// GET /projects
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Project>>> {
    let projects = ProjectRepo::list(&state.pool)
        .await
        .map_err(AppError::store("message", "Error retrieving the projects."))?;
    Ok(Json(projects))
}

/// GET /projects/{id}
///
/// A missing record answers 400, not 404; clients depend on the status.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Project>> {
    let project = ProjectRepo::find_by_id(&state.pool, id)
        .await
        .map_err(AppError::store(
            "error",
            "The project information could not be retrieved.",
        ))?
        .ok_or(AppError::no_match(
            StatusCode::BAD_REQUEST,
            "message",
            MISSING_PROJECT,
        ))?;
    Ok(Json(project))
}

/// POST /projects
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateProject>,
) -> AppResult<(StatusCode, Json<Project>)> {
    if is_blank(&input.name) || is_blank(&input.description) {
        return Err(AppError::validation("errorMessage", PROVIDE_FIELDS));
    }

    let project = ProjectRepo::create(&state.pool, &input)
        .await
        .map_err(AppError::store(
            "error",
            "There was an error while saving the project to the database, try again.",
        ))?;
    Ok((StatusCode::CREATED, Json(project)))
}

/// POST /projects/{id} -- legacy alias for creating an action under a project.
///
/// Historical behaviour, kept verbatim: no body validation ever fires, the
/// insert is not gated on the parent lookup, and an empty lookup answers 404
/// even when the insert went through. The lookup result only picks the
/// response.
pub async fn create_action(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<CreateAction>,
) -> AppResult<(StatusCode, Json<Action>)> {
    let add_action = CreateAction {
        project_id: Some(id),
        ..input
    };

    let existing = ProjectRepo::project_actions(&state.pool, id)
        .await
        .map_err(AppError::store(
            "error",
            "There was an error while saving the action to the database.",
        ))?;

    let inserted = ActionRepo::create(&state.pool, &add_action).await;

    if existing.is_empty() {
        return Err(AppError::no_match(
            StatusCode::NOT_FOUND,
            "message",
            "The action with this specified ID does not exist.",
        ));
    }

    let action = inserted.map_err(AppError::store(
        "error",
        "There was an error while saving the action to the database.",
    ))?;
    Ok((StatusCode::OK, Json(action)))
}

/// PUT /projects/{id}
///
/// The validation and not-found bodies are swapped relative to POST; both
/// texts and field names are part of the compatibility contract.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateProject>,
) -> AppResult<Json<Project>> {
    if is_blank(&input.name) || is_blank(&input.description) {
        return Err(AppError::validation("message", MISSING_PROJECT));
    }

    let project = ProjectRepo::update(&state.pool, id, &input)
        .await
        .map_err(AppError::store(
            "error",
            "The project information could not be modified.",
        ))?
        .ok_or(AppError::no_match(
            StatusCode::NOT_FOUND,
            "errorMessage",
            PROVIDE_FIELDS,
        ))?;
    Ok(Json(project))
}

/// DELETE /projects/{id}
///
/// Success body is the bare deleted-row count.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<u64>> {
    let gone = ProjectRepo::delete(&state.pool, id)
        .await
        .map_err(AppError::store(
            "message",
            "The project could not be removed.",
        ))?;
    if gone > 0 {
        Ok(Json(gone))
    } else {
        Err(AppError::no_match(
            StatusCode::NOT_FOUND,
            "message",
            MISSING_PROJECT,
        ))
    }
}
