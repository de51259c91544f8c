pub mod action;
pub mod health;
pub mod project;

use axum::Router;

use crate::state::AppState;

/// Build the resource route tree, mounted at the server root.
///
/// ```text
/// /projects                                   list, create
/// /projects/{id}                              get, update, delete,
///                                             legacy nested-action create (POST)
/// /projects/{project_id}/actions              list, create
/// /projects/{project_id}/actions/{id}         get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/projects", project::router())
}
