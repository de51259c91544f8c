//! Route definitions for the `/projects` resource.
//!
//! Also nests the action routes under `/projects/{project_id}/actions`.

use axum::routing::get;
use axum::Router;

use crate::handlers::project;
use crate::routes::action;
use crate::state::AppState;

/// Routes mounted at `/projects`.
///
/// ```text
/// GET    /                          -> list
/// POST   /                          -> create
/// GET    /{id}                      -> get_by_id
/// PUT    /{id}                      -> update
/// DELETE /{id}                      -> delete
/// POST   /{id}                      -> create_action (legacy alias)
///
/// GET    /{project_id}/actions      -> action list
/// POST   /{project_id}/actions      -> action create
/// GET    /{project_id}/actions/{id} -> action get_by_id
/// PUT    /{project_id}/actions/{id} -> action update
/// DELETE /{project_id}/actions/{id} -> action delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(project::list).post(project::create))
        .route(
            "/{id}",
            get(project::get_by_id)
                .put(project::update)
                .delete(project::delete)
                .post(project::create_action),
        )
        .nest("/{project_id}/actions", action::router())
}
