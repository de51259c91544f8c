//! HTTP-level integration tests for the nested action resource and the
//! legacy `POST /projects/{id}` action-create alias.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, post_json, put_json};
use sqlx::SqlitePool;

/// Create a project over HTTP and return its id.
async fn seed_project(pool: &SqlitePool, name: &str) -> i64 {
    let app = common::build_test_app(pool.clone());
    let created = body_json(
        post_json(
            app,
            "/projects",
            serde_json::json!({"name": name, "description": "seed"}),
        )
        .await,
    )
    .await;
    created["id"].as_i64().unwrap()
}

/// Create an action under `project_id` over HTTP and return the body.
async fn seed_action(pool: &SqlitePool, project_id: i64, description: &str) -> serde_json::Value {
    let app = common::build_test_app(pool.clone());
    body_json(
        post_json(
            app,
            &format!("/projects/{project_id}/actions"),
            serde_json::json!({"description": description, "notes": "seed notes"}),
        )
        .await,
    )
    .await
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn create_action_takes_project_id_from_path(pool: SqlitePool) {
    let pid = seed_project(&pool, "Paint the house").await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        &format!("/projects/{pid}/actions"),
        serde_json::json!({"description": "Buy paint", "notes": "2 gallons"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert!(json["id"].is_number());
    assert_eq!(json["project_id"], pid);
    assert_eq!(json["description"], "Buy paint");
    assert_eq!(json["notes"], "2 gallons");
    assert_eq!(json["completed"], false);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_action_body_project_id_wins_over_path(pool: SqlitePool) {
    let first = seed_project(&pool, "First").await;
    let second = seed_project(&pool, "Second").await;

    let app = common::build_test_app(pool);
    let json = body_json(
        post_json(
            app,
            &format!("/projects/{first}/actions"),
            serde_json::json!({"description": "d", "notes": "n", "project_id": second}),
        )
        .await,
    )
    .await;
    assert_eq!(json["project_id"], second);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_action_missing_notes_returns_400(pool: SqlitePool) {
    let pid = seed_project(&pool, "Strict").await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        &format!("/projects/{pid}/actions"),
        serde_json::json!({"description": "No notes"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    // No trailing period on this one.
    assert_eq!(
        json["errorMessage"],
        "Please provide description and notes for the action"
    );
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_action_under_missing_project_returns_500(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/projects/999999/actions",
        serde_json::json!({"description": "Orphan", "notes": "n"}),
    )
    .await;

    // The foreign key rejects the insert; the store failure surfaces as 500.
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    assert_eq!(
        json["error"],
        "There was an error while saving the action to the database."
    );
}

// ---------------------------------------------------------------------------
// Read -- the parent segment never scopes lookups
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn list_actions_is_global_across_projects(pool: SqlitePool) {
    let first = seed_project(&pool, "First").await;
    let second = seed_project(&pool, "Second").await;
    seed_action(&pool, first, "a1").await;
    seed_action(&pool, second, "a2").await;

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/projects/{first}/actions")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 2);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn get_action_ignores_parent_segment(pool: SqlitePool) {
    let first = seed_project(&pool, "First").await;
    let second = seed_project(&pool, "Second").await;
    let action = seed_action(&pool, first, "belongs to first").await;
    let id = action["id"].as_i64().unwrap();

    // Fetching through the wrong parent still finds the action.
    let app = common::build_test_app(pool);
    let response = get(app, &format!("/projects/{second}/actions/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, action);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn get_missing_action_returns_400(pool: SqlitePool) {
    let pid = seed_project(&pool, "Empty").await;

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/projects/{pid}/actions/999999")).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(
        json["message"],
        "The action with the specified ID does not exist."
    );
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn update_action_replaces_fields(pool: SqlitePool) {
    let pid = seed_project(&pool, "Project").await;
    let action = seed_action(&pool, pid, "Old description").await;
    let id = action["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        &format!("/projects/{pid}/actions/{id}"),
        serde_json::json!({"description": "New description", "notes": "new notes"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["description"], "New description");
    assert_eq!(json["notes"], "new notes");
    assert_eq!(json["project_id"], pid);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn update_action_missing_fields_returns_400(pool: SqlitePool) {
    let pid = seed_project(&pool, "Project").await;
    let action = seed_action(&pool, pid, "Keep me").await;
    let id = action["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        &format!("/projects/{pid}/actions/{id}"),
        serde_json::json!({"notes": "only notes"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(
        json["message"],
        "The action with the specified ID does not exist."
    );
}

#[sqlx::test(migrations = "../db/migrations")]
async fn update_missing_action_returns_404(pool: SqlitePool) {
    let pid = seed_project(&pool, "Project").await;

    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        &format!("/projects/{pid}/actions/999999"),
        serde_json::json!({"description": "d", "notes": "n"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(
        json["errorMessage"],
        "Please provide description and notes for the action."
    );
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn delete_action_returns_count_then_404(pool: SqlitePool) {
    let pid = seed_project(&pool, "Project").await;
    let action = seed_action(&pool, pid, "Remove me").await;
    let id = action["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/projects/{pid}/actions/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, serde_json::json!(1));

    let app = common::build_test_app(pool);
    let response = delete(app, &format!("/projects/{pid}/actions/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(
        json["message"],
        "The action with the specified ID does not exist."
    );
}

// ---------------------------------------------------------------------------
// Legacy alias: POST /projects/{id}
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn legacy_alias_creates_action_when_project_has_actions(pool: SqlitePool) {
    let pid = seed_project(&pool, "Busy project").await;
    seed_action(&pool, pid, "existing").await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        &format!("/projects/{pid}"),
        serde_json::json!({"description": "via alias", "notes": "alias notes"}),
    )
    .await;

    // The alias answers 200, not 201.
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["project_id"], pid);
    assert_eq!(json["description"], "via alias");
}

// The alias inserts before it decides the response, so a project with no
// actions yet gets a 404 while the action still lands in the store.
#[sqlx::test(migrations = "../db/migrations")]
async fn legacy_alias_answers_404_but_still_inserts(pool: SqlitePool) {
    let pid = seed_project(&pool, "Quiet project").await;

    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        &format!("/projects/{pid}"),
        serde_json::json!({"description": "first action", "notes": "n"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(
        json["message"],
        "The action with this specified ID does not exist."
    );

    // The insert happened regardless of the 404.
    let app = common::build_test_app(pool);
    let actions = body_json(get(app, &format!("/projects/{pid}/actions")).await).await;
    assert_eq!(actions.as_array().unwrap().len(), 1);
    assert_eq!(actions[0]["description"], "first action");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn legacy_alias_on_missing_project_returns_404(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/projects/999999",
        serde_json::json!({"description": "d", "notes": "n"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
