pub mod health;
pub mod project;
pub mod task;

use axum::Router;

use crate::state::AppState;

/// Build the API route tree.
///
/// Route hierarchy:
///
/// ```text
/// /projects                                  list, create
/// /projects/{id}                             get, update, delete
/// /projects/{id}/tasks                       tasks of one project
/// /projects/sort/{startDate|endDate|priority|status}
/// /projects/filter/{startDate|endDate|countOfTasks|status}
///
/// /tasks                                     list, create
/// /tasks/{id}                                get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/projects", project::router())
        .nest("/tasks", task::router())
}
