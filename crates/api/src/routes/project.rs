//! Route definitions for the `/projects` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::{project, project_query, task};
use crate::state::AppState;

/// Routes mounted at `/projects`.
///
/// ```text
/// GET    /                          -> list
/// POST   /                          -> create
/// GET    /{id}                      -> get_by_id
/// PUT    /{id}                      -> update
/// DELETE /{id}                      -> delete
/// GET    /{id}/tasks                -> task::list_by_project
///
/// GET    /sort/startDate            -> sort_by_start_date
/// GET    /sort/endDate              -> sort_by_end_date
/// GET    /sort/priority             -> sort_by_priority
/// GET    /sort/status               -> sort_by_status
/// GET    /filter/startDate          -> filter_by_start_date   ?dateAfter=
/// GET    /filter/endDate            -> filter_by_end_date     ?dateBefore=
/// GET    /filter/countOfTasks       -> filter_by_task_count   ?start=&end=
/// GET    /filter/status             -> filter_by_status       ?status=
/// ```
pub fn router() -> Router<AppState> {
    let sort_routes = Router::new()
        .route("/startDate", get(project_query::sort_by_start_date))
        .route("/endDate", get(project_query::sort_by_end_date))
        .route("/priority", get(project_query::sort_by_priority))
        .route("/status", get(project_query::sort_by_status));

    let filter_routes = Router::new()
        .route("/startDate", get(project_query::filter_by_start_date))
        .route("/endDate", get(project_query::filter_by_end_date))
        .route("/countOfTasks", get(project_query::filter_by_task_count))
        .route("/status", get(project_query::filter_by_status));

    Router::new()
        .route("/", get(project::list).post(project::create))
        .route(
            "/{id}",
            get(project::get_by_id)
                .put(project::update)
                .delete(project::delete),
        )
        .route("/{id}/tasks", get(task::list_by_project))
        .nest("/sort", sort_routes)
        .nest("/filter", filter_routes)
}
