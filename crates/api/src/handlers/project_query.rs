//! Sort and filter endpoints under `/projects/sort` and `/projects/filter`.
//!
//! Each handler loads the full project list (404 when there are no
//! projects) and applies exactly one [`ProjectQuery`]. A filter that matches
//! nothing returns `200` with an empty array. Missing or malformed query
//! parameters are rejected with `400 BAD_REQUEST`.

use axum::extract::State;
use axum::Json;
use tasktracker_core::project::Project;
use tasktracker_core::query::ProjectQuery;

use crate::error::AppResult;
use crate::extract::QueryParams;
use crate::handlers::project::fetch_all_projects;
use crate::query::{DateAfterParams, DateBeforeParams, StatusParams, TaskCountRangeParams};
use crate::state::AppState;

async fn run(state: &AppState, query: ProjectQuery) -> AppResult<Json<Vec<Project>>> {
    let projects = fetch_all_projects(&state.pool).await?;
    let result = query.apply(&projects);

    tracing::debug!(
        query = query.name(),
        input = projects.len(),
        output = result.len(),
        "Applied project query"
    );
    Ok(Json(result))
}

// ---------------------------------------------------------------------------
// Sorting
// ---------------------------------------------------------------------------

/// GET /projects/sort/startDate
pub async fn sort_by_start_date(State(state): State<AppState>) -> AppResult<Json<Vec<Project>>> {
    run(&state, ProjectQuery::SortByStartDateDesc).await
}

/// GET /projects/sort/endDate
pub async fn sort_by_end_date(State(state): State<AppState>) -> AppResult<Json<Vec<Project>>> {
    run(&state, ProjectQuery::SortByCompletionDateAsc).await
}

/// GET /projects/sort/priority
pub async fn sort_by_priority(State(state): State<AppState>) -> AppResult<Json<Vec<Project>>> {
    run(&state, ProjectQuery::SortByPriorityDesc).await
}

/// GET /projects/sort/status
pub async fn sort_by_status(State(state): State<AppState>) -> AppResult<Json<Vec<Project>>> {
    run(&state, ProjectQuery::SortByStatusAsc).await
}

// ---------------------------------------------------------------------------
// Filtering
// ---------------------------------------------------------------------------

/// GET /projects/filter/startDate?dateAfter=
pub async fn filter_by_start_date(
    State(state): State<AppState>,
    QueryParams(params): QueryParams<DateAfterParams>,
) -> AppResult<Json<Vec<Project>>> {
    run(&state, ProjectQuery::StartDateAfter(params.date_after)).await
}

/// GET /projects/filter/endDate?dateBefore=
pub async fn filter_by_end_date(
    State(state): State<AppState>,
    QueryParams(params): QueryParams<DateBeforeParams>,
) -> AppResult<Json<Vec<Project>>> {
    run(&state, ProjectQuery::EndDateBefore(params.date_before)).await
}

/// GET /projects/filter/countOfTasks?start=&end=
pub async fn filter_by_task_count(
    State(state): State<AppState>,
    QueryParams(params): QueryParams<TaskCountRangeParams>,
) -> AppResult<Json<Vec<Project>>> {
    let query = ProjectQuery::TaskCountInRange {
        start: params.start,
        end: params.end,
    };
    run(&state, query).await
}

/// GET /projects/filter/status?status=
pub async fn filter_by_status(
    State(state): State<AppState>,
    QueryParams(params): QueryParams<StatusParams>,
) -> AppResult<Json<Vec<Project>>> {
    run(&state, ProjectQuery::Status(params.status)).await
}
