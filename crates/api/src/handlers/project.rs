//! Handlers for the `/projects` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use sqlx::PgPool;
use tasktracker_core::error::CoreError;
use tasktracker_core::project::{validate_date_range, Project};
use tasktracker_core::types::DbId;
use tasktracker_db::models::project::{CreateProject, UpdateProject};
use tasktracker_db::repositories::ProjectRepo;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn project_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Project",
        id,
    })
}

/// Load every project with its tasks.
///
/// An empty table is reported as `NoData` rather than an empty list.
pub async fn fetch_all_projects(pool: &PgPool) -> AppResult<Vec<Project>> {
    let projects = ProjectRepo::list_with_tasks(pool).await?;
    if projects.is_empty() {
        return Err(AppError::Core(CoreError::NoData("projects")));
    }
    Ok(projects)
}

/// Verify that a project exists.
pub async fn ensure_project_exists(pool: &PgPool, id: DbId) -> AppResult<()> {
    if ProjectRepo::exists(pool, id).await? {
        Ok(())
    } else {
        Err(project_not_found(id))
    }
}

// ---------------------------------------------------------------------------
// CRUD
// ---------------------------------------------------------------------------

/// POST /projects
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateProject>,
) -> AppResult<(StatusCode, Json<Project>)> {
    input.validate()?;
    validate_date_range(input.start_date, input.completion_date)?;

    let project = ProjectRepo::create(&state.pool, &input).await?;

    tracing::info!(project_id = project.id, name = %project.name, "Project created");
    Ok((StatusCode::CREATED, Json(project)))
}

/// GET /projects
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Project>>> {
    let projects = fetch_all_projects(&state.pool).await?;
    Ok(Json(projects))
}

/// GET /projects/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Project>> {
    let project = ProjectRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| project_not_found(id))?;
    Ok(Json(project))
}

/// PUT /projects/{id}
///
/// Fields left out keep their stored value. The date range is checked on
/// the merged result, so moving only one of the two dates is still
/// validated against the other.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateProject>,
) -> AppResult<Json<Project>> {
    input.validate()?;

    let existing = ProjectRepo::find_row(&state.pool, id)
        .await?
        .ok_or_else(|| project_not_found(id))?;
    validate_date_range(
        input.start_date.unwrap_or(existing.start_date),
        input.completion_date.unwrap_or(existing.completion_date),
    )?;

    ProjectRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| project_not_found(id))?;

    let project = ProjectRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| project_not_found(id))?;

    tracing::info!(project_id = id, "Project updated");
    Ok(Json(project))
}

/// DELETE /projects/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    if ProjectRepo::delete(&state.pool, id).await? {
        tracing::info!(project_id = id, "Project deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(project_not_found(id))
    }
}
