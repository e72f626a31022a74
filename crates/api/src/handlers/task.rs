//! Handlers for the `/tasks` resource and `/projects/{id}/tasks`.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use tasktracker_core::error::CoreError;
use tasktracker_core::project::ProjectTask;
use tasktracker_core::types::DbId;
use tasktracker_db::models::task::{CreateTask, UpdateTask};
use tasktracker_db::repositories::ProjectTaskRepo;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::handlers::project::ensure_project_exists;
use crate::state::AppState;

fn task_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Task", id })
}

/// POST /tasks
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateTask>,
) -> AppResult<(StatusCode, Json<ProjectTask>)> {
    input.validate()?;
    ensure_project_exists(&state.pool, input.project_id).await?;

    let task = ProjectTaskRepo::create(&state.pool, &input).await?;

    tracing::info!(task_id = task.id, project_id = task.project_id, "Task created");
    Ok((StatusCode::CREATED, Json(task)))
}

/// GET /tasks
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<ProjectTask>>> {
    let tasks = ProjectTaskRepo::list(&state.pool).await?;
    if tasks.is_empty() {
        return Err(AppError::Core(CoreError::NoData("tasks")));
    }
    Ok(Json(tasks))
}

/// GET /projects/{id}/tasks
pub async fn list_by_project(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
) -> AppResult<Json<Vec<ProjectTask>>> {
    ensure_project_exists(&state.pool, project_id).await?;

    let tasks = ProjectTaskRepo::list_by_project(&state.pool, project_id).await?;
    if tasks.is_empty() {
        return Err(AppError::Core(CoreError::NoData("tasks")));
    }
    Ok(Json(tasks))
}

/// GET /tasks/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ProjectTask>> {
    let task = ProjectTaskRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| task_not_found(id))?;
    Ok(Json(task))
}

/// PUT /tasks/{id}
///
/// A `projectId` in the body re-assigns the task; the target project must
/// exist.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateTask>,
) -> AppResult<Json<ProjectTask>> {
    input.validate()?;
    if let Some(project_id) = input.project_id {
        ensure_project_exists(&state.pool, project_id).await?;
    }

    let task = ProjectTaskRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| task_not_found(id))?;

    tracing::info!(task_id = id, project_id = task.project_id, "Task updated");
    Ok(Json(task))
}

/// DELETE /tasks/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    if ProjectTaskRepo::delete(&state.pool, id).await? {
        tracing::info!(task_id = id, "Task deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(task_not_found(id))
    }
}
