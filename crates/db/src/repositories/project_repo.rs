//! Repository for the `projects` table.

use std::collections::HashMap;

use sqlx::PgPool;
use tasktracker_core::project::{Project, ProjectTask};
use tasktracker_core::status::ProjectStatus;
use tasktracker_core::types::DbId;

use crate::models::project::{CreateProject, ProjectRow, UpdateProject};
use crate::models::task::TaskRow;
use crate::repositories::task_repo;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, name, start_date, completion_date, status, priority, created_at, updated_at";

/// Provides CRUD operations for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project, returning it with an empty task list.
    ///
    /// Missing `status` defaults to `NotStarted` and missing `priority` to 1.
    pub async fn create(pool: &PgPool, input: &CreateProject) -> Result<Project, sqlx::Error> {
        let query = format!(
            "INSERT INTO projects (name, start_date, completion_date, status, priority)
             VALUES ($1, $2, $3, COALESCE($4, $5), COALESCE($6, 1))
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, ProjectRow>(&query)
            .bind(&input.name)
            .bind(input.start_date)
            .bind(input.completion_date)
            .bind(input.status.map(ProjectStatus::id))
            .bind(ProjectStatus::default().id())
            .bind(input.priority)
            .fetch_one(pool)
            .await?;
        Ok(row.into_project(Vec::new()))
    }

    /// Find a project row by ID, without loading its tasks.
    pub async fn find_row(pool: &PgPool, id: DbId) -> Result<Option<ProjectRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1");
        sqlx::query_as::<_, ProjectRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a project by ID with its tasks populated.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Project>, sqlx::Error> {
        let Some(row) = Self::find_row(pool, id).await? else {
            return Ok(None);
        };
        let tasks = sqlx::query_as::<_, TaskRow>(&format!(
            "SELECT {} FROM project_tasks WHERE project_id = $1 ORDER BY id",
            task_repo::COLUMNS
        ))
        .bind(id)
        .fetch_all(pool)
        .await?;
        Ok(Some(
            row.into_project(tasks.into_iter().map(ProjectTask::from).collect()),
        ))
    }

    /// Return `true` if a project with the given ID exists.
    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let (exists,): (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM projects WHERE id = $1)")
                .bind(id)
                .fetch_one(pool)
                .await?;
        Ok(exists)
    }

    /// List every project with its tasks, ordered by ID.
    ///
    /// Projects and tasks are read inside one `REPEATABLE READ` transaction
    /// so a concurrent insert cannot produce a task whose project is missing
    /// from the snapshot.
    pub async fn list_with_tasks(pool: &PgPool) -> Result<Vec<Project>, sqlx::Error> {
        let mut tx = pool.begin().await?;
        sqlx::query("SET TRANSACTION ISOLATION LEVEL REPEATABLE READ READ ONLY")
            .execute(&mut *tx)
            .await?;

        let rows = sqlx::query_as::<_, ProjectRow>(&format!(
            "SELECT {COLUMNS} FROM projects ORDER BY id"
        ))
        .fetch_all(&mut *tx)
        .await?;

        let task_rows = sqlx::query_as::<_, TaskRow>(&format!(
            "SELECT {} FROM project_tasks ORDER BY project_id, id",
            task_repo::COLUMNS
        ))
        .fetch_all(&mut *tx)
        .await?;

        tx.commit().await?;

        let mut tasks_by_project: HashMap<DbId, Vec<ProjectTask>> = HashMap::new();
        for task in task_rows {
            tasks_by_project
                .entry(task.project_id)
                .or_default()
                .push(task.into());
        }

        tracing::debug!(projects = rows.len(), "Loaded projects with tasks");

        Ok(rows
            .into_iter()
            .map(|row| {
                let tasks = tasks_by_project.remove(&row.id).unwrap_or_default();
                row.into_project(tasks)
            })
            .collect())
    }

    /// Update a project. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists. Callers are
    /// expected to have validated the resulting date range.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProject,
    ) -> Result<Option<ProjectRow>, sqlx::Error> {
        let query = format!(
            "UPDATE projects SET
                name = COALESCE($2, name),
                start_date = COALESCE($3, start_date),
                completion_date = COALESCE($4, completion_date),
                status = COALESCE($5, status),
                priority = COALESCE($6, priority)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ProjectRow>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(input.start_date)
            .bind(input.completion_date)
            .bind(input.status.map(ProjectStatus::id))
            .bind(input.priority)
            .fetch_optional(pool)
            .await
    }

    /// Delete a project by ID. Its tasks are removed by the FK cascade.
    ///
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
