//! Repository for the `project_tasks` table.

use sqlx::PgPool;
use tasktracker_core::project::ProjectTask;
use tasktracker_core::status::TaskStatus;
use tasktracker_core::types::DbId;

use crate::models::task::{CreateTask, TaskRow, UpdateTask};

/// Column list shared across queries to avoid repetition.
pub(crate) const COLUMNS: &str =
    "id, project_id, name, description, status, priority, created_at, updated_at";

/// Provides CRUD operations for project tasks.
pub struct ProjectTaskRepo;

impl ProjectTaskRepo {
    /// Insert a new task, returning the created row.
    ///
    /// The owning project must exist; otherwise the insert fails with a
    /// foreign key violation.
    pub async fn create(pool: &PgPool, input: &CreateTask) -> Result<ProjectTask, sqlx::Error> {
        let query = format!(
            "INSERT INTO project_tasks (project_id, name, description, status, priority)
             VALUES ($1, $2, COALESCE($3, ''), COALESCE($4, $5), COALESCE($6, 1))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TaskRow>(&query)
            .bind(input.project_id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.status.map(TaskStatus::id))
            .bind(TaskStatus::default().id())
            .bind(input.priority)
            .fetch_one(pool)
            .await
            .map(ProjectTask::from)
    }

    /// Find a task by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<ProjectTask>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM project_tasks WHERE id = $1");
        let row = sqlx::query_as::<_, TaskRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row.map(ProjectTask::from))
    }

    /// List all tasks ordered by ID.
    pub async fn list(pool: &PgPool) -> Result<Vec<ProjectTask>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM project_tasks ORDER BY id");
        let rows = sqlx::query_as::<_, TaskRow>(&query).fetch_all(pool).await?;
        Ok(rows.into_iter().map(ProjectTask::from).collect())
    }

    /// List the tasks of one project ordered by ID.
    pub async fn list_by_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<ProjectTask>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM project_tasks WHERE project_id = $1 ORDER BY id");
        let rows = sqlx::query_as::<_, TaskRow>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await?;
        Ok(rows.into_iter().map(ProjectTask::from).collect())
    }

    /// Update a task. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateTask,
    ) -> Result<Option<ProjectTask>, sqlx::Error> {
        let query = format!(
            "UPDATE project_tasks SET
                project_id = COALESCE($2, project_id),
                name = COALESCE($3, name),
                description = COALESCE($4, description),
                status = COALESCE($5, status),
                priority = COALESCE($6, priority)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, TaskRow>(&query)
            .bind(id)
            .bind(input.project_id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.status.map(TaskStatus::id))
            .bind(input.priority)
            .fetch_optional(pool)
            .await?;
        Ok(row.map(ProjectTask::from))
    }

    /// Delete a task by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM project_tasks WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
