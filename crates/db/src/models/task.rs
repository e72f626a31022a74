//! Project task row model and DTOs.

use serde::Deserialize;
use sqlx::FromRow;
use tasktracker_core::project::ProjectTask;
use tasktracker_core::status::TaskStatus;
use tasktracker_core::types::{DbId, Timestamp};
use validator::Validate;

/// A row from the `project_tasks` table.
#[derive(Debug, Clone, FromRow)]
pub struct TaskRow {
    pub id: DbId,
    pub project_id: DbId,
    pub name: String,
    pub description: String,
    #[sqlx(try_from = "i16")]
    pub status: TaskStatus,
    pub priority: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<TaskRow> for ProjectTask {
    fn from(row: TaskRow) -> Self {
        ProjectTask {
            id: row.id,
            name: row.name,
            description: row.description,
            status: row.status,
            priority: row.priority,
            project_id: row.project_id,
        }
    }
}

/// DTO for creating a new task under an existing project.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateTask {
    pub project_id: DbId,
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    /// Defaults to an empty string if omitted.
    pub description: Option<String>,
    /// Defaults to `ToDo` if omitted.
    pub status: Option<TaskStatus>,
    /// Defaults to 1 if omitted.
    pub priority: Option<i32>,
}

/// DTO for updating an existing task. All fields are optional.
///
/// Setting `project_id` moves the task to another project.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTask {
    pub project_id: Option<DbId>,
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,
    pub description: Option<String>,
    pub status: Option<TaskStatus>,
    pub priority: Option<i32>,
}
