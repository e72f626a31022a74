//! Project row model and DTOs.

use serde::Deserialize;
use sqlx::FromRow;
use tasktracker_core::project::{Project, ProjectTask};
use tasktracker_core::status::ProjectStatus;
use tasktracker_core::types::{DbId, Timestamp};
use validator::Validate;

/// A row from the `projects` table, without its tasks.
#[derive(Debug, Clone, FromRow)]
pub struct ProjectRow {
    pub id: DbId,
    pub name: String,
    pub start_date: Timestamp,
    pub completion_date: Timestamp,
    #[sqlx(try_from = "i16")]
    pub status: ProjectStatus,
    pub priority: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl ProjectRow {
    /// Attach `tasks` to produce the domain snapshot.
    pub fn into_project(self, tasks: Vec<ProjectTask>) -> Project {
        Project {
            id: self.id,
            name: self.name,
            start_date: self.start_date,
            completion_date: self.completion_date,
            status: self.status,
            priority: self.priority,
            tasks,
        }
    }
}

/// DTO for creating a new project.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateProject {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    pub start_date: Timestamp,
    pub completion_date: Timestamp,
    /// Defaults to `NotStarted` if omitted.
    pub status: Option<ProjectStatus>,
    /// Defaults to 1 if omitted.
    pub priority: Option<i32>,
}

/// DTO for updating an existing project. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProject {
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,
    pub start_date: Option<Timestamp>,
    pub completion_date: Option<Timestamp>,
    pub status: Option<ProjectStatus>,
    pub priority: Option<i32>,
}
