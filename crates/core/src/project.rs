//! Project and task entities, plus the date-range rule applied on create/edit.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::status::{ProjectStatus, TaskStatus};
use crate::types::{DbId, Timestamp};

/// A task owned by exactly one project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectTask {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub status: TaskStatus,
    pub priority: i32,
    pub project_id: DbId,
}

/// A project snapshot with its tasks populated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: DbId,
    pub name: String,
    pub start_date: Timestamp,
    pub completion_date: Timestamp,
    pub status: ProjectStatus,
    /// Higher is more urgent. No fixed range.
    pub priority: i32,
    /// Ordered by task id.
    pub tasks: Vec<ProjectTask>,
}

impl Project {
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }
}

/// Reject a project whose start date is after its completion date.
///
/// Equal dates are allowed.
pub fn validate_date_range(start: Timestamp, completion: Timestamp) -> Result<(), CoreError> {
    if start > completion {
        return Err(CoreError::InvalidDateRange { start, completion });
    }
    Ok(())
}
