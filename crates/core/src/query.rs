//! Sort and filter operations over an already-loaded list of projects.
//!
//! Every function borrows its input and returns a new `Vec`; the input is
//! never reordered or mutated. All operations are total: an empty slice
//! yields an empty `Vec`, and a filter that matches nothing is not an error.
//!
//! Sorts use a single key and `slice::sort_by`, which is stable, so projects
//! with equal keys keep their input order. Descending sorts compare the key
//! in reverse rather than reversing the output, which would break that
//! guarantee.

use std::cmp::Ordering;

use crate::project::Project;
use crate::status::ProjectStatus;
use crate::types::Timestamp;

// ---------------------------------------------------------------------------
// Query selector
// ---------------------------------------------------------------------------

/// Exactly one sort or filter operation with its parameters.
///
/// Criteria cannot be combined; a request maps to a single variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectQuery {
    SortByStartDateDesc,
    SortByCompletionDateAsc,
    SortByPriorityDesc,
    SortByStatusAsc,
    StartDateAfter(Timestamp),
    EndDateBefore(Timestamp),
    /// Inclusive on both ends.
    TaskCountInRange { start: i64, end: i64 },
    Status(ProjectStatus),
}

impl ProjectQuery {
    /// Run this operation over `projects`.
    pub fn apply(&self, projects: &[Project]) -> Vec<Project> {
        match *self {
            Self::SortByStartDateDesc => sort_by_start_date_desc(projects),
            Self::SortByCompletionDateAsc => sort_by_completion_date_asc(projects),
            Self::SortByPriorityDesc => sort_by_priority_desc(projects),
            Self::SortByStatusAsc => sort_by_status_asc(projects),
            Self::StartDateAfter(date) => filter_by_start_date_after(projects, date),
            Self::EndDateBefore(date) => filter_by_end_date_before(projects, date),
            Self::TaskCountInRange { start, end } => {
                filter_by_task_count_in_range(projects, start, end)
            }
            Self::Status(status) => filter_by_status(projects, status),
        }
    }

    /// Short label used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::SortByStartDateDesc => "sort_by_start_date_desc",
            Self::SortByCompletionDateAsc => "sort_by_completion_date_asc",
            Self::SortByPriorityDesc => "sort_by_priority_desc",
            Self::SortByStatusAsc => "sort_by_status_asc",
            Self::StartDateAfter(_) => "filter_by_start_date_after",
            Self::EndDateBefore(_) => "filter_by_end_date_before",
            Self::TaskCountInRange { .. } => "filter_by_task_count_in_range",
            Self::Status(_) => "filter_by_status",
        }
    }
}

// ---------------------------------------------------------------------------
// Sorting
// ---------------------------------------------------------------------------

fn sorted_by<F>(projects: &[Project], compare: F) -> Vec<Project>
where
    F: FnMut(&Project, &Project) -> Ordering,
{
    let mut out = projects.to_vec();
    out.sort_by(compare);
    out
}

/// Latest start date first.
pub fn sort_by_start_date_desc(projects: &[Project]) -> Vec<Project> {
    sorted_by(projects, |a, b| b.start_date.cmp(&a.start_date))
}

/// Earliest completion date first.
pub fn sort_by_completion_date_asc(projects: &[Project]) -> Vec<Project> {
    sorted_by(projects, |a, b| a.completion_date.cmp(&b.completion_date))
}

/// Highest priority first.
pub fn sort_by_priority_desc(projects: &[Project]) -> Vec<Project> {
    sorted_by(projects, |a, b| b.priority.cmp(&a.priority))
}

/// NotStarted, then Active, then Completed.
pub fn sort_by_status_asc(projects: &[Project]) -> Vec<Project> {
    sorted_by(projects, |a, b| a.status.rank().cmp(&b.status.rank()))
}

// ---------------------------------------------------------------------------
// Filtering
// ---------------------------------------------------------------------------

fn filtered<P>(projects: &[Project], mut keep: P) -> Vec<Project>
where
    P: FnMut(&Project) -> bool,
{
    projects.iter().filter(|p| keep(p)).cloned().collect()
}

/// Projects starting strictly after `date_after`.
pub fn filter_by_start_date_after(projects: &[Project], date_after: Timestamp) -> Vec<Project> {
    filtered(projects, |p| p.start_date > date_after)
}

/// Projects completing strictly before `date_before`.
pub fn filter_by_end_date_before(projects: &[Project], date_before: Timestamp) -> Vec<Project> {
    filtered(projects, |p| p.completion_date < date_before)
}

/// Projects whose task count lies in `start..=end`.
///
/// An inverted range (`start > end`) matches nothing.
pub fn filter_by_task_count_in_range(projects: &[Project], start: i64, end: i64) -> Vec<Project> {
    filtered(projects, |p| {
        let count = i64::try_from(p.task_count()).unwrap_or(i64::MAX);
        (start..=end).contains(&count)
    })
}

/// Projects with exactly `status`.
pub fn filter_by_status(projects: &[Project], status: ProjectStatus) -> Vec<Project> {
    filtered(projects, |p| p.status == status)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
