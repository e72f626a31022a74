//! Request handlers.
//!
//! `project` and `task` provide create, list, get_by_id, update and delete
//! for each entity, delegating to the repositories in `tasktracker_db` and
//! mapping errors via [`AppError`](crate::error::AppError). `project_query`
//! serves the sort and filter endpoints on top of the full project list.

pub mod project;
pub mod project_query;
pub mod task;
