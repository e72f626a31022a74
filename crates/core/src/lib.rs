//! Domain types and pure logic for the task tracker.
//!
//! Nothing in this crate performs I/O. Persistence lives in `tasktracker_db`
//! and HTTP in `tasktracker_api`.

pub mod error;
pub mod project;
pub mod query;
pub mod status;
pub mod types;
