use crate::types::{DbId, Timestamp};

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    /// A collection that callers expect to be populated is empty.
    #[error("No {0} found")]
    NoData(&'static str),

    #[error("Start date {start} is later than completion date {completion}")]
    InvalidDateRange {
        start: Timestamp,
        completion: Timestamp,
    },

    #[error("Validation failed: {0}")]
    Validation(String),
}
