//! Build errors for state table construction.

use thiserror::Error;

/// Errors that can occur when building a state table.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("A state table needs at least one state. Add states before .build()")]
    EmptyTable,

    #[error("Duplicate state name '{name}'. Names must be unique within a table")]
    DuplicateState { name: String },
}
