//! Error types for the semcal core.

use thiserror::Error;

/// Errors that can occur while extracting a weekly template.
///
/// Malformed individual cells are not errors: they degrade to empty
/// classroom/title values, and a row whose time label cannot be parsed is
/// omitted entirely rather than producing a record with garbage times.
#[derive(Error, Debug)]
pub enum ScheduleError {
    #[error("Table body is not loaded; supply a table with at least one row")]
    NotReady,

    #[error("Unknown weekday in table header: '{0}'")]
    UnknownWeekday(String),
}

/// Result type alias for semcal core operations.
pub type ScheduleResult<T> = Result<T, ScheduleError>;
