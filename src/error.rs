//! Error types for the puzzle runner.
//!
//! - [`MapError`] is what [`crate::parallel::parallel_map`] fails with: either a
//!   unit of work failed or the caller cancelled the map.
//! - [`DayError`] covers a day's pipeline end to end: reading stdin, parsing,
//!   solving and writing the answer.

use thiserror::Error;

/// Failure of a bounded parallel map
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MapError<E> {
    /// The first transform that failed; the remaining units were cancelled
    #[error("transform failed: {0}")]
    Failed(E),

    /// Cancellation was requested by the caller before the map completed
    #[error("parallel map was cancelled")]
    Cancelled,
}

/// Errors produced while running a day
#[derive(Error, Debug)]
pub enum DayError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("input is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),

    #[error("invalid input: {0}")]
    Parse(String),

    #[error("missing {0}")]
    Missing(&'static str),

    #[error("interrupted")]
    Cancelled,
}

impl<E: Into<DayError>> From<MapError<E>> for DayError {
    fn from(err: MapError<E>) -> Self {
        match err {
            MapError::Failed(err) => err.into(),
            MapError::Cancelled => DayError::Cancelled,
        }
    }
}
