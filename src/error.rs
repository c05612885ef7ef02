//! Error type shared by configuration, validation and grid building.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalendarError {
    /// Rejected year, month or weekday input.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("date out of range: {year:04}-{month:02}-{day:02}")]
    DateOutOfRange { year: i32, month: u32, day: u32 },
}

impl CalendarError {
    pub fn invalid(msg: impl Into<String>) -> Self {
        CalendarError::InvalidArgument(msg.into())
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, CalendarError::InvalidArgument(_))
    }
}

pub type Result<T, E = CalendarError> = std::result::Result<T, E>;
