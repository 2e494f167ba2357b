//! Error types for schedule parsing.

use thiserror::Error;

/// A specialized Result type for schedule parsing.
pub type ScheduleResult<T> = Result<T, ScheduleError>;

/// Why a facility has no usable weekly schedule.
///
/// Both variants make the facility's status `unknown`. They are kept apart so
/// callers can tell missing data from dirty data without reading logs.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ScheduleError {
    /// The hours field is absent or blank.
    #[error("no operating hours data")]
    NoData,

    /// The hours field is present but is not a day-name mapping.
    #[error("malformed operating hours: {reason}")]
    Malformed {
        /// Description of the deserialization failure.
        reason: String,
    },
}

impl ScheduleError {
    /// Creates a malformed-data error.
    pub fn malformed(reason: impl Into<String>) -> Self {
        ScheduleError::Malformed {
            reason: reason.into(),
        }
    }

    /// Returns true for [`ScheduleError::Malformed`].
    pub fn is_malformed(&self) -> bool {
        matches!(self, ScheduleError::Malformed { .. })
    }
}
