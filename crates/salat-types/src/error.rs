use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from salat operations.
///
/// Only parse-class failures surface here. Degenerate schedules (missing
/// entries, misordered instants) are absorbed by the schedule engine and
/// never produce an error.
#[derive(Debug, Error, Clone, PartialEq, Serialize, Deserialize)]
pub enum SalatError {
    /// Local time string did not match `HH:MM` after stripping annotations.
    #[error("Invalid time format: {input:?} (expected HH:MM)")]
    InvalidTimeFormat { input: String },

    /// Timezone identifier is not in the IANA database.
    #[error("Unknown timezone: {name}")]
    UnknownTimezone { name: String },

    /// Local wall-clock time does not exist in the zone on that date.
    #[error("Local time {time} on {date} does not exist in {timezone}")]
    NonexistentLocalTime {
        date: NaiveDate,
        time: NaiveTime,
        timezone: String,
    },

    /// Invalid configuration.
    #[error("Invalid configuration: {reason}")]
    InvalidConfiguration { reason: String },

    /// Source payload could not be decoded.
    #[error("Malformed source data: {0}")]
    MalformedSource(String),
}

impl SalatError {
    /// Creates an `InvalidTimeFormat` error.
    pub fn invalid_time(input: impl Into<String>) -> Self {
        Self::InvalidTimeFormat { input: input.into() }
    }

    /// Creates an `UnknownTimezone` error.
    pub fn unknown_timezone(name: impl Into<String>) -> Self {
        Self::UnknownTimezone { name: name.into() }
    }

    /// Creates an `InvalidConfiguration` error.
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration { reason: reason.into() }
    }

    /// Creates a `MalformedSource` error.
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedSource(reason.into())
    }

    /// True for errors caused by unparseable input rather than configuration.
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidTimeFormat { .. } | Self::UnknownTimezone { .. } | Self::MalformedSource(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_time_message() {
        let err = SalatError::invalid_time("25:00");
        assert_eq!(err.to_string(), "Invalid time format: \"25:00\" (expected HH:MM)");
        assert!(err.is_parse_error());
    }

    #[test]
    fn test_config_error_is_not_parse_error() {
        let err = SalatError::invalid_config("adjustment 5 outside [-2, 2]");
        assert!(!err.is_parse_error());
        assert_eq!(err.to_string(), "Invalid configuration: adjustment 5 outside [-2, 2]");
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_impl<T: Send + Sync + std::error::Error>() {}
        assert_impl::<SalatError>();
    }
}
