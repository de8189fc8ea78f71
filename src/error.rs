use std::path::PathBuf;

/// Error type for every fallible operation in the yulee library.
#[derive(Debug, thiserror::Error)]
pub enum YuleError {
    /// Returned when a range is reversed; ranges are never silently swapped.
    #[error("invalid range: start year {start} is after end year {end}")]
    InvalidRange { start: i32, end: i32 },

    /// Returned when a year falls outside the supported 1..=9999 window.
    #[error("year {year} is outside the supported range 1..=9999")]
    YearOutOfBounds { year: i32 },

    /// Returned when an export format string is not recognized.
    #[error("unsupported export format: {0}")]
    UnsupportedFormat(String),

    /// Returned when the export destination cannot be written.
    #[error("failed to write {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Returned when structured-record input does not parse back into a document.
    #[error("malformed export document: {0}")]
    Malformed(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_range_message() {
        let err = YuleError::InvalidRange {
            start: 2000,
            end: 1999,
        };
        assert_eq!(
            err.to_string(),
            "invalid range: start year 2000 is after end year 1999"
        );
    }

    #[test]
    fn out_of_bounds_message() {
        let err = YuleError::YearOutOfBounds { year: 10000 };
        assert_eq!(
            err.to_string(),
            "year 10000 is outside the supported range 1..=9999"
        );
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<YuleError>();
    }
}
