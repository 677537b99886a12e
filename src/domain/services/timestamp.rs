//! Timestamp Normalizer
//!
//! Strict parsing of the access-log timestamp into a structured date-time.

use chrono::{DateTime, FixedOffset};
use thiserror::Error;

/// The strict access-log timestamp layout: `10/Oct/2021:13:55:36 +0000`.
pub const TIMESTAMP_LAYOUT: &str = "%d/%b/%Y:%H:%M:%S %z";

/// A timestamp that matched the outer log grammar but failed the strict
/// layout parse.
///
/// This indicates a grammar/layout mismatch rather than bad input data,
/// so the scanner treats it as fatal instead of a skip.
#[derive(Debug, Error)]
#[error("timestamp {raw:?} matched the log grammar but not the strict layout")]
pub struct TimestampError {
    /// The offending timestamp text
    pub raw: String,
    #[source]
    pub source: chrono::ParseError,
}

/// Parse the grammar's timestamp substring into a date-time with its
/// original UTC offset.
pub fn normalize_timestamp(raw: &str) -> Result<DateTime<FixedOffset>, TimestampError> {
    DateTime::parse_from_str(raw, TIMESTAMP_LAYOUT).map_err(|source| TimestampError {
        raw: raw.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_valid_timestamp() {
        let ts = normalize_timestamp("10/Oct/2021:13:55:36 +0000").unwrap();
        assert_eq!(ts.to_rfc3339(), "2021-10-10T13:55:36+00:00");
    }

    #[test]
    fn test_normalize_keeps_offset() {
        let ts = normalize_timestamp("25/Dec/2019:23:59:59 +0900").unwrap();
        assert_eq!(ts.to_rfc3339(), "2019-12-25T23:59:59+09:00");
    }

    #[test]
    fn test_normalize_negative_offset() {
        let ts = normalize_timestamp("01/Jan/2020:00:00:01 -0430").unwrap();
        assert_eq!(ts.to_rfc3339(), "2020-01-01T00:00:01-04:30");
    }

    #[test]
    fn test_normalize_rejects_unknown_month() {
        let err = normalize_timestamp("10/Okt/2021:13:55:36 +0000").unwrap_err();
        assert_eq!(err.raw, "10/Okt/2021:13:55:36 +0000");
    }

    #[test]
    fn test_normalize_rejects_short_offset() {
        // "+0" satisfies the outer grammar but not the strict layout.
        assert!(normalize_timestamp("10/Oct/2021:13:55:36 +0").is_err());
    }

    #[test]
    fn test_normalize_rejects_impossible_date() {
        assert!(normalize_timestamp("32/Oct/2021:13:55:36 +0000").is_err());
    }
}
