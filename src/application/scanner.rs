//! Event Scanner - Main application use case
//!
//! Orchestrates the pipeline: parse a log line, resolve the client IP,
//! normalize the timestamp, and deliver one GeoEvent per line to the
//! formatter. This is the primary interface for the composition root.

use crate::domain::entities::GeoEvent;
use crate::domain::ports::{Formatter, GeoResolver};
use crate::domain::services::{normalize_timestamp, LogLineParser, TimestampError};
use std::io::BufRead;
use std::net::IpAddr;
use std::sync::Arc;
use thiserror::Error;

/// Error raised by a scan.
///
/// Grammar no-matches and unresolvable IPs are NOT errors; they are
/// counted in [`ScanStats`] and skipped silently.
#[derive(Debug, Error)]
pub enum ScanError {
    /// The input stream failed while reading a line.
    #[error("failed to read input line")]
    Io(#[from] std::io::Error),

    /// A timestamp matched the log grammar but failed the strict layout
    /// parse. This aborts the scan: it is a grammar/layout mismatch, not
    /// input noise. The formatter is still closed first.
    #[error(transparent)]
    Timestamp(#[from] TimestampError),

    /// The formatter failed to open, render an entry, or close.
    #[error("formatter failure")]
    Formatter(#[source] anyhow::Error),
}

/// Counters for one completed scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanStats {
    /// Geo events delivered to the formatter
    pub events: usize,
    /// Lines that did not match the log grammar
    pub skipped_lines: usize,
    /// Matched lines whose client IP did not resolve to a location
    pub unresolved: usize,
}

/// Event scanner - main application use case.
///
/// Drives the formatter lifecycle around the line loop:
/// 1. Match each line against the access-log grammar (no-match = skip)
/// 2. Resolve the client IP to a location (unresolved = skip)
/// 3. Normalize the timestamp (strict failure = fatal)
/// 4. Deliver the resulting GeoEvent to the formatter
///
/// All output goes through the formatter; the scanner itself emits none.
pub struct EventScanner {
    resolver: Arc<dyn GeoResolver>,
    parser: LogLineParser,
}

impl EventScanner {
    /// Create a scanner around an injected resolver.
    pub fn new(resolver: Arc<dyn GeoResolver>) -> Self {
        Self {
            resolver,
            parser: LogLineParser::new(),
        }
    }

    /// Scan a line stream to completion, rendering through `formatter`.
    ///
    /// `formatter.close()` runs on every exit path, including a fatal
    /// failure mid-loop, so headers already emitted and aggregation state
    /// already populated are always finalized.
    pub fn scan<R: BufRead>(
        &self,
        input: R,
        formatter: &mut dyn Formatter,
    ) -> Result<ScanStats, ScanError> {
        formatter.open().map_err(ScanError::Formatter)?;

        let result = self.run(input, formatter);
        let closed = formatter.close().map_err(ScanError::Formatter);

        let stats = result?;
        closed?;

        tracing::debug!(
            events = stats.events,
            skipped = stats.skipped_lines,
            unresolved = stats.unresolved,
            "scan complete"
        );
        Ok(stats)
    }

    fn run<R: BufRead>(
        &self,
        input: R,
        formatter: &mut dyn Formatter,
    ) -> Result<ScanStats, ScanError> {
        let mut stats = ScanStats::default();

        for line in input.lines() {
            let line = line?;

            let Some(parsed) = self.parser.parse(&line) else {
                stats.skipped_lines += 1;
                continue;
            };

            // Syntactic IPv4 match only; nonsense octets fail here.
            let Ok(ip) = parsed.client_ip.parse::<IpAddr>() else {
                tracing::debug!(ip = parsed.client_ip, "unparseable client address");
                stats.unresolved += 1;
                continue;
            };

            let Some(location) = self.resolver.resolve(ip) else {
                tracing::debug!(%ip, "no location for client address");
                stats.unresolved += 1;
                continue;
            };

            let timestamp = normalize_timestamp(parsed.raw_timestamp)?;
            let event = GeoEvent::new(location, timestamp);

            formatter
                .process_entry(&event)
                .map_err(ScanError::Formatter)?;
            stats.events += 1;
        }

        Ok(stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::LocationRecord;
    use crate::domain::value_objects::Coordinates;
    use std::io::Cursor;

    /// Resolver that maps a fixed set of addresses.
    struct StubResolver;

    impl GeoResolver for StubResolver {
        fn resolve(&self, ip: IpAddr) -> Option<LocationRecord> {
            match ip.to_string().as_str() {
                "10.0.0.1" => Some(LocationRecord {
                    country_code: "US".to_string(),
                    country: "United States".to_string(),
                    region: "CA".to_string(),
                    city: "Mountain View".to_string(),
                    coordinates: Some(Coordinates::new(37.4, -122.1)),
                }),
                "203.0.113.7" => Some(LocationRecord {
                    country_code: "JP".to_string(),
                    country: "Japan".to_string(),
                    region: "13".to_string(),
                    city: "Tokyo".to_string(),
                    coordinates: Some(Coordinates::new(35.655614, 139.701204)),
                }),
                _ => None,
            }
        }
    }

    /// Formatter that records lifecycle calls.
    #[derive(Default)]
    struct RecordingFormatter {
        opened: bool,
        closed: bool,
        events: Vec<GeoEvent>,
        fail_entries: bool,
    }

    impl Formatter for RecordingFormatter {
        fn open(&mut self) -> anyhow::Result<()> {
            self.opened = true;
            Ok(())
        }

        fn process_entry(&mut self, event: &GeoEvent) -> anyhow::Result<()> {
            if self.fail_entries {
                anyhow::bail!("renderer broke");
            }
            self.events.push(event.clone());
            Ok(())
        }

        fn close(&mut self) -> anyhow::Result<()> {
            self.closed = true;
            Ok(())
        }
    }

    fn scanner() -> EventScanner {
        EventScanner::new(Arc::new(StubResolver))
    }

    const GOOD_LINE: &str = r#"10.0.0.1 - - [10/Oct/2021:13:55:36 +0000] "GET /index.html HTTP/1.1" 200 2326 "-" "Mozilla/5.0""#;

    #[test]
    fn test_one_event_per_resolvable_line_in_order() {
        let input = format!(
            "{GOOD_LINE}\n203.0.113.7 - - [10/Oct/2021:14:00:00 +0000] \"GET / HTTP/1.1\" 200 1 \"-\" \"-\"\n"
        );
        let mut fmt = RecordingFormatter::default();

        let stats = scanner().scan(Cursor::new(input), &mut fmt).unwrap();

        assert_eq!(stats.events, 2);
        assert_eq!(fmt.events.len(), 2);
        assert_eq!(fmt.events[0].country_code, "US");
        assert_eq!(fmt.events[1].country_code, "JP");
        assert!(fmt.opened);
        assert!(fmt.closed);
    }

    #[test]
    fn test_event_fields_for_scenario_line() {
        let mut fmt = RecordingFormatter::default();
        scanner()
            .scan(Cursor::new(GOOD_LINE.to_string()), &mut fmt)
            .unwrap();

        let event = &fmt.events[0];
        assert_eq!(event.timestamp.to_rfc3339(), "2021-10-10T13:55:36+00:00");
        assert_eq!(event.country, "United States");
        assert_eq!(event.region, "CA");
        assert_eq!(event.city, "Mountain View");
        assert_eq!(event.coordinates, Some(Coordinates::new(37.4, -122.1)));
    }

    #[test]
    fn test_non_matching_lines_skip_silently() {
        let input = "garbage\n\nnot a log line\n";
        let mut fmt = RecordingFormatter::default();

        let stats = scanner().scan(Cursor::new(input), &mut fmt).unwrap();

        assert_eq!(stats.events, 0);
        assert_eq!(stats.skipped_lines, 3);
        assert!(fmt.events.is_empty());
        assert!(fmt.closed);
    }

    #[test]
    fn test_unresolvable_ip_skips_silently() {
        // Matches the grammar, resolves to nothing.
        let input = r#"192.0.2.55 - - [10/Oct/2021:13:55:36 +0000] "GET / HTTP/1.1" 200 1 "-" "-""#;
        let mut fmt = RecordingFormatter::default();

        let stats = scanner().scan(Cursor::new(input), &mut fmt).unwrap();

        assert_eq!(stats.events, 0);
        assert_eq!(stats.unresolved, 1);
    }

    #[test]
    fn test_syntactic_ip_is_unresolved_not_error() {
        let input = r#"999.999.999.999 - - [10/Oct/2021:13:55:36 +0000] "GET / HTTP/1.1" 200 1 "-" "-""#;
        let mut fmt = RecordingFormatter::default();

        let stats = scanner().scan(Cursor::new(input), &mut fmt).unwrap();

        assert_eq!(stats.unresolved, 1);
        assert_eq!(stats.events, 0);
    }

    #[test]
    fn test_strict_timestamp_failure_aborts_but_closes() {
        // "+0" passes the grammar, fails the strict layout.
        let input = r#"10.0.0.1 - - [10/Oct/2021:13:55:36 +0] "GET / HTTP/1.1" 200 1 "-" "-""#;
        let mut fmt = RecordingFormatter::default();

        let err = scanner().scan(Cursor::new(input), &mut fmt).unwrap_err();

        assert!(matches!(err, ScanError::Timestamp(_)));
        assert!(fmt.closed, "close must run on the fatal path");
    }

    #[test]
    fn test_formatter_entry_failure_closes() {
        let mut fmt = RecordingFormatter {
            fail_entries: true,
            ..RecordingFormatter::default()
        };

        let err = scanner()
            .scan(Cursor::new(GOOD_LINE.to_string()), &mut fmt)
            .unwrap_err();

        assert!(matches!(err, ScanError::Formatter(_)));
        assert!(fmt.closed);
    }

    #[test]
    fn test_rescan_is_idempotent() {
        let input = format!("{GOOD_LINE}\nnoise\n{GOOD_LINE}\n");
        let s = scanner();

        let mut first = RecordingFormatter::default();
        let mut second = RecordingFormatter::default();
        s.scan(Cursor::new(input.clone()), &mut first).unwrap();
        s.scan(Cursor::new(input), &mut second).unwrap();

        assert_eq!(first.events, second.events);
    }
}
