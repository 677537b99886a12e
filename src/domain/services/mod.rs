mod log_parser;
mod timestamp;

pub use log_parser::{LogLineParser, ParsedLine};
pub use timestamp::{normalize_timestamp, TimestampError, TIMESTAMP_LAYOUT};
