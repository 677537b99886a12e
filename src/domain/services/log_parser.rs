//! Access-Log Line Parser
//!
//! Pure domain logic for matching Apache combined/common format lines.
//! A non-matching line is a normal skip signal, not an error.

use regex::Regex;

/// Apache combined/common log grammar, case-insensitive.
///
/// Captures, in order: client IP, raw timestamp, method, path, protocol,
/// status, size, referrer, user agent. The IPv4 groups are matched
/// syntactically only (no 0-255 range check); resolution failure is the
/// backstop for nonsense like `999.999.999.999`.
const COMMON_FORMAT: &str = r#"(?ix)
    (\d{1,3}\.\d{1,3}\.\d{1,3}\.\d{1,3})\s+
    .*\s+
    \[(\d{1,2}/\w+/\d{2,4}:\d{2}:\d{2}:\d{2}\s[+-]\d{1,4})\]\s+
    "(\w+)\s+(.+)\s+([\w/\.\\]+)\s*"\s+
    (\d{3})\s+(\d+|-)\s+
    "(.*)"\s+
    "(.*)"
"#;

/// The fields extracted from one matched log line.
///
/// `referrer` and `user_agent` may be empty; their content is otherwise
/// unrestricted (internal quotes are not unescaped).
#[derive(Debug, PartialEq)]
pub struct ParsedLine<'a> {
    /// Client IP as written in the log (syntactic match only)
    pub client_ip: &'a str,
    /// Raw `DD/Mon/YYYY:HH:MM:SS +ZZZZ` timestamp text
    pub raw_timestamp: &'a str,
    /// Request method (bare word)
    pub method: &'a str,
    /// Request path, up to the final protocol token
    pub path: &'a str,
    /// Protocol token (word/slash/dot/backslash characters)
    pub protocol: &'a str,
    /// Response status (exactly three digits in the log)
    pub status: u16,
    /// Response size; `None` when the log records a dash
    pub size: Option<u64>,
    pub referrer: &'a str,
    pub user_agent: &'a str,
}

/// Matcher for the access-log grammar.
///
/// Compiles the grammar once at construction; extracted fields borrow from
/// the input line.
pub struct LogLineParser {
    grammar: Regex,
}

impl LogLineParser {
    pub fn new() -> Self {
        Self {
            grammar: Regex::new(COMMON_FORMAT).expect("log grammar regex is valid"),
        }
    }

    /// Match one raw line against the grammar.
    ///
    /// Returns `None` for non-conforming lines.
    pub fn parse<'a>(&self, line: &'a str) -> Option<ParsedLine<'a>> {
        let caps = self.grammar.captures(line)?;

        let status = caps.get(6)?.as_str().parse().ok()?;
        let size = match caps.get(7)?.as_str() {
            "-" => None,
            digits => Some(digits.parse().ok()?),
        };

        Some(ParsedLine {
            client_ip: caps.get(1)?.as_str(),
            raw_timestamp: caps.get(2)?.as_str(),
            method: caps.get(3)?.as_str(),
            path: caps.get(4)?.as_str(),
            protocol: caps.get(5)?.as_str(),
            status,
            size,
            referrer: caps.get(8)?.as_str(),
            user_agent: caps.get(9)?.as_str(),
        })
    }
}

impl Default for LogLineParser {
    fn default() -> Self {
        Self::new()
    }
}
