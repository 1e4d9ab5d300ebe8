//! crates/interrogation_core/src/grammar.rs
//!
//! The line grammar: `[<timestamp>] [<action>] <message>`.
//!
//! Both bracketed spans are anchored at the start of the line and end at their first
//! `]`. Everything after the action bracket is message text, brackets included.

use crate::domain::{LineOutcome, ParsedLine, UnparsedLine};
use crate::speaker::split_speaker;
use chrono::{NaiveDateTime, Timelike};
use regex::Regex;
use std::sync::LazyLock;

/// `2.02.2025 22:19:38`; zero padding on day and month is optional.
pub const TIMESTAMP_FORMAT: &str = "%d.%m.%Y %H:%M:%S";

static LINE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\[(?P<timestamp>[^\]]+)\]\s+\[(?P<action>[^\]]+)\](?:\s+(?P<message>.*))?$")
        .expect("line pattern is a valid regex")
});

/// The three raw spans of a line that matched the outer shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineParts<'a> {
    pub timestamp: &'a str,
    pub action: &'a str,
    pub message: &'a str,
}

/// Splits a line into its raw spans without trimming anything.
pub fn split_line(line: &str) -> Option<LineParts<'_>> {
    let caps = LINE_PATTERN.captures(line)?;
    Some(LineParts {
        timestamp: caps.name("timestamp")?.as_str(),
        action: caps.name("action")?.as_str(),
        message: caps.name("message").map_or("", |m| m.as_str()),
    })
}

/// Normalizes a game timestamp. Any malformed input yields `None`.
/// Seconds run 0..=59; chrono's leap second `:60` counts as out of range.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(raw, TIMESTAMP_FORMAT)
        .ok()
        .filter(|ts| ts.nanosecond() < 1_000_000_000)
}

/// Parses one transcript line. `index` is its zero-based position in the transcript
/// and is only kept for unparsed lines.
pub fn parse_line(index: usize, line: &str) -> LineOutcome {
    let Some(parts) = split_line(line) else {
        return LineOutcome::Unparsed(UnparsedLine {
            index,
            text: line.to_string(),
        });
    };

    let (speaker_clause, is_radio, message) = split_speaker(parts.message.trim());

    LineOutcome::Parsed(ParsedLine {
        timestamp_raw: parts.timestamp.to_string(),
        timestamp: parse_timestamp(parts.timestamp),
        action: parts.action.trim().to_string(),
        speaker_clause,
        is_radio,
        message,
    })
}
