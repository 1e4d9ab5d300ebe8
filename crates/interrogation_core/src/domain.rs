//! crates/interrogation_core/src/domain.rs
//!
//! Defines the pure, core data structures for the transcript viewer.
//! These structs are independent of any renderer or serialization format.

use chrono::NaiveDateTime;
use std::fmt;

//=========================================================================================
// Action Categories
//=========================================================================================

/// The known action labels written by the game between the second pair of brackets.
///
/// The action itself is an open string on [`ParsedLine`]; this enum only classifies it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionCategory {
    ChatIc,
    ChatOoc,
    Me,
    Do,
    Command,
    PrivateMessage,
    Unrecognized,
}

impl ActionCategory {
    pub const CHAT_IC: &'static str = "Czat IC";
    pub const CHAT_OOC: &'static str = "Czat OOC";
    pub const ME: &'static str = "Akcja /me";
    pub const DO: &'static str = "Akcja /do";
    pub const COMMAND: &'static str = "Komenda";
    pub const PRIVATE_MESSAGE: &'static str = "PW";

    /// Classifies an action label. Matching is exact: case and diacritics count.
    pub fn classify(action: &str) -> Self {
        match action {
            Self::CHAT_IC => Self::ChatIc,
            Self::CHAT_OOC => Self::ChatOoc,
            Self::ME => Self::Me,
            Self::DO => Self::Do,
            Self::COMMAND => Self::Command,
            Self::PRIVATE_MESSAGE => Self::PrivateMessage,
            _ => Self::Unrecognized,
        }
    }
}

//=========================================================================================
// Parsed and Unparsed Lines
//=========================================================================================

/// A transcript line that matched the `[timestamp] [action] message` shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLine {
    /// Timestamp text exactly as written between the first brackets.
    pub timestamp_raw: String,
    /// `None` when `timestamp_raw` is not a valid `day.month.year hour:minute:second`.
    pub timestamp: Option<NaiveDateTime>,
    pub action: String,
    /// Leading "Name verb (extra) do Addressee:" span, or empty.
    pub speaker_clause: String,
    pub is_radio: bool,
    pub message: String,
}

impl ParsedLine {
    /// Normalized `YYYY-MM-DD` date.
    pub fn date(&self) -> Option<String> {
        self.timestamp.map(|ts| ts.format("%Y-%m-%d").to_string())
    }

    /// Normalized `HH:MM:SS` time.
    pub fn time(&self) -> Option<String> {
        self.timestamp.map(|ts| ts.format("%H:%M:%S").to_string())
    }

    pub fn category(&self) -> ActionCategory {
        ActionCategory::classify(&self.action)
    }

    pub fn has_speaker(&self) -> bool {
        !self.speaker_clause.is_empty()
    }
}

/// A transcript line that failed the outer grammar, kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnparsedLine {
    /// Zero-based position in the transcript as exported.
    pub index: usize,
    pub text: String,
}

/// The outcome of running the line grammar. Neither variant is an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
    Parsed(ParsedLine),
    Unparsed(UnparsedLine),
}

//=========================================================================================
// Participant Groups and Render Records
//=========================================================================================

/// One of the two user-curated participant sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Group {
    /// Typically the interviewers.
    A,
    /// Typically the interrogated persons.
    B,
}

impl Group {
    pub fn other(self) -> Self {
        match self {
            Group::A => Group::B,
            Group::B => Group::A,
        }
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Group::A => f.write_str("A"),
            Group::B => f.write_str("B"),
        }
    }
}

/// Marks a line whose speaker belongs to one of the participant groups.
///
/// `ordinal` is set only when several names of the same group matched the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MembershipTag {
    pub group: Group,
    pub ordinal: Option<usize>,
}

impl MembershipTag {
    /// Builds the display label from a group prefix, e.g. `I`, `I2`, `O`.
    pub fn label(&self, prefix: &str) -> String {
        match self.ordinal {
            Some(n) => format!("{prefix}{n}"),
            None => prefix.to_string(),
        }
    }
}

impl fmt::Display for MembershipTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label(&self.group.to_string()))
    }
}

/// The line content carried by a [`RenderRecord`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordBody {
    Parsed(ParsedLine),
    /// An unparsed line shown as-is because unrecognized lines are visible.
    Passthrough(UnparsedLine),
}

/// One surviving line of the filter-and-label pipeline, ready for a renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderRecord {
    /// 1-based, assigned after filtering in the current sort order.
    pub row: usize,
    /// Zero-based position of the line in the transcript.
    pub source_index: usize,
    pub body: RecordBody,
    /// Timestamp text to display given the date/time toggles.
    pub timestamp_label: Option<String>,
    pub related: bool,
    pub membership: Option<MembershipTag>,
}

impl RenderRecord {
    pub fn parsed(&self) -> Option<&ParsedLine> {
        match &self.body {
            RecordBody::Parsed(line) => Some(line),
            RecordBody::Passthrough(_) => None,
        }
    }
}
