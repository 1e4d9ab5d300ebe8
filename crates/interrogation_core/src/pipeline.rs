//! crates/interrogation_core/src/pipeline.rs
//!
//! The filter-and-label pipeline: a pure function from a transcript and a view
//! state to the ordered records a renderer displays.

use crate::domain::{
    ActionCategory, Group, LineOutcome, MembershipTag, ParsedLine, RecordBody, RenderRecord,
    UnparsedLine,
};
use crate::grammar::parse_line;
use crate::speaker::bare_name;
use crate::transcript::Transcript;
use crate::view_state::{CategoryKey, SortOrder, ViewState};

/// Runs the whole pipeline. Identical inputs always give identical output.
pub fn render_records(transcript: &Transcript, state: &ViewState) -> Vec<RenderRecord> {
    let lines = transcript.lines();
    let ordered: Box<dyn Iterator<Item = (usize, &String)>> = match state.sort_order() {
        SortOrder::Ascending => Box::new(lines.iter().enumerate()),
        SortOrder::Descending => Box::new(lines.iter().enumerate().rev()),
    };

    let selection = Selection::new(state);
    let mut records = Vec::new();

    for (index, line) in ordered {
        let labeled = match parse_line(index, line) {
            LineOutcome::Unparsed(unparsed) => state
                .is_enabled(CategoryKey::Unrecognized)
                .then(|| Labeled::passthrough(unparsed)),
            LineOutcome::Parsed(parsed) => label_parsed(parsed, state, &selection),
        };
        let Some(labeled) = labeled else {
            continue;
        };

        records.push(RenderRecord {
            row: records.len() + 1,
            source_index: index,
            body: labeled.body,
            timestamp_label: labeled.timestamp_label,
            related: labeled.related,
            membership: labeled.membership,
        });
    }

    records
}

// A line that survived filtering, before it is numbered.
struct Labeled {
    body: RecordBody,
    timestamp_label: Option<String>,
    related: bool,
    membership: Option<MembershipTag>,
}

impl Labeled {
    fn passthrough(line: UnparsedLine) -> Self {
        Self {
            body: RecordBody::Passthrough(line),
            timestamp_label: None,
            related: false,
            membership: None,
        }
    }
}

fn label_parsed(parsed: ParsedLine, state: &ViewState, selection: &Selection) -> Option<Labeled> {
    if parsed.is_radio && !state.is_enabled(CategoryKey::Radio) {
        return None;
    }

    let category = parsed.category();
    if let Some(key) = CategoryKey::for_category(category) {
        if !state.is_enabled(key) {
            return None;
        }
    }

    let haystack = format!("{} {}", parsed.speaker_clause, parsed.message).to_lowercase();
    let is_command = category == ActionCategory::Command;
    let related = is_command || selection.mentions_any(&haystack);
    if state.only_related() && !related {
        return None;
    }

    let membership = selection.membership(&parsed.speaker_clause, &haystack, state);
    let timestamp_label = timestamp_label(&parsed, state);
    Some(Labeled {
        body: RecordBody::Parsed(parsed),
        timestamp_label,
        related,
        membership,
    })
}

/// The display timestamp for the date/time toggles. A timestamp that did not
/// normalize is shown verbatim as long as either half is visible.
pub fn timestamp_label(line: &ParsedLine, state: &ViewState) -> Option<String> {
    let show_date = state.is_enabled(CategoryKey::Date);
    let show_time = state.is_enabled(CategoryKey::Time);

    let Some(ts) = line.timestamp else {
        return (show_date || show_time).then(|| line.timestamp_raw.trim().to_string());
    };

    match (show_date, show_time) {
        (true, true) => Some(ts.format("%Y-%m-%d %H:%M:%S").to_string()),
        (true, false) => Some(ts.format("%Y-%m-%d").to_string()),
        (false, true) => Some(ts.format("%H:%M:%S").to_string()),
        (false, false) => None,
    }
}

// Group members with their lower-cased forms, computed once per run.
struct Selection {
    group_a: Vec<(String, String)>,
    group_b: Vec<(String, String)>,
}

impl Selection {
    fn new(state: &ViewState) -> Self {
        let lowered = |group: Group| -> Vec<(String, String)> {
            state
                .members(group)
                .iter()
                .map(|name| (name.clone(), name.to_lowercase()))
                .collect()
        };
        Self {
            group_a: lowered(Group::A),
            group_b: lowered(Group::B),
        }
    }

    fn members(&self, group: Group) -> &[(String, String)] {
        match group {
            Group::A => &self.group_a,
            Group::B => &self.group_b,
        }
    }

    fn mentions_any(&self, haystack: &str) -> bool {
        self.group_a
            .iter()
            .chain(&self.group_b)
            .any(|(_, lower)| !lower.is_empty() && haystack.contains(lower.as_str()))
    }

    // Distinct names of one group occurring in the line, lexicographically sorted.
    fn matched(&self, group: Group, haystack: &str) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .members(group)
            .iter()
            .filter(|(_, lower)| !lower.is_empty() && haystack.contains(lower.as_str()))
            .map(|(name, _)| name.as_str())
            .collect();
        names.sort_unstable();
        names.dedup();
        names
    }

    fn membership(
        &self,
        speaker_clause: &str,
        haystack: &str,
        state: &ViewState,
    ) -> Option<MembershipTag> {
        let speaker = bare_name(speaker_clause)?;
        let group = state.group_of(&speaker)?;

        let matched = self.matched(group, haystack);
        let ordinal = if matched.len() > 1 {
            matched.iter().position(|name| *name == speaker).map(|i| i + 1)
        } else {
            None
        };
        Some(MembershipTag { group, ordinal })
    }
}
