//! services/viewer/src/render/text.rs
//!
//! Plain-text renderer, one line per record.

use super::GroupLabels;
use interrogation_core::{RecordBody, RenderRecord};

pub fn render(records: &[RenderRecord], labels: &GroupLabels) -> String {
    let mut out = String::new();
    for record in records {
        out.push_str(&render_line(record, labels));
        out.push('\n');
    }
    out
}

/// `12. [2025-02-02 22:19:38] [Czat IC] [I] Howard Goldberg mówi: Stój!`
pub fn render_line(record: &RenderRecord, labels: &GroupLabels) -> String {
    let line = match &record.body {
        RecordBody::Passthrough(unparsed) => return format!("{}. {}", record.row, unparsed.text),
        RecordBody::Parsed(line) => line,
    };

    let mut parts = vec![format!("{}.", record.row)];
    if let Some(ts) = &record.timestamp_label {
        parts.push(format!("[{ts}]"));
    }
    parts.push(format!("[{}]", line.action));
    if let Some(tag) = &record.membership {
        parts.push(format!("[{}]", labels.tag(tag)));
    }
    if line.has_speaker() {
        parts.push(line.speaker_clause.clone());
    }
    if !line.message.is_empty() {
        parts.push(line.message.clone());
    }
    parts.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use interrogation_core::{CategoryKey, Group, Transcript, ViewState};

    #[test]
    fn lines_with_tags_and_passthrough() {
        let t = Transcript::from_text(
            "[2.02.2025 22:19:38] [Czat IC] Howard Goldberg mówi: Stój!\n\
             not a log line\n\
             [2.02.2025 22:19:40] [Komenda] /cuff 12\n",
        );
        let mut state = ViewState::new();
        state.select(Group::A, "Howard Goldberg");
        state.set_category_toggle(CategoryKey::Date, false);
        let records = interrogation_core::render_records(&t, &state);

        assert_eq!(
            render(&records, &GroupLabels::default()),
            "1. [22:19:38] [Czat IC] [I] Howard Goldberg mówi: Stój!\n\
             2. not a log line\n\
             3. [22:19:40] [Komenda] /cuff 12\n"
        );
    }
}
