//! services/viewer/src/render/html.rs
//!
//! HTML table renderer with inline styles for syntax highlighting.

use super::GroupLabels;
use interrogation_core::{ActionCategory, Group, RecordBody, RenderRecord};

const TIMESTAMP_COLOR: &str = "#00BFFF";
const SPEAKER_COLOR: &str = "#FFFFFF";
const MESSAGE_COLOR: &str = "#CCCCCC";
const GROUP_A_COLOR: &str = "#00FF00";
const GROUP_B_COLOR: &str = "#FF0000";

/// Colour of an action label.
pub fn action_color(category: ActionCategory) -> &'static str {
    match category {
        ActionCategory::ChatIc => "#FFD700",
        ActionCategory::ChatOoc => "#FF8C00",
        ActionCategory::Me => "#ADFF2F",
        ActionCategory::Do => "#00CED1",
        ActionCategory::Command => "#FF4500",
        ActionCategory::PrivateMessage => "#DA70D6",
        ActionCategory::Unrecognized => "#FFFFFF",
    }
}

pub fn render(records: &[RenderRecord], labels: &GroupLabels) -> String {
    if records.is_empty() {
        return "<p>No lines to display</p>".to_string();
    }

    let rows: String = records
        .iter()
        .map(|record| {
            format!(
                "<tr><td>{}</td><td>{}</td></tr>",
                record.row,
                render_cell(record, labels)
            )
        })
        .collect();
    format!("<table>{rows}</table>")
}

fn render_cell(record: &RenderRecord, labels: &GroupLabels) -> String {
    let line = match &record.body {
        RecordBody::Passthrough(unparsed) => return format!("<pre>{}</pre>", escape(&unparsed.text)),
        RecordBody::Parsed(line) => line,
    };

    let mut parts = Vec::new();
    if let Some(ts) = &record.timestamp_label {
        parts.push(span(TIMESTAMP_COLOR, true, &format!("[{ts}]")));
    }
    parts.push(span(
        action_color(line.category()),
        true,
        &format!("[{}]", line.action),
    ));
    if let Some(tag) = &record.membership {
        let color = match tag.group {
            Group::A => GROUP_A_COLOR,
            Group::B => GROUP_B_COLOR,
        };
        parts.push(span(color, true, &format!("[{}]", labels.tag(tag))));
    }
    if line.has_speaker() {
        parts.push(span(SPEAKER_COLOR, true, &line.speaker_clause));
    }
    parts.push(span(MESSAGE_COLOR, false, &line.message));
    parts.join(" ")
}

fn span(color: &str, bold: bool, text: &str) -> String {
    let weight = if bold { " font-weight: bold;" } else { "" };
    format!(
        "<span style=\"color: {color};{weight}\">{}</span>",
        escape(text)
    )
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use interrogation_core::{Transcript, ViewState};

    fn records(log: &str, state: &ViewState) -> Vec<RenderRecord> {
        interrogation_core::render_records(&Transcript::from_text(log), state)
    }

    #[test]
    fn table_structure() {
        let html = render(
            &records(
                "[2.02.2025 22:19:38] [Czat IC] Jane Smith mówi: Hello world!",
                &ViewState::new(),
            ),
            &GroupLabels::default(),
        );
        assert!(html.starts_with("<table><tr><td>1</td>"));
        assert!(html.contains("[2025-02-02 22:19:38]"));
        assert!(html.contains("color: #FFD700; font-weight: bold;\">[Czat IC]"));
        assert!(html.contains("Jane Smith mówi:"));
        assert!(html.contains("Hello world!"));
    }

    #[test]
    fn passthrough_is_preformatted_and_escaped() {
        let html = render(
            &records("Invalid <line> & more", &ViewState::new()),
            &GroupLabels::default(),
        );
        assert_eq!(
            html,
            "<table><tr><td>1</td><td><pre>Invalid &lt;line&gt; &amp; more</pre></td></tr></table>"
        );
    }

    #[test]
    fn group_tags_are_coloured() {
        let mut state = ViewState::new();
        state.select(Group::B, "John Doe");
        let html = render(
            &records(
                "[2.02.2025 22:20:48] [Czat IC] John Doe mówi (radio): Over.",
                &state,
            ),
            &GroupLabels::new("P", "S"),
        );
        assert!(html.contains("color: #FF0000; font-weight: bold;\">[S]</span>"));
    }

    #[test]
    fn empty_view() {
        assert_eq!(
            render(&[], &GroupLabels::default()),
            "<p>No lines to display</p>"
        );
    }
}
