//! services/viewer/src/render/json.rs
//!
//! JSON renderer. The wire structs live here so the core stays free of any
//! serialization format.

use super::GroupLabels;
use interrogation_core::{Group, RecordBody, RenderRecord};
use serde::Serialize;

/// One render record as sent to JSON consumers.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RecordDto {
    Parsed {
        row: usize,
        source_index: usize,
        timestamp: String,
        date: Option<String>,
        time: Option<String>,
        timestamp_label: Option<String>,
        action: String,
        speaker_clause: String,
        is_radio: bool,
        message: String,
        related: bool,
        tag: Option<TagDto>,
    },
    Passthrough {
        row: usize,
        source_index: usize,
        text: String,
    },
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct TagDto {
    pub group: &'static str,
    pub ordinal: Option<usize>,
    pub label: String,
}

impl RecordDto {
    pub fn from_record(record: &RenderRecord, labels: &GroupLabels) -> Self {
        match &record.body {
            RecordBody::Passthrough(unparsed) => RecordDto::Passthrough {
                row: record.row,
                source_index: record.source_index,
                text: unparsed.text.clone(),
            },
            RecordBody::Parsed(line) => RecordDto::Parsed {
                row: record.row,
                source_index: record.source_index,
                timestamp: line.timestamp_raw.clone(),
                date: line.date(),
                time: line.time(),
                timestamp_label: record.timestamp_label.clone(),
                action: line.action.clone(),
                speaker_clause: line.speaker_clause.clone(),
                is_radio: line.is_radio,
                message: line.message.clone(),
                related: record.related,
                tag: record.membership.map(|tag| TagDto {
                    group: match tag.group {
                        Group::A => "a",
                        Group::B => "b",
                    },
                    ordinal: tag.ordinal,
                    label: labels.tag(&tag),
                }),
            },
        }
    }
}

pub fn to_dtos(records: &[RenderRecord], labels: &GroupLabels) -> Vec<RecordDto> {
    records
        .iter()
        .map(|record| RecordDto::from_record(record, labels))
        .collect()
}

pub fn render(records: &[RenderRecord], labels: &GroupLabels) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&to_dtos(records, labels))
}
