//! services/viewer/src/interactive/protocol.rs
//!
//! Defines the JSON-lines protocol between a presentation layer and the viewer
//! when it runs with `--interactive`.

use crate::render::json::RecordDto;
use serde::{Deserialize, Serialize};

//=========================================================================================
// Commands Sent TO the Viewer (one JSON object per stdin line)
//=========================================================================================

/// A user action from the presentation layer. Names stay strings here so that an
/// unknown key is reported by the view, not by the JSON decoder.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientCommand {
    /// Shows or hides a category, e.g. `{"type":"set_toggle","key":"radio","visible":false}`.
    SetToggle { key: String, visible: bool },

    /// `asc` or `desc`.
    SetSortOrder { order: String },

    /// Adds a participant to group `a` or `b`, removing it from the other group.
    Select { group: String, name: String },

    Deselect { group: String, name: String },

    SetOnlyRelated { enabled: bool },

    /// Re-sends the current view without changing anything.
    Render,

    /// Asks for the speaker roster.
    Speakers,
}

//=========================================================================================
// Messages Sent FROM the Viewer (one JSON object per stdout line)
//=========================================================================================

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct SpeakerDto {
    pub name: String,
    pub count: usize,
    pub display: String,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ViewMessage {
    /// The full recomputed view after a mutation.
    View {
        order: String,
        only_related: bool,
        group_a: Vec<String>,
        group_b: Vec<String>,
        records: Vec<RecordDto>,
    },

    Speakers { speakers: Vec<SpeakerDto> },

    /// The command was rejected; the previous view is still current.
    Error { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_commands() {
        let cmd: ClientCommand =
            serde_json::from_str(r#"{"type":"select","group":"a","name":"John Doe"}"#).unwrap();
        assert_eq!(
            cmd,
            ClientCommand::Select {
                group: "a".to_string(),
                name: "John Doe".to_string()
            }
        );
        let cmd: ClientCommand = serde_json::from_str(r#"{"type":"render"}"#).unwrap();
        assert_eq!(cmd, ClientCommand::Render);
        assert!(serde_json::from_str::<ClientCommand>(r#"{"type":"explode"}"#).is_err());
    }

    #[test]
    fn encode_error() {
        let msg = ViewMessage::Error {
            message: "nope".to_string(),
        };
        assert_eq!(
            serde_json::to_string(&msg).unwrap(),
            r#"{"type":"error","message":"nope"}"#
        );
    }
}
