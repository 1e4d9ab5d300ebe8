//! services/viewer/src/interactive/command_loop.rs
//!
//! Reads commands line by line, applies each one to the session in order and
//! writes the resulting view back.

use crate::error::ViewerError;
use crate::interactive::protocol::{ClientCommand, SpeakerDto, ViewMessage};
use crate::render::json::to_dtos;
use crate::render::GroupLabels;
use interrogation_core::{Group, Mutation, SortOrder, ViewError, ViewerSession};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info};

/// Runs the command loop until the reader is exhausted.
///
/// The current view is sent once before any command is read.
pub async fn run<R, W>(
    session: &mut ViewerSession,
    labels: &GroupLabels,
    reader: R,
    mut writer: W,
) -> Result<(), ViewerError>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    info!("Interactive mode started.");
    send(&mut writer, &view_message(session, labels)).await?;

    let mut lines = reader.lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        let reply = match serde_json::from_str::<ClientCommand>(&line) {
            Ok(command) => {
                debug!(?command, "Command received");
                handle_command(session, command, labels)
            }
            Err(e) => ViewMessage::Error {
                message: format!("Malformed command: {}", e),
            },
        };
        send(&mut writer, &reply).await?;
    }

    info!("Interactive mode finished.");
    Ok(())
}

/// Applies one command and builds the reply.
pub fn handle_command(
    session: &mut ViewerSession,
    command: ClientCommand,
    labels: &GroupLabels,
) -> ViewMessage {
    if let ClientCommand::Speakers = command {
        return speakers_message(session);
    }

    match to_mutation(command) {
        Ok(Some(mutation)) => {
            session.apply(mutation);
            view_message(session, labels)
        }
        Ok(None) => view_message(session, labels),
        Err(err) => {
            session.reject(&err);
            ViewMessage::Error {
                message: err.to_string(),
            }
        }
    }
}

fn to_mutation(command: ClientCommand) -> Result<Option<Mutation>, ViewError> {
    let mutation = match command {
        ClientCommand::SetToggle { key, visible } => Mutation::SetCategoryToggle {
            key: key.parse()?,
            visible,
        },
        ClientCommand::SetSortOrder { order } => Mutation::SetSortOrder(order.parse::<SortOrder>()?),
        ClientCommand::Select { group, name } => Mutation::Select {
            group: group.parse::<Group>()?,
            name,
        },
        ClientCommand::Deselect { group, name } => Mutation::Deselect {
            group: group.parse::<Group>()?,
            name,
        },
        ClientCommand::SetOnlyRelated { enabled } => Mutation::SetOnlyRelated(enabled),
        ClientCommand::Render | ClientCommand::Speakers => return Ok(None),
    };
    Ok(Some(mutation))
}

pub fn view_message(session: &ViewerSession, labels: &GroupLabels) -> ViewMessage {
    let state = session.view_state();
    ViewMessage::View {
        order: state.sort_order().to_string(),
        only_related: state.only_related(),
        group_a: state.members(Group::A).to_vec(),
        group_b: state.members(Group::B).to_vec(),
        records: to_dtos(session.render_records(), labels),
    }
}

fn speakers_message(session: &ViewerSession) -> ViewMessage {
    ViewMessage::Speakers {
        speakers: session
            .speakers()
            .into_iter()
            .map(|s| SpeakerDto {
                display: s.display(),
                name: s.name,
                count: s.count,
            })
            .collect(),
    }
}

async fn send<W: AsyncWrite + Unpin>(writer: &mut W, message: &ViewMessage) -> Result<(), ViewerError> {
    let mut json = serde_json::to_string(message)?;
    json.push('\n');
    writer.write_all(json.as_bytes()).await?;
    writer.flush().await?;
    Ok(())
}
