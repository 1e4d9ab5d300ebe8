//! services/viewer/src/cli.rs
//!
//! Command-line options and their translation into an initial view state.

use crate::render::OutputFormat;
use clap::Parser;
use interrogation_core::{CategoryKey, Group, SortOrder, ViewError, ViewState};
use std::path::PathBuf;

/// Render an exported role-play chat transcript as an annotated, filterable view.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "viewer", version)]
pub struct Cli {
    /// Path to the exported transcript (UTF-8 text, one record per line).
    pub transcript: PathBuf,

    /// Output format; overrides VIEWER_FORMAT.
    #[arg(long)]
    pub format: Option<OutputFormat>,

    /// Show the newest lines first.
    #[arg(long)]
    pub descending: bool,

    /// Hide a category: date, time, me, do, ooc, pw, commands, unrecognized, radio.
    #[arg(long = "hide", value_name = "KEY")]
    pub hide: Vec<String>,

    /// Add a participant to group A (interviewers).
    #[arg(long = "group-a", value_name = "NAME")]
    pub group_a: Vec<String>,

    /// Add a participant to group B (interrogated).
    #[arg(long = "group-b", value_name = "NAME")]
    pub group_b: Vec<String>,

    /// Only show lines mentioning a selected participant, plus commands.
    #[arg(long)]
    pub only_related: bool,

    /// List speakers with their line counts and exit.
    #[arg(long)]
    pub speakers: bool,

    /// Read JSON commands from stdin and answer with JSON views on stdout.
    #[arg(long)]
    pub interactive: bool,
}

impl Cli {
    /// Builds the view state the options describe. Group A is applied before
    /// group B, so a name given for both ends up in group B.
    pub fn view_state(&self) -> Result<ViewState, ViewError> {
        let mut state = ViewState::new();
        for key in &self.hide {
            state.set_category_toggle(key.parse::<CategoryKey>()?, false);
        }
        if self.descending {
            state.set_sort_order(SortOrder::Descending);
        }
        for name in &self.group_a {
            state.select(Group::A, name);
        }
        for name in &self.group_b {
            state.select(Group::B, name);
        }
        state.set_only_related(self.only_related);
        Ok(state)
    }
}
