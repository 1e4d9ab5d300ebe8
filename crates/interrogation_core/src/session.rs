//! crates/interrogation_core/src/session.rs
//!
//! The single coordinating context of a viewer: it owns the transcript, the view
//! state and the latest render records, and recomputes the records after every
//! mutation.

use crate::domain::{Group, RenderRecord};
use crate::pipeline::render_records;
use crate::ports::{Diagnostic, DiagnosticSink};
use crate::transcript::{SpeakerCount, Transcript};
use crate::view_state::{CategoryKey, SortOrder, ViewError, ViewState};
use std::sync::Arc;

/// A single user action against the view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mutation {
    SetCategoryToggle { key: CategoryKey, visible: bool },
    SetSortOrder(SortOrder),
    Select { group: Group, name: String },
    Deselect { group: Group, name: String },
    SetOnlyRelated(bool),
}

impl Mutation {
    fn describe(&self) -> String {
        match self {
            Mutation::SetCategoryToggle { key, visible } => format!("toggle {key} = {visible}"),
            Mutation::SetSortOrder(order) => format!("sort order = {order}"),
            Mutation::Select { group, name } => format!("select {name} into group {group}"),
            Mutation::Deselect { group, name } => format!("deselect {name} from group {group}"),
            Mutation::SetOnlyRelated(on) => format!("only related = {on}"),
        }
    }
}

pub struct ViewerSession {
    transcript: Transcript,
    state: ViewState,
    records: Vec<RenderRecord>,
    sink: Arc<dyn DiagnosticSink>,
}

impl ViewerSession {
    /// Starts a session with the default view state.
    pub fn new(transcript: Transcript, sink: Arc<dyn DiagnosticSink>) -> Self {
        Self::with_state(transcript, ViewState::default(), sink)
    }

    pub fn with_state(
        transcript: Transcript,
        state: ViewState,
        sink: Arc<dyn DiagnosticSink>,
    ) -> Self {
        let mut session = Self {
            transcript,
            state,
            records: Vec::new(),
            sink,
        };
        session.recompute();
        session
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn view_state(&self) -> &ViewState {
        &self.state
    }

    /// The records for the latest view state.
    pub fn render_records(&self) -> &[RenderRecord] {
        &self.records
    }

    pub fn speakers(&self) -> Vec<SpeakerCount> {
        self.transcript.speakers()
    }

    /// Applies one mutation and recomputes the view.
    pub fn apply(&mut self, mutation: Mutation) {
        let description = mutation.describe();
        match mutation {
            Mutation::SetCategoryToggle { key, visible } => {
                self.state.set_category_toggle(key, visible);
                self.sink.record(Diagnostic::ToggleChanged { key, visible });
            }
            Mutation::SetSortOrder(order) => self.state.set_sort_order(order),
            Mutation::Select { group, name } => self.state.select(group, &name),
            Mutation::Deselect { group, name } => self.state.deselect(group, &name),
            Mutation::SetOnlyRelated(on) => self.state.set_only_related(on),
        }
        self.sink.record(Diagnostic::MutationApplied { description });
        self.recompute();
    }

    pub fn set_category_toggle(&mut self, key: CategoryKey, visible: bool) {
        self.apply(Mutation::SetCategoryToggle { key, visible });
    }

    /// Toggle lookup by name. An unknown key is rejected and the current view is kept.
    pub fn set_category_toggle_by_name(&mut self, key: &str, visible: bool) -> Result<(), ViewError> {
        match key.parse::<CategoryKey>() {
            Ok(key) => {
                self.set_category_toggle(key, visible);
                Ok(())
            }
            Err(err) => {
                self.reject(&err);
                Err(err)
            }
        }
    }

    pub fn set_sort_order(&mut self, order: SortOrder) {
        self.apply(Mutation::SetSortOrder(order));
    }

    pub fn select_group_a_member(&mut self, name: &str) {
        self.select(Group::A, name);
    }

    pub fn deselect_group_a_member(&mut self, name: &str) {
        self.deselect(Group::A, name);
    }

    pub fn select_group_b_member(&mut self, name: &str) {
        self.select(Group::B, name);
    }

    pub fn deselect_group_b_member(&mut self, name: &str) {
        self.deselect(Group::B, name);
    }

    pub fn select(&mut self, group: Group, name: &str) {
        self.apply(Mutation::Select {
            group,
            name: name.to_string(),
        });
    }

    pub fn deselect(&mut self, group: Group, name: &str) {
        self.apply(Mutation::Deselect {
            group,
            name: name.to_string(),
        });
    }

    pub fn set_only_related(&mut self, only_related: bool) {
        self.apply(Mutation::SetOnlyRelated(only_related));
    }

    /// Reports a mutation the host could not translate. The view is left untouched.
    pub fn reject(&self, err: &ViewError) {
        self.sink.record(Diagnostic::MutationRejected {
            reason: err.to_string(),
        });
    }

    fn recompute(&mut self) {
        self.records = render_records(&self.transcript, &self.state);
        self.sink.record(Diagnostic::ViewRecomputed {
            total: self.transcript.len(),
            shown: self.records.len(),
            order: self.state.sort_order(),
        });
    }
}
