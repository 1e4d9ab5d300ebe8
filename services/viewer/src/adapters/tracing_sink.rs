//! services/viewer/src/adapters/tracing_sink.rs
//!
//! Forwards core diagnostics to `tracing`.

use interrogation_core::ports::{Diagnostic, DiagnosticSink};
use tracing::{debug, info, warn};

#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn record(&self, event: Diagnostic) {
        match event {
            Diagnostic::TranscriptLoaded {
                source,
                lines,
                speakers,
            } => info!(%source, lines, speakers, "Transcript loaded"),
            Diagnostic::LoadFailed { source, error } => {
                warn!(%source, %error, "Transcript load failed")
            }
            Diagnostic::ViewRecomputed {
                total,
                shown,
                order,
            } => debug!(total, shown, %order, "View recomputed"),
            Diagnostic::ToggleChanged { key, visible } => {
                debug!(%key, visible, "Toggle updated")
            }
            Diagnostic::MutationApplied { description } => debug!(%description, "Mutation applied"),
            Diagnostic::MutationRejected { reason } => warn!(%reason, "Mutation rejected"),
        }
    }
}
