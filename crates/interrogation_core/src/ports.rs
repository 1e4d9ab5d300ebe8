//! crates/interrogation_core/src/ports.rs
//!
//! Defines the service contracts (traits) at the edge of the core.
//! The core reads transcripts through a `TranscriptSource` and reports what it does
//! through a `DiagnosticSink`, so it never owns file handles or process-wide loggers.

use async_trait::async_trait;
use crate::view_state::{CategoryKey, SortOrder};

//=========================================================================================
// Load Error Type
//=========================================================================================

/// Why a transcript could not be loaded. Both variants are terminal for that attempt.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoadError {
    #[error("Transcript source not found: {0}")]
    NotFound(String),
    #[error("Transcript source unreadable: {0}")]
    Unreadable(String),
}

/// A convenience type alias for `Result<T, LoadError>`.
pub type LoadResult<T> = Result<T, LoadError>;

//=========================================================================================
// Service Ports (Traits)
//=========================================================================================

#[async_trait]
pub trait TranscriptSource: Send + Sync {
    /// Human-readable identifier used in diagnostics, e.g. a file path.
    fn describe(&self) -> String;

    /// Reads the whole source as UTF-8 text.
    async fn read_text(&self) -> LoadResult<String>;
}

/// Something the core did that a host application may want to log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    TranscriptLoaded {
        source: String,
        lines: usize,
        speakers: usize,
    },
    LoadFailed {
        source: String,
        error: LoadError,
    },
    ViewRecomputed {
        total: usize,
        shown: usize,
        order: SortOrder,
    },
    ToggleChanged {
        key: CategoryKey,
        visible: bool,
    },
    MutationApplied {
        description: String,
    },
    MutationRejected {
        reason: String,
    },
}

pub trait DiagnosticSink: Send + Sync {
    fn record(&self, event: Diagnostic);
}

/// Discards every diagnostic.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn record(&self, _event: Diagnostic) {}
}
