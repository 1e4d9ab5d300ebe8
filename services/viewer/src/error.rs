//! services/viewer/src/error.rs
//!
//! Defines the primary error type for the viewer service.

use crate::config::ConfigError;
use interrogation_core::{LoadError, ViewError};

/// The primary error type for the `viewer` service.
#[derive(Debug, thiserror::Error)]
pub enum ViewerError {
    /// Represents an error that occurred during configuration loading.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The transcript could not be loaded.
    #[error("Load error: {0}")]
    Load(#[from] LoadError),

    /// A view option named a toggle, group or order that does not exist.
    #[error("View error: {0}")]
    View(#[from] ViewError),

    /// Rendering or protocol JSON could not be produced.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Represents a standard Input/Output error (e.g., writing to stdout).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
