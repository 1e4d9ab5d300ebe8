//! services/viewer/src/adapters/fs_source.rs
//!
//! This module contains the filesystem adapter, the concrete implementation of
//! the `TranscriptSource` port from the `core` crate.

use async_trait::async_trait;
use interrogation_core::ports::{LoadError, LoadResult, TranscriptSource};
use std::io::ErrorKind;
use std::path::PathBuf;

//=========================================================================================
// The Main Adapter Struct
//=========================================================================================

/// Reads a transcript exported to a UTF-8 text file.
#[derive(Clone, Debug)]
pub struct FsTranscriptSource {
    path: PathBuf,
}

impl FsTranscriptSource {
    /// Creates a new `FsTranscriptSource`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

//=========================================================================================
// `TranscriptSource` Trait Implementation
//=========================================================================================

#[async_trait]
impl TranscriptSource for FsTranscriptSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    async fn read_text(&self) -> LoadResult<String> {
        let metadata = tokio::fs::metadata(&self.path).await.map_err(|e| match e.kind() {
            ErrorKind::NotFound => LoadError::NotFound(self.describe()),
            _ => LoadError::Unreadable(format!("{}: {}", self.describe(), e)),
        })?;
        if !metadata.is_file() {
            return Err(LoadError::NotFound(self.describe()));
        }

        // Invalid UTF-8 surfaces as `InvalidData` here.
        tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| LoadError::Unreadable(format!("{}: {}", self.describe(), e)))
    }
}
