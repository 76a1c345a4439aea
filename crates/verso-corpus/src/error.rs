//! Error types for corpus loading.

use std::{io, path::PathBuf};

use thiserror::Error;

/// Errors that can occur when loading a corpus.
#[derive(Debug, Error)]
pub enum CorpusError {
    /// Failed to read a corpus file.
    #[error("failed to read corpus file {path}: {source}")]
    ReadFile {
        /// Path to the file that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Failed to parse corpus JSON.
    #[error("failed to parse corpus file {path}: {source}")]
    ParseJson {
        /// Path to the file that could not be parsed.
        path: PathBuf,
        /// Underlying JSON error.
        source: serde_json::Error,
    },

    /// The corpus file contained no documents.
    #[error("corpus file contains no documents: {path}")]
    Empty {
        /// Path to the empty corpus file.
        path: PathBuf,
    },
}
